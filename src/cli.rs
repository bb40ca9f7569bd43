use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "pocr", version, about = "Policy OCR CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Scan {
        input: String,
        #[arg(long, help = "Write formatted result lines to this file")]
        output: Option<String>,
        #[arg(long, value_enum, help = "Batch behavior for malformed entries")]
        on_malformed: Option<OnMalformed>,
    },
    Decode {
        top: String,
        middle: String,
        bottom: String,
    },
    Check {
        digits: String,
    },
    Validate {
        input: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OnMalformed {
    Abort,
    Skip,
    Report,
}
