use clap::Parser;

mod cli;
mod commands;
mod domain;
mod ocr;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::output::*;
pub use services::scanner::*;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(&cli, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    commands::handle_runtime_commands(cli, &config)
}

fn report_failure(cli: &Cli, err: &anyhow::Error) {
    if cli.json {
        let out = JsonErrOut {
            ok: false,
            error: ErrorDetail {
                code: error_code(err).to_string(),
                message: err.to_string(),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<MalformedEntry>().is_some()
        || err.downcast_ref::<ocr::ShapeError>().is_some()
    {
        "MALFORMED_ENTRY"
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        "IO_ERROR"
    } else {
        "INTERNAL"
    }
}
