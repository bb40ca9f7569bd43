use crate::cli::OnMalformed;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErrOut {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// One scanned entry. `digits`/`line` are absent for malformed entries,
/// `reason` is present only for them.
#[derive(Serialize)]
pub struct EntryReport {
    pub index: usize,
    pub digits: Option<String>,
    pub status: String,
    pub line: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize, Default)]
pub struct ScanReport {
    pub scanned: usize,
    pub clean: usize,
    pub checksum_errors: usize,
    pub illegible: usize,
    pub malformed: usize,
    pub entries: Vec<EntryReport>,
}

#[derive(Serialize)]
pub struct DecodeReport {
    pub digits: String,
    pub status: String,
    pub line: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub digits: String,
    pub valid_checksum: bool,
    pub status: String,
    pub line: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScanConfig {
    #[serde(default)]
    pub on_malformed: Option<OnMalformed>,
}
