use crate::cli::OnMalformed;
use crate::domain::models::ConfigFile;
use std::path::PathBuf;

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let Ok(home) = std::env::var("HOME") else {
        return Ok(ConfigFile::default());
    };
    let path = PathBuf::from(home).join(".config/pocr/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// An explicit CLI flag wins over the config file; the built-in default is
/// `abort`.
pub fn resolve_on_malformed(flag: Option<OnMalformed>, config: &ConfigFile) -> OnMalformed {
    flag.or(config.scan.on_malformed).unwrap_or(OnMalformed::Abort)
}
