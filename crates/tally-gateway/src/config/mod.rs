//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use tally_core::error::{Result, TallyError};

pub use schema::{GatewayConfig, LogSection, ServerSection};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "TALLY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, or fall back to defaults when the file does not exist.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(TallyError::Internal(format!("read config failed: {e}"))),
    }
}

/// Resolve the config path from `TALLY_CONFIG`, defaulting to `tally.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
