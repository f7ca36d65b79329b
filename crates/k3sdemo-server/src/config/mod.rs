//! Server config loader (strict parsing).
//!
//! The config file is optional: a missing file yields defaults, while a file
//! that exists but does not parse or validate is a startup error.

pub mod schema;

use std::{fs, io::ErrorKind, path::Path};

use k3sdemo_core::error::{Result, StatusError};

pub use schema::{ServerConfig, ServerSection};

/// Environment variable naming an alternative config path.
pub const CONFIG_PATH_ENV: &str = "K3SDEMO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "k3sdemo.yaml";

/// Config path from `K3SDEMO_CONFIG`, else `k3sdemo.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file; using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(StatusError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| StatusError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
