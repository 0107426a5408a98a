mod config;

pub use config::{Config, OutputConfig, OutputFormat, PlannerConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the zeno config directory, creating it if needed.
///
/// `ZENO_CONFIG_DIR` wins when set. Otherwise `~/.config/zeno[-dev]/`,
/// where the `-dev` suffix is selected by `ZENO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ZENO_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ZENO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("zeno-dev")
            } else {
                base_dir.join("zeno")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
