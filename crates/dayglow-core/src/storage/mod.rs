mod config;

pub use config::{ClockConfig, Config, NotificationsConfig, TimerConfig, WeatherConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/dayglow/`, or `$DAYGLOW_HOME` when set.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("DAYGLOW_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("dayglow"),
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
