//! Core error types for dayglow-core.
//!
//! Weather transport failures are modelled separately from the top-level
//! error so the weather service can log and swallow them while still
//! rejecting bad input (unknown locations) loudly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayglow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Location key is not one of the known locations
    #[error("unknown location: '{0}' (expected one of: bangkok, salaya, phetchaburi)")]
    UnknownLocation(String),

    /// Weather API errors
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while talking to the weather API.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("weather API returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON shape
    #[error("malformed weather response: {0}")]
    Malformed(String),

    /// Configured base URL cannot be parsed
    #[error("invalid weather API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
