//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid server host: {0:?}")]
    InvalidHost(String),

    #[error("Compression level must be between 0 and 9")]
    InvalidCompressionLevel,

    #[error("Decoded payload limit must be positive")]
    InvalidPayloadLimit,

    #[error("Share base URL must start with http:// or https://")]
    InvalidBaseUrl,
}
