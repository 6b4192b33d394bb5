//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `MIRROR_GARDEN` prefix and nested
//! values are separated by a double underscore. Every section has defaults,
//! so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use mirror_garden::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports served on {}", config.server.bind_address());
//! ```

mod application;
mod error;
mod export;
mod server;
mod share;

pub use application::ApplicationConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::ServerConfig;
pub use share::ShareConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Name and version stamped into exports
    #[serde(default)]
    pub app: ApplicationConfig,

    /// Artifact directory and token compression
    #[serde(default)]
    pub export: ExportConfig,

    /// Base URL for share links
    #[serde(default)]
    pub share: ShareConfig,

    /// Report host and logging
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `MIRROR_GARDEN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MIRROR_GARDEN__SHARE__BASE_URL=...` -> `share.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MIRROR_GARDEN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_core()?;
        self.server.validate()?;
        Ok(())
    }

    /// Validate the sections the terminal commands use; the report host
    /// section is skipped.
    pub fn validate_core(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.export.validate()?;
        self.share.validate()?;
        Ok(())
    }
}
