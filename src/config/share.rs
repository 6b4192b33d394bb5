//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Base URL that share links point at.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    pub base_url: String,
}

impl ShareConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
        }
    }
}
