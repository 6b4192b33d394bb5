//! Application identity configuration

use serde::Deserialize;

use crate::domain::export::{AppInfo, APP_NAME, APP_VERSION};

use super::error::ValidationError;

/// Name and version stamped into every exported snapshot.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl ApplicationConfig {
    pub fn app_info(&self) -> AppInfo {
        AppInfo {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("app.name"));
        }
        if self.version.trim().is_empty() {
            return Err(ValidationError::MissingRequired("app.version"));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
        }
    }
}
