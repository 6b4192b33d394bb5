//! ArtifactStorage port for the downloadable report files.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while storing artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactStorageError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid artifact name: {0}")]
    InvalidName(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<ArtifactStorageError> for DomainError {
    fn from(err: ArtifactStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Where artifacts such as `insiktskarta.md` end up.
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Writes an artifact, replacing any previous one with the same name.
    ///
    /// Returns a human-readable location of the stored artifact.
    async fn write(&self, name: &str, content: &[u8]) -> Result<String, ArtifactStorageError>;

    /// Reads an artifact back.
    async fn read(&self, name: &str) -> Result<Vec<u8>, ArtifactStorageError>;

    /// Checks whether an artifact exists.
    async fn exists(&self, name: &str) -> Result<bool, ArtifactStorageError>;
}

/// Rejects names that would escape the storage root.
pub fn validate_artifact_name(name: &str) -> Result<(), ArtifactStorageError> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.contains("..");
    if bad {
        return Err(ArtifactStorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_file_names() {
        assert!(validate_artifact_name("insiktskarta.md").is_ok());
        assert!(validate_artifact_name("mirror-garden.json").is_ok());
    }

    #[test]
    fn rejects_path_components() {
        for name in ["", ".env", "../x.md", "a/b.md", "a\\b.md"] {
            assert!(validate_artifact_name(name).is_err(), "{name}");
        }
    }

    #[test]
    fn maps_to_storage_domain_error() {
        let err: DomainError = ArtifactStorageError::Io("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
