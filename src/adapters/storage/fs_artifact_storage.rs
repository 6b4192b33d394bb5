//! Filesystem storage adapter for exported artifacts

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_artifact_name, ArtifactStorage, ArtifactStorageError};

/// Filesystem-based artifact storage
///
/// Writes each artifact as `{output_dir}/{name}`.
pub struct FsArtifactStorage {
    output_dir: PathBuf,
}

impl FsArtifactStorage {
    /// Create new filesystem storage writing into `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, name: &str) -> Result<PathBuf, ArtifactStorageError> {
        validate_artifact_name(name)?;
        Ok(self.output_dir.join(name))
    }
}

fn io_error(action: &str, e: std::io::Error) -> ArtifactStorageError {
    match e.kind() {
        ErrorKind::PermissionDenied => {
            ArtifactStorageError::PermissionDenied(format!("Cannot {}: {}", action, e))
        }
        _ => ArtifactStorageError::Io(format!("Failed to {}: {}", action, e)),
    }
}

#[async_trait]
impl ArtifactStorage for FsArtifactStorage {
    async fn write(&self, name: &str, content: &[u8]) -> Result<String, ArtifactStorageError> {
        let file_path = self.file_path(name)?;

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| io_error("create output directory", e))?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = self.output_dir.join(format!(".{}.tmp", name));
        fs::write(&temp_path, content)
            .await
            .map_err(|e| io_error("write temporary file", e))?;
        if let Err(e) = fs::rename(&temp_path, &file_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(io_error("rename file", e));
        }

        tracing::debug!(path = %file_path.display(), bytes = content.len(), "artifact written");
        Ok(file_path.display().to_string())
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, ArtifactStorageError> {
        let file_path = self.file_path(name)?;
        fs::read(&file_path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ArtifactStorageError::NotFound(name.to_string())
            } else {
                io_error("read file", e)
            }
        })
    }

    async fn exists(&self, name: &str) -> Result<bool, ArtifactStorageError> {
        let file_path = self.file_path(name)?;
        fs::try_exists(&file_path)
            .await
            .map_err(|e| io_error("check file", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path());

        let location = storage.write("insiktskarta.md", b"# Hej").await.unwrap();
        assert!(location.ends_with("insiktskarta.md"));
        assert_eq!(storage.read("insiktskarta.md").await.unwrap(), b"# Hej");
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path().join("exports").join("today"));

        storage.write("mirror-garden.json", b"{}").await.unwrap();
        assert!(storage.exists("mirror-garden.json").await.unwrap());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_content_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path());

        storage.write("insiktskarta.md", b"first").await.unwrap();
        storage.write("insiktskarta.md", b"second").await.unwrap();

        assert_eq!(storage.read("insiktskarta.md").await.unwrap(), b"second");
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path());

        // A non-empty directory in the way makes the rename fail
        let blocker = temp_dir.path().join("insiktskarta.md");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"x").unwrap();

        let result = storage.write("insiktskarta.md", b"# Hej").await;

        assert!(matches!(
            result,
            Err(ArtifactStorageError::Io(_) | ArtifactStorageError::PermissionDenied(_))
        ));
        assert!(!temp_dir.path().join(".insiktskarta.md.tmp").exists());
    }

    #[tokio::test]
    async fn test_read_missing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path());

        let err = storage.read("missing.md").await.unwrap_err();
        assert_eq!(err, ArtifactStorageError::NotFound("missing.md".to_string()));
        assert!(!storage.exists("missing.md").await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsArtifactStorage::new(temp_dir.path());

        let err = storage.write("../escape.md", b"x").await.unwrap_err();
        assert!(matches!(err, ArtifactStorageError::InvalidName(_)));
    }
}
