//! ExportArtifacts - Command handler that writes the report downloads.

use std::sync::Arc;

use crate::domain::export::{
    render_json, render_markdown, SessionSnapshot, DATA_FILE_NAME, REPORT_FILE_NAME,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ArtifactStorage;

/// Command to export a snapshot as Markdown and JSON files.
#[derive(Debug, Clone)]
pub struct ExportArtifactsCommand {
    pub snapshot: SessionSnapshot,
}

/// Locations of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifactsResult {
    pub report_location: String,
    pub data_location: String,
}

/// Handler for exporting artifacts.
///
/// Both files are rendered from the same snapshot.
pub struct ExportArtifactsHandler {
    storage: Arc<dyn ArtifactStorage>,
}

impl ExportArtifactsHandler {
    pub fn new(storage: Arc<dyn ArtifactStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: ExportArtifactsCommand,
    ) -> Result<ExportArtifactsResult, DomainError> {
        let markdown = render_markdown(&cmd.snapshot);
        let json = render_json(&cmd.snapshot)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        let report_location = self
            .storage
            .write(REPORT_FILE_NAME, markdown.as_bytes())
            .await?;
        let data_location = self.storage.write(DATA_FILE_NAME, json.as_bytes()).await?;

        tracing::info!(
            report = %report_location,
            data = %data_location,
            "exported insight map"
        );

        Ok(ExportArtifactsResult {
            report_location,
            data_location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryArtifactStorage;
    use crate::domain::export::AppInfo;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::{AnswerStore, ProfileState};
    use crate::ports::ArtifactStorageError;
    use async_trait::async_trait;

    fn snapshot() -> SessionSnapshot {
        let mut answers = AnswerStore::new();
        answers.set_self_letter("Till mig.");
        SessionSnapshot::capture(
            &AppInfo::default(),
            Timestamp::now(),
            &ProfileState::default(),
            &answers,
        )
    }

    struct FailingStorage;

    #[async_trait]
    impl ArtifactStorage for FailingStorage {
        async fn write(&self, _: &str, _: &[u8]) -> Result<String, ArtifactStorageError> {
            Err(ArtifactStorageError::PermissionDenied("read-only".to_string()))
        }

        async fn read(&self, name: &str) -> Result<Vec<u8>, ArtifactStorageError> {
            Err(ArtifactStorageError::NotFound(name.to_string()))
        }

        async fn exists(&self, _: &str) -> Result<bool, ArtifactStorageError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn writes_report_and_data_from_one_snapshot() {
        let storage = Arc::new(InMemoryArtifactStorage::new());
        let handler = ExportArtifactsHandler::new(storage.clone());
        let snapshot = snapshot();

        handler
            .handle(ExportArtifactsCommand {
                snapshot: snapshot.clone(),
            })
            .await
            .unwrap();

        let report = String::from_utf8(storage.read(REPORT_FILE_NAME).await.unwrap()).unwrap();
        assert!(report.contains("Till mig."));

        let data = storage.read(DATA_FILE_NAME).await.unwrap();
        let parsed: SessionSnapshot = serde_json::from_slice(&data).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[tokio::test]
    async fn storage_failure_maps_to_storage_error() {
        let handler = ExportArtifactsHandler::new(Arc::new(FailingStorage));
        let err = handler
            .handle(ExportArtifactsCommand {
                snapshot: snapshot(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
