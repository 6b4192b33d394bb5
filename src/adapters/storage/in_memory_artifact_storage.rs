//! In-Memory Artifact Storage Adapter
//!
//! Keeps exported artifacts in memory. Useful for testing and for hosts
//! that stream downloads instead of writing files.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_artifact_name, ArtifactStorage, ArtifactStorageError};

/// In-memory storage for artifacts
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStorage {
    artifacts: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryArtifactStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored artifacts
    pub async fn artifact_count(&self) -> usize {
        self.artifacts.read().await.len()
    }
}

#[async_trait]
impl ArtifactStorage for InMemoryArtifactStorage {
    async fn write(&self, name: &str, content: &[u8]) -> Result<String, ArtifactStorageError> {
        validate_artifact_name(name)?;
        self.artifacts
            .write()
            .await
            .insert(name.to_string(), content.to_vec());
        Ok(format!("memory://{}", name))
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, ArtifactStorageError> {
        self.artifacts
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| ArtifactStorageError::NotFound(name.to_string()))
    }

    async fn exists(&self, name: &str) -> Result<bool, ArtifactStorageError> {
        Ok(self.artifacts.read().await.contains_key(name))
    }
}
