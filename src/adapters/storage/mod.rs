//! Artifact storage adapters.
//!
//! - `FsArtifactStorage` - Writes artifacts into a directory
//! - `InMemoryArtifactStorage` - Keeps artifacts in memory

mod fs_artifact_storage;
mod in_memory_artifact_storage;

pub use fs_artifact_storage::FsArtifactStorage;
pub use in_memory_artifact_storage::InMemoryArtifactStorage;
