//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ArtifactStorage` - Where exported report files are written
//! - `SessionRenderer` - The UI surface redrawn after each transition

mod artifact_storage;
mod session_renderer;

pub use artifact_storage::{validate_artifact_name, ArtifactStorage, ArtifactStorageError};
pub use session_renderer::SessionRenderer;
