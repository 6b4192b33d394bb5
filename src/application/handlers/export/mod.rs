//! Export handlers.

mod export_artifacts;

pub use export_artifacts::{ExportArtifactsCommand, ExportArtifactsHandler, ExportArtifactsResult};
