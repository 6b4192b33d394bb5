//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod export;
pub mod share;

pub use export::{ExportArtifactsCommand, ExportArtifactsHandler, ExportArtifactsResult};
pub use share::{
    CreateShareLinkCommand, CreateShareLinkHandler, CreateShareLinkResult, OpenSharedLinkHandler,
    OpenSharedLinkQuery,
};
