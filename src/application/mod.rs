//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod wizard_service;

pub use handlers::{
    CreateShareLinkCommand, CreateShareLinkHandler, CreateShareLinkResult,
    ExportArtifactsCommand, ExportArtifactsHandler, ExportArtifactsResult,
    OpenSharedLinkHandler, OpenSharedLinkQuery,
};
pub use wizard_service::{WizardCommand, WizardService};
