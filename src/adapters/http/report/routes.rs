//! HTTP routes for the shared report host.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{download_report, health, show_report, ReportHandlers};

/// Creates the report router with all endpoints.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/", get(show_report))
        .route("/report.md", get(download_report))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(handlers)
}
