//! HTTP handlers for the shared report host.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::application::handlers::{OpenSharedLinkHandler, OpenSharedLinkQuery};
use crate::domain::export::REPORT_FILE_NAME;
use crate::domain::share::{LinkParams, LinkView};

use super::page::{render_landing_page, render_report_page};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReportHandlers {
    open_handler: Arc<OpenSharedLinkHandler>,
}

impl ReportHandlers {
    pub fn new(open_handler: Arc<OpenSharedLinkHandler>) -> Self {
        Self { open_handler }
    }
}

fn resolve(handlers: &ReportHandlers, query: Option<String>) -> (LinkParams, LinkView) {
    let params = LinkParams::parse_query(query.as_deref().unwrap_or_default());
    let view = handlers.open_handler.handle(&OpenSharedLinkQuery {
        params: params.clone(),
    });
    (params, view)
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /?mode=report&r=...&theme=... - Shared report page
///
/// Links that do not decode fall back to the landing page.
pub async fn show_report(
    State(handlers): State<ReportHandlers>,
    RawQuery(query): RawQuery,
) -> Response {
    match resolve(&handlers, query) {
        (_, LinkView::Report(report)) => Html(render_report_page(&report)).into_response(),
        (params, LinkView::Interactive) => Html(render_landing_page(params.theme())).into_response(),
    }
}

/// GET /report.md?mode=report&r=... - Shared report as a Markdown download
pub async fn download_report(
    State(handlers): State<ReportHandlers>,
    RawQuery(query): RawQuery,
) -> Response {
    match resolve(&handlers, query) {
        (_, LinkView::Report(report)) => (
            [
                (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
                ),
            ],
            report.markdown(),
        )
            .into_response(),
        (_, LinkView::Interactive) => {
            (StatusCode::NOT_FOUND, "No readable report in this link").into_response()
        }
    }
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
