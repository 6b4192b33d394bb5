//! Shared report HTTP adapter.
//!
//! Serves the read-only view of share links as themed HTML.

mod handlers;
mod page;
mod routes;

pub use handlers::ReportHandlers;
pub use page::{markdown_to_html, render_landing_page, render_report_page};
pub use routes::report_routes;
