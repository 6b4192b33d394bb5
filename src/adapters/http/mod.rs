//! HTTP adapters.

pub mod report;

pub use report::{report_routes, ReportHandlers};
