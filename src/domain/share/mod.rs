//! Share module - link parameters and the link resolver.

mod link;
mod resolver;

pub use link::{LinkParams, Theme, REPORT_MODE};
pub use resolver::{FreshStart, LinkView, ShareLinkResolver, SharedReport};
