//! OpenSharedLink - Query handler that resolves an incoming link.

use crate::domain::share::{LinkParams, LinkView, ShareLinkResolver};

/// Query for the view an incoming link opens.
#[derive(Debug, Clone, Default)]
pub struct OpenSharedLinkQuery {
    pub params: LinkParams,
}

impl OpenSharedLinkQuery {
    /// Builds the query from a full URL or a bare query string.
    pub fn from_url(url: &str) -> Self {
        Self {
            params: LinkParams::from_url(url),
        }
    }
}

/// Handler for opening shared links. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSharedLinkHandler {
    resolver: ShareLinkResolver,
}

impl OpenSharedLinkHandler {
    pub fn new(resolver: ShareLinkResolver) -> Self {
        Self { resolver }
    }

    pub fn handle(&self, query: &OpenSharedLinkQuery) -> LinkView {
        let view = self.resolver.resolve(&query.params);
        if query.params.is_report() && !view.is_report() {
            tracing::info!("shared report could not be opened, starting interactive session");
        }
        view
    }
}
