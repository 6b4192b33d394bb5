//! ShareLinkResolver - decides between the interactive wizard and the
//! read-only report view for an incoming link.

use crate::domain::export::{render_markdown, SessionSnapshot, ShareCodec};
use crate::domain::session::ReflectionSession;

use super::link::{LinkParams, Theme};

/// What an incoming link opens.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkView {
    /// A fresh interactive session.
    Interactive,
    /// A decoded report, shown read-only.
    Report(SharedReport),
}

impl LinkView {
    pub fn is_report(&self) -> bool {
        matches!(self, LinkView::Report(_))
    }
}

/// A decoded snapshot opened from a share link.
///
/// Read-only: the only way forward is [`leave`](SharedReport::leave).
#[derive(Debug, Clone, PartialEq)]
pub struct SharedReport {
    snapshot: SessionSnapshot,
    theme: Theme,
}

/// State after leaving a shared report.
#[derive(Debug)]
pub struct FreshStart {
    /// Link parameters to write back, all cleared.
    pub params: LinkParams,
    pub session: ReflectionSession,
}

impl SharedReport {
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Theme from the link; overrides the viewer's own preference for this view.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn markdown(&self) -> String {
        render_markdown(&self.snapshot)
    }

    /// Leaves the report: clears the link parameters and starts a new session.
    pub fn leave(self) -> FreshStart {
        FreshStart {
            params: LinkParams::default(),
            session: ReflectionSession::new(),
        }
    }
}

/// Resolves link parameters into a view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareLinkResolver {
    codec: ShareCodec,
}

impl ShareLinkResolver {
    pub fn new(codec: ShareCodec) -> Self {
        Self { codec }
    }

    /// Returns the report view for `mode=report` with a decodable token and
    /// the interactive view otherwise. Never fails.
    pub fn resolve(&self, params: &LinkParams) -> LinkView {
        if !params.is_report() {
            return LinkView::Interactive;
        }
        let Some(token) = params.token() else {
            tracing::debug!("report link without token, opening interactive session");
            return LinkView::Interactive;
        };
        match self.codec.decode(token) {
            Ok(snapshot) => LinkView::Report(SharedReport {
                snapshot,
                theme: params.theme(),
            }),
            Err(err) => {
                tracing::debug!(
                    stage = ?err.stage(),
                    token_len = token.len(),
                    "share token rejected, opening interactive session"
                );
                LinkView::Interactive
            }
        }
    }
}
