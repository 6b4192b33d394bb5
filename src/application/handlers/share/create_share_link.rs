//! CreateShareLink - Command handler that packs a snapshot into a link.

use crate::domain::export::{SessionSnapshot, ShareCodec, ShareToken};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::share::LinkParams;

/// Command to create a share link for a snapshot.
#[derive(Debug, Clone)]
pub struct CreateShareLinkCommand {
    pub snapshot: SessionSnapshot,
}

/// The link parameters to write and the full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShareLinkResult {
    pub token: ShareToken,
    pub params: LinkParams,
    pub url: String,
}

/// Handler for creating share links.
///
/// The link carries the sharer's theme.
pub struct CreateShareLinkHandler {
    codec: ShareCodec,
    base_url: String,
}

impl CreateShareLinkHandler {
    pub fn new(codec: ShareCodec, base_url: impl Into<String>) -> Self {
        Self {
            codec,
            base_url: base_url.into(),
        }
    }

    pub fn handle(&self, cmd: CreateShareLinkCommand) -> Result<CreateShareLinkResult, DomainError> {
        let token = self.codec.encode(&cmd.snapshot)?;
        let params = LinkParams::for_report(&token, cmd.snapshot.profile().theme());
        let url = params
            .to_url(&self.base_url)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        tracing::debug!(token_len = token.len(), "share link created");

        Ok(CreateShareLinkResult { token, params, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::AppInfo;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::{AnswerStore, ProfileState};
    use crate::domain::share::Theme;

    fn snapshot(light: bool) -> SessionSnapshot {
        let profile = ProfileState {
            light_theme: light,
            ..ProfileState::default()
        };
        SessionSnapshot::capture(&AppInfo::default(), Timestamp::now(), &profile, &AnswerStore::new())
    }

    #[test]
    fn link_carries_mode_token_and_theme() {
        let handler = CreateShareLinkHandler::new(ShareCodec::new(), "https://garden.example/");
        let result = handler
            .handle(CreateShareLinkCommand {
                snapshot: snapshot(true),
            })
            .unwrap();

        assert!(result.params.is_report());
        assert_eq!(result.params.theme(), Theme::Light);
        assert_eq!(result.params.token(), Some(result.token.as_str()));
        assert!(result.url.starts_with("https://garden.example/?mode=report&r="));
        assert!(result.url.ends_with("&theme=light"));
    }

    #[test]
    fn token_decodes_to_the_snapshot() {
        let handler = CreateShareLinkHandler::new(ShareCodec::new(), "http://localhost:8080/");
        let snapshot = snapshot(false);
        let result = handler
            .handle(CreateShareLinkCommand {
                snapshot: snapshot.clone(),
            })
            .unwrap();
        let decoded = ShareCodec::new().decode(result.token.as_str()).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
