//! Interactive terminal session.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::{
    CreateShareLinkCommand, CreateShareLinkHandler, ExportArtifactsCommand,
    ExportArtifactsHandler, WizardService,
};
use crate::domain::export::AppInfo;
use crate::domain::foundation::Section;
use crate::domain::session::{ReflectionSession, SessionEvent};

use super::input::{parse_line, PlayAction};
use super::renderer::TerminalRenderer;

const HELP: &str = "n = nästa, b = bakåt, gå <steg>, tema ljust|mörkt, ! = snabb utgång, \
omstart, dela, exportera, q = avsluta. På textsteg skrivs kommandon med ':' först, t.ex. ':n'; \
':rensa' tömmer texten.";

/// Collaborators of the terminal session.
pub struct PlayContext {
    pub app: AppInfo,
    pub share: CreateShareLinkHandler,
    pub export: ExportArtifactsHandler,
}

/// Runs the wizard until the input ends or the user quits.
///
/// Returns the session as it was when the loop ended.
pub async fn run_play<I, W>(
    ctx: &PlayContext,
    session: ReflectionSession,
    input: I,
    output: W,
) -> std::io::Result<ReflectionSession>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut service = WizardService::with_session(session, TerminalRenderer::new(output));
    let (current, renderer) = service.parts_mut();
    renderer.show(current);
    renderer.notice(HELP);

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(service.session(), &line) {
            PlayAction::Command(cmd) => {
                // Rejections are reported through the renderer.
                if let Ok(SessionEvent::ThemeChanged { .. }) = service.apply(cmd) {
                    if let Ok(query) = service.theme_params().to_query_string() {
                        service.renderer_mut().notice(&format!("Länkparameter: ?{}", query));
                    }
                }
            }
            PlayAction::Share => {
                if !on_summary(&mut service) {
                    continue;
                }
                let snapshot = service.session().snapshot(&ctx.app);
                match ctx.share.handle(CreateShareLinkCommand { snapshot }) {
                    Ok(result) => {
                        let text = format!("Delningslänk:\n{}", result.url);
                        service.renderer_mut().notice(&text);
                    }
                    Err(e) => service
                        .renderer_mut()
                        .notice(&format!("Kunde inte skapa länk: {}", e.message)),
                }
            }
            PlayAction::Export => {
                if !on_summary(&mut service) {
                    continue;
                }
                let snapshot = service.session().snapshot(&ctx.app);
                match ctx.export.handle(ExportArtifactsCommand { snapshot }).await {
                    Ok(result) => {
                        let text = format!(
                            "Sparat:\n  {}\n  {}",
                            result.report_location, result.data_location
                        );
                        service.renderer_mut().notice(&text);
                    }
                    Err(e) => service
                        .renderer_mut()
                        .notice(&format!("Kunde inte exportera: {}", e.message)),
                }
            }
            PlayAction::Help => service.renderer_mut().notice(HELP),
            PlayAction::Invalid(hint) => service.renderer_mut().notice(&hint),
            PlayAction::Quit => break,
        }
    }

    let (session, _) = service.into_parts();
    Ok(session)
}

fn on_summary<W: Write>(service: &mut WizardService<TerminalRenderer<W>>) -> bool {
    let ok = !service.session().is_panic_mode()
        && service.session().current_section() == Section::Summary;
    if !ok {
        service
            .renderer_mut()
            .notice("Dela och exportera finns på sista steget.");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryArtifactStorage;
    use crate::domain::export::{ShareCodec, REPORT_FILE_NAME};
    use crate::ports::ArtifactStorage;
    use std::sync::Arc;

    fn context(storage: Arc<InMemoryArtifactStorage>) -> PlayContext {
        PlayContext {
            app: AppInfo::default(),
            share: CreateShareLinkHandler::new(ShareCodec::new(), "http://localhost:8080/"),
            export: ExportArtifactsHandler::new(storage),
        }
    }

    #[tokio::test]
    async fn scripted_walkthrough_exports_and_shares() {
        let storage = Arc::new(InMemoryArtifactStorage::new());
        let ctx = context(storage.clone());
        let script = "namn Ada\nja\nn\n:gå boundaries\n1 9\ngå letter\nHej framtid\nGå vidare.\n:gå summary\ndela\nexportera\nq\n";
        let mut out = Vec::new();

        let session = run_play(&ctx, ReflectionSession::new(), script.as_bytes(), &mut out)
            .await
            .unwrap();

        assert_eq!(session.profile().name, "Ada");
        assert_eq!(session.answers().self_letter(), "Hej framtid\nGå vidare.");
        assert_eq!(session.answers().boundary_sliders()[0].value(), 9);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("http://localhost:8080/?mode=report&r="));
        assert!(storage.exists(REPORT_FILE_NAME).await.unwrap());
    }

    #[tokio::test]
    async fn share_outside_summary_is_refused() {
        let storage = Arc::new(InMemoryArtifactStorage::new());
        let ctx = context(storage.clone());
        let mut out = Vec::new();

        run_play(&ctx, ReflectionSession::new(), "dela\n".as_bytes(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("sista steget"));
        assert_eq!(storage.artifact_count().await, 0);
    }

    #[tokio::test]
    async fn theme_toggle_prints_link_parameter() {
        let ctx = context(Arc::new(InMemoryArtifactStorage::new()));
        let mut out = Vec::new();
        let session = run_play(&ctx, ReflectionSession::new(), "tema ljust\n".as_bytes(), &mut out)
            .await
            .unwrap();
        assert!(session.profile().light_theme);
        assert!(String::from_utf8(out).unwrap().contains("?theme=light"));
    }

    #[tokio::test]
    async fn consent_gate_holds_in_terminal() {
        let ctx = context(Arc::new(InMemoryArtifactStorage::new()));
        let mut out = Vec::new();
        let session = run_play(&ctx, ReflectionSession::new(), "n\n".as_bytes(), &mut out)
            .await
            .unwrap();
        assert_eq!(session.current_section(), Section::Intro);
        assert!(String::from_utf8(out).unwrap().contains("Kryssa i 'ja'"));
    }
}
