//! MirrorGarden command line entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mirror_garden::adapters::http::{report_routes, ReportHandlers};
use mirror_garden::adapters::storage::FsArtifactStorage;
use mirror_garden::adapters::terminal::{run_play, PlayContext};
use mirror_garden::application::{
    CreateShareLinkHandler, ExportArtifactsHandler, OpenSharedLinkHandler, OpenSharedLinkQuery,
};
use mirror_garden::config::{AppConfig, ServerConfig};
use mirror_garden::domain::session::ReflectionSession;
use mirror_garden::domain::share::{LinkView, ShareLinkResolver};

/// Guided self-reflection with shareable reports
#[derive(Parser)]
#[command(name = "mirror-garden")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through the reflection wizard in the terminal
    Play {
        /// Directory for exported artifacts
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Open a share link: print a shared report, or start a session in its theme
    Open {
        /// Full URL or bare query string
        link: String,
    },

    /// Serve shared reports over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Command::Serve { host, port } = &cli.command {
        apply_server_overrides(&mut config.server, host.clone(), *port);
    }
    if let Command::Play {
        output_dir: Some(dir),
    } = &cli.command
    {
        config.export.output_dir = dir.clone();
    }
    match &cli.command {
        Command::Serve { .. } => config.validate(),
        _ => config.validate_core(),
    }
    .context("invalid configuration")?;

    setup_logging(&config.server);

    match cli.command {
        Command::Play { .. } => play(&config, ReflectionSession::new()).await,
        Command::Open { link } => open(&config, &link).await,
        Command::Serve { .. } => serve(&config).await,
    }
}

fn apply_server_overrides(server: &mut ServerConfig, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }
}

/// Logs go to stderr so the wizard owns stdout.
fn setup_logging(server: &ServerConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if server.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn play(config: &AppConfig, session: ReflectionSession) -> Result<()> {
    let storage = Arc::new(FsArtifactStorage::new(&config.export.output_dir));
    let ctx = PlayContext {
        app: config.app.app_info(),
        share: CreateShareLinkHandler::new(config.export.codec(), config.share.base_url.clone()),
        export: ExportArtifactsHandler::new(storage),
    };

    tracing::info!(session_id = %session.id(), "reflection session started");
    let input = BufReader::new(tokio::io::stdin());
    let session = run_play(&ctx, session, input, std::io::stdout())
        .await
        .context("terminal session failed")?;
    tracing::info!(session_id = %session.id(), "reflection session ended");
    Ok(())
}

async fn open(config: &AppConfig, link: &str) -> Result<()> {
    let handler = OpenSharedLinkHandler::new(ShareLinkResolver::new(config.export.codec()));
    let query = OpenSharedLinkQuery::from_url(link);

    match handler.handle(&query) {
        LinkView::Report(report) => {
            println!("{}", report.markdown());
            Ok(())
        }
        LinkView::Interactive => {
            let mut session = ReflectionSession::new();
            session.set_theme(query.params.theme())?;
            play(config, session).await
        }
    }
}

async fn serve(config: &AppConfig) -> Result<()> {
    let resolver = ShareLinkResolver::new(config.export.codec());
    let handlers = ReportHandlers::new(Arc::new(OpenSharedLinkHandler::new(resolver)));
    let app = report_routes(handlers);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;

    let addr = listener.local_addr()?;
    tracing::info!(%addr, "report host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
