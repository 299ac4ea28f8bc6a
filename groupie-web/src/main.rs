//! groupie-web - Groupie Tracker page server
//!
//! Serves artist pages rendered from the remote artist-tracking API.
//! Default port: 8080

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use groupie_common::config::TomlConfig;
use groupie_web::{build_router, AppState, HttpSource, TemplateRegistry};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for groupie-web
///
/// Flags override the TOML config file, which overrides built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "groupie-web")]
#[command(about = "Server-rendered pages for the Groupie Tracker artist API")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config dir>/groupie-tracker/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the remote artist API
    #[arg(long)]
    api_base_url: Option<String>,

    /// Directory holding the page templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Directory served under /static/
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut config: TomlConfig) -> TomlConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        if let Some(dir) = self.templates_dir {
            config.templates_dir = dir;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let args_config = args.config.clone();
    let config = TomlConfig::resolve(args.config.as_deref())
        .context("Failed to load configuration")?;
    let config = args.apply(config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("groupie_web={0},groupie_common={0},tower_http={0}", config.logging.level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Groupie Tracker (groupie-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &args_config {
        info!("Config file: {}", path.display());
    }
    info!("Remote API: {}", config.api_base_url);

    let timeout = config.upstream_timeout_secs.map(Duration::from_secs);
    if let Some(timeout) = timeout {
        info!("Upstream timeout: {:?}", timeout);
    }
    let source = HttpSource::new(config.api_base_url.clone(), timeout)
        .context("Failed to create HTTP client")?;

    let templates = TemplateRegistry::load(&config.templates_dir);

    let state = AppState::new(Arc::new(source), templates);
    let app = build_router(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
