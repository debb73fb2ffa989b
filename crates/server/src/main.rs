use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use pholio_catalog::CatalogService;
use pholio_server::api::AppState;
use pholio_server::config::PholioConfig;
use pholio_server::repository_factory;

/// Pholio photo catalog HTTP server.
#[derive(Parser, Debug)]
#[command(name = "pholio-server", about = "Standalone HTTP server for Pholio")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "pholio.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber from RUST_LOG or default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration from TOML file, or use defaults if the file does not exist.
    let config: PholioConfig = if Path::new(&cli.config).exists() {
        let contents = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&contents)?
    } else {
        info!(
            path = %cli.config,
            "config file not found, using defaults"
        );
        toml::from_str("")?
    };

    // Create the repository backend and the catalog service over it.
    let repository = repository_factory::create_repository(&config.repository)?;
    info!(backend = %config.repository.backend, "repository initialized");

    let catalog = Arc::new(CatalogService::new(repository));
    let state = AppState { catalog };
    let app = pholio_server::api::router(state);

    // Resolve the bind address (CLI overrides take precedence).
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "pholio-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("pholio-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
