//! Hashery CLI and REST API entry point.
//!
//! Binary name: `hashery`
//!
//! Parses CLI arguments, builds the immutable service configuration, then
//! starts the REST API server or prints shell completions.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use hashery_infra::config::load_service_config;
use hashery_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands, ServeArgs};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "hashery", &mut std::io::stdout());
            Ok(())
        }
        Commands::Serve(args) => {
            init_tracing(cli.log_filter(), args.otel)
                .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
            let result = serve(args).await;
            shutdown_tracing();
            result
        }
    }
}

/// Build config and state, bind, and serve until Ctrl+C / SIGTERM.
async fn serve(args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = load_service_config(args.config.as_deref()).await?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let addr = config.bind_addr();
    let state = AppState::new(config)?;
    let router = http::router::build_router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Hashing service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
