//! Match ledger HTTP service entrypoint.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use database::SqliteLedger;
use server::{
    build_router,
    config::{resolve_config_path, FileConfig, ServerConfig},
    state::AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
struct Params {
    /// YAML config file; falls back to $LEDGER_CONFIG.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    database_url: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Params::parse();

    let file = match resolve_config_path(args.config) {
        Some(path) => FileConfig::load(&path)?,
        None => FileConfig::default(),
    };
    let config = ServerConfig::resolve(args.database_url, args.port, file)?;

    let ledger = SqliteLedger::connect(&config.database)
        .await
        .with_context(|| format!("opening database {}", config.database.url))?;
    let seeded = ledger
        .seed_players(&config.seed_players)
        .await
        .context("seeding players")?;
    if seeded > 0 {
        info!(count = seeded, "seeded players from config");
    }

    let app = build_router(AppState::new(Arc::new(ledger)));

    info!(addr = %config.addr, database = %config.database.url, "starting server");
    let listener = TcpListener::bind(config.addr)
        .await
        .context("binding server")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Logs request spans from tower-http at debug unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
