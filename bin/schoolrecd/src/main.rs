//! `schoolrecd` — the school-records server binary.
//!
//! Usage:
//!   schoolrecd [-c <config.toml>] [--listen <addr>] [--data-dir <dir>]
//!
//! All storage lives in a single SQLite file under the data directory.

mod config;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use config::ServerConfig;
use roster::RosterService;

/// School records server.
#[derive(Parser, Debug)]
#[command(name = "schoolrecd", about = "School records server")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Data directory (overrides the config file).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let server_config = ServerConfig::load(cli.config.as_deref())?;

    let listen = cli
        .listen
        .or(server_config.listen.clone())
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| PathBuf::from(&server_config.storage.data_dir));

    std::fs::create_dir_all(&data_dir)?;

    let core_config = schoolrec_core::ServiceConfig {
        data_dir: Some(data_dir.clone()),
        listen: listen.clone(),
        ..Default::default()
    };

    // Initialize storage and the roster service.
    let db_path = core_config.resolve_db_path();
    info!("Opening database at {}", db_path.display());
    let sql: Arc<dyn schoolrec_sql::SQLStore> = Arc::new(
        schoolrec_sql::SqliteStore::open(&db_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );
    let roster_service = RosterService::new(sql)
        .map_err(|e| anyhow::anyhow!("failed to initialize roster service: {}", e))?;
    info!("Roster module initialized");

    // Build router.
    let app = routes::build_router(roster::api::build_router(roster_service));

    // Start server.
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("schoolrecd listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}
