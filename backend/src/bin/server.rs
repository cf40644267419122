//! Statistics HTTP Server Binary
//!
//! Loads configuration, creates (and optionally seeds) the repository, and
//! serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin stats-server
//!
//! STATS_CONFIG=backend/stats.toml STATS_SEED_FILE=statistics.json \
//!   cargo run --bin stats-server
//! ```
//!
//! # Environment Variables
//!
//! - `STATS_CONFIG`: Path to the TOML configuration (default: search `stats.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `STATS_SEED_FILE`: JSON statistics to load at startup
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use collab_stats::config::AppConfig;
use collab_stats::db::RepositoryFactory;
use collab_stats::http::{create_router_with_limit, AppState};

fn load_config() -> anyhow::Result<AppConfig> {
    let config = match env::var("STATS_CONFIG") {
        Ok(path) => AppConfig::from_file(&path)?,
        Err(_) => AppConfig::from_default_location().unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            AppConfig::default()
        }),
    };
    Ok(config.apply_env_overrides())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting statistics server");

    let config = load_config()?;

    let repository = RepositoryFactory::from_config(&config).await?;
    info!("Repository initialized successfully");

    let state = AppState::new(repository).with_max_months(config.server.max_months);
    let app = create_router_with_limit(state, config.server.body_limit_bytes);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
