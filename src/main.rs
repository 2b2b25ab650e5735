//! HTTP server for the Productivity Impact Engine.
//!
//! Reads its configuration directory from `PRODUCTIVITY_CONFIG_DIR`
//! (default `./config/default`). Log filtering follows `RUST_LOG`, falling
//! back to the configured `log_level`.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use productivity_impact::api::{AppState, create_router};
use productivity_impact::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir =
        env::var("PRODUCTIVITY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server().log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let addr = config.server().socket_addr()?;
    info!(
        config_dir = %config_dir,
        name = %config.metadata().name,
        version = %config.metadata().version,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
