//! Sky viewer HTTP server binary.
//!
//! Serves the web viewer and the read-only sky API for the fixed observer
//! (London, 2024-07-01 22:00 UTC).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sky-server
//! PORT=9000 RUST_LOG=debug cargo run --bin sky-server
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: Server port (default: 8000)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sky_interactive::config::{ServerConfig, SkyConfig};
use sky_interactive::http::{create_router, AppState};
use sky_interactive::services::SkyService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
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

    info!("Starting sky viewer server");

    let server = ServerConfig::from_env()?;
    let sky = SkyService::with_static_catalog(SkyConfig::default());
    let sky_config = sky.config();
    info!(
        "Observer at lat {:.4}, lon {:.4}; sky for {} {}",
        sky_config.observer.latitude.value(),
        sky_config.observer.longitude.value(),
        sky_config.observation_date,
        sky_config.observation_time
    );

    let state = AppState::new(sky, &server);
    let app = create_router(state);

    let addr = server.socket_addr();
    info!("Server listening on http://{}", addr);
    info!("Serving page from {}", server.index_file().display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
