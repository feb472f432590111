//! Recap service binary.
//!
//! Serves a daily-digest RSS feed of a GitHub user's public activity.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recap::server::{run_server, AppState};
use recap::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("recap=info".parse()?))
        .init();

    info!("Starting recap feed service...");

    // Load configuration
    let config = Config::default();
    let addr = format!("0.0.0.0:{}", config.port);
    info!(
        feed_base_url = %config.feed_base_url,
        "Upstream feed host configured"
    );

    let state = AppState::new(config).context("Failed to create feed client")?;

    run_server(Arc::new(state), &addr)
        .await
        .context("Server error")?;

    Ok(())
}
