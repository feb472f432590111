//! HTTP server for the recap service.
//!
//! One path segment is one GitHub handle: `GET /{handle}` fetches the
//! user's activity feed, folds it into a per-day digest, and answers with
//! the rendered RSS document. Static routes (`/`, `/favicon.ico`,
//! `/health`) win over the handle capture.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::activity::aggregate;
use crate::config::Config;
use crate::digest::{pick_random, render_feed, RecapDigest};
use crate::error::FeedError;
use crate::feed::{FeedClient, FetchedFeed};

/// Landing page served at `/`.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Server state shared across handlers.
///
/// Holds only configuration and the upstream client; every request builds
/// its digest from scratch, so there is nothing mutable to share.
pub struct AppState {
    /// Service configuration
    pub config: Config,
    /// Upstream activity feed client
    pub feed_client: FeedClient,
}

impl AppState {
    /// Create server state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed client cannot be created.
    pub fn new(config: Config) -> Result<Self, FeedError> {
        let feed_client = FeedClient::new(&config.feed_base_url)?;
        Ok(Self {
            config,
            feed_client,
        })
    }
}

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/health", get(health_handler))
        .route("/{handle}", get(digest_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(state: Arc<AppState>, addr: &str) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Recap feed server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Landing page handler.
async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Favicon handler. Browsers ask for it; an empty body keeps the request
/// from falling into the handle capture.
async fn favicon_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "")
}

/// Health check handler.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Digest handler: fetch, aggregate, render.
async fn digest_handler(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> Response {
    let entries = match state.feed_client.fetch(&handle).await {
        Ok(FetchedFeed::Entries(entries)) => entries,
        Ok(FetchedFeed::UnknownUser) => {
            info!(handle = %handle, "No activity feed for handle");
            return (StatusCode::NOT_FOUND, "user not found").into_response();
        }
        Err(e) => {
            error!(handle = %handle, error = %e, "Failed to fetch activity feed");
            return (StatusCode::BAD_GATEWAY, "upstream feed unavailable").into_response();
        }
    };

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let days = aggregate(&entries, &today);
    info!(
        handle = %handle,
        entries = entries.len(),
        days = days.len(),
        "Built digest"
    );

    let self_url = state.config.self_url(&handle);
    let xml = render_feed(
        &RecapDigest {
            handle: &handle,
            self_url: &self_url,
            last_built: entries.first().map(|e| e.published_at.as_str()),
            days: &days,
        },
        pick_random,
    );

    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
