//! Configuration for the recap service.

use std::env;

/// Recap service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Public base URL of this service, advertised as the feed's self link.
    /// Falls back to `http://localhost:<port>` when unset.
    pub public_url: Option<String>,
    /// Base URL of the upstream feed host. Overridable so tests can point
    /// the client at a local mock.
    pub feed_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env::var("RECAP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            public_url: env::var("RECAP_PUBLIC_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            feed_base_url: env::var("RECAP_FEED_BASE_URL")
                .unwrap_or_else(|_| "https://github.com".to_string()),
        }
    }
}

impl Config {
    /// Absolute URL of the digest feed served for `handle`.
    #[must_use]
    pub fn self_url(&self, handle: &str) -> String {
        let base = match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        };
        format!("{base}/{handle}")
    }
}
