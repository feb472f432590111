//! Raw activity feed types.

use serde::{Deserialize, Serialize};

/// One raw entry from a user's activity feed, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Opaque entry identifier carrying the embedded event-type token
    /// (e.g. `tag:github.com,2008:PushEvent/123456`).
    pub id: String,
    /// Raw publication timestamp (`2024-05-01T12:34:56Z`). Only the day
    /// part is significant downstream.
    pub published_at: String,
    /// Plain-text entry title ("alice pushed to main in alice/widget").
    pub title_text: String,
    /// Link URLs in document order; the first is the primary link.
    pub links: Vec<String>,
}

impl RawEntry {
    /// Primary link of the entry, when present.
    #[must_use]
    pub fn primary_link(&self) -> Option<&str> {
        self.links.first().map(String::as_str)
    }

    /// Calendar-day part of the publication timestamp.
    #[must_use]
    pub fn published_day(&self) -> &str {
        match self.published_at.split_once('T') {
            Some((day, _)) => day,
            None => &self.published_at,
        }
    }
}
