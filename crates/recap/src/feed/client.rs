//! Activity feed fetching.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use tracing::debug;

use super::parser::parse_feed;
use super::types::RawEntry;
use crate::error::FeedError;

/// Outcome of fetching a user's activity feed.
///
/// An existing user with no recent activity yields `Entries(vec![])`, which
/// is a different thing than `UnknownUser`.
#[derive(Debug, Clone)]
pub enum FetchedFeed {
    /// The user exists; zero or more raw entries in feed order.
    Entries(Vec<RawEntry>),
    /// The upstream has no activity feed for this handle.
    UnknownUser,
}

/// HTTP client for per-user activity feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a client for the given feed host (`https://github.com` in
    /// production).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/atom+xml"));
        headers.insert(USER_AGENT, HeaderValue::from_static("recap-feed/0.1"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch and parse the activity feed for `handle`.
    ///
    /// A 404 status, a literal `Not Found` body, or a well-formed non-Atom
    /// document all mean "no feed for this user" and map to
    /// [`FetchedFeed::UnknownUser`]. Any other upstream failure is an error.
    pub async fn fetch(&self, handle: &str) -> Result<FetchedFeed, FeedError> {
        let url = format!("{}/{handle}.atom", self.base_url);
        debug!(url = %url, "Fetching activity feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FetchedFeed::UnknownUser);
        }
        if !status.is_success() {
            return Err(FeedError::UpstreamStatus(status));
        }

        let body = response.text().await?;
        if body.is_empty() || body == "Not Found" {
            return Ok(FetchedFeed::UnknownUser);
        }

        match parse_feed(&body) {
            Ok(entries) => Ok(FetchedFeed::Entries(entries)),
            Err(FeedError::NotAtom) => Ok(FetchedFeed::UnknownUser),
            Err(e) => Err(e),
        }
    }
}
