//! Error types for the recap service.

use thiserror::Error;

/// Errors that can occur when fetching or parsing an activity feed.
///
/// "User does not exist" is deliberately not an error: the fetcher reports it
/// as a [`crate::feed::FetchedFeed::UnknownUser`] outcome so callers cannot
/// confuse it with a transport failure.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint answered with an unexpected status
    #[error("feed endpoint returned {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// Response body is not well-formed XML
    #[error("invalid feed document: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed XML, but not an Atom feed
    #[error("document is not an Atom feed")]
    NotAtom,
}
