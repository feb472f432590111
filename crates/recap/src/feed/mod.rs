//! Raw activity feed source: HTTP fetch plus Atom parsing.

pub mod client;
pub mod parser;
pub mod types;

pub use client::{FeedClient, FetchedFeed};
pub use parser::parse_feed;
pub use types::RawEntry;
