//! GitHub activity recap service.
//!
//! Turns a user's public GitHub Atom feed into a daily-digest RSS feed:
//! - Fetches `https://github.com/<handle>.atom` and parses the raw entries
//! - Classifies each event into a semantic activity category
//! - Groups classified events by UTC calendar day (today stays out until
//!   the day is over)
//! - Renders one RSS item per day with a readable summary of what happened
//!
//! The pipeline is one-way and stateless: every request rebuilds its digest
//! from the upstream feed.

pub mod activity;
pub mod config;
pub mod digest;
pub mod error;
pub mod feed;
pub mod server;

pub use activity::{aggregate, classify, ActivityCategory, Classified, DaySummary, Occurrence};
pub use config::Config;
pub use error::FeedError;
pub use feed::{FeedClient, FetchedFeed, RawEntry};
