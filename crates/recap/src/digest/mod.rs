//! Digest rendering: RSS document assembly plus encouragement lines.

pub mod encourage;
pub mod render;

pub use encourage::{pick_random, PickFn};
pub use render::{render_feed, RecapDigest};
