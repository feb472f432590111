//! Activity classification and aggregation engine.
//!
//! The deterministic core of the service: classify raw feed entries into
//! categories, then fold them into per-day summaries. Pure functions only;
//! the async edges (fetching, serving) live elsewhere.

pub mod aggregator;
pub mod category;
pub mod classifier;

pub use aggregator::{aggregate, DaySummary};
pub use category::ActivityCategory;
pub use classifier::{classify, Classified, Occurrence};
