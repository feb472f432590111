//! Daily aggregation of classified events.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

use super::category::ActivityCategory;
use super::classifier::{classify, Occurrence};
use crate::feed::RawEntry;

/// Per-day aggregate of classified occurrences.
///
/// The map is sparse: a category key exists only when that day saw at least
/// one matching event, so rendering never has to filter out zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// UTC calendar day (`YYYY-MM-DD`), as encoded in the feed.
    pub date: String,
    /// Occurrences per category, each list in feed encounter order.
    pub activities: BTreeMap<ActivityCategory, Vec<Occurrence>>,
}

impl DaySummary {
    fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            activities: BTreeMap::new(),
        }
    }

    /// Total number of occurrences across all categories.
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.activities.values().map(Vec::len).sum()
    }
}

/// Group entries into per-day summaries, excluding everything dated `today`.
///
/// Days come out in first-seen order, which for a newest-first feed means
/// newest day first. Entries dated `today` are skipped entirely: the day is
/// not over, so reporting it would produce a partial summary that changes
/// between requests. The caller decides what "today" is, which keeps the
/// exclusion rule testable without touching the wall clock.
///
/// Entries whose day prefix is not a real calendar date are logged and
/// skipped rather than aggregated under a garbage key.
#[must_use]
pub fn aggregate(entries: &[RawEntry], today: &str) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();

    for entry in entries {
        let date = entry.published_day();
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            warn!(
                id = %entry.id,
                published_at = %entry.published_at,
                "Skipping entry with malformed publication day"
            );
            continue;
        }
        if date == today {
            continue;
        }

        let classified = classify(entry);
        let idx = match days.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                days.push(DaySummary::new(date));
                days.len() - 1
            }
        };
        days[idx]
            .activities
            .entry(classified.category)
            .or_default()
            .push(classified.occurrence);
    }

    days
}
