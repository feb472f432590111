//! RSS digest rendering.
//!
//! Builds the RSS 2.0 document by string formatting: one `<item>` per day,
//! each with a CDATA-wrapped HTML fragment listing what happened. Output is
//! a single line with no pretty-printing; feed readers do not care and
//! byte-stable output keeps tests simple.

use std::fmt::Write;

use super::encourage::{PickFn, EMOJIS, MESSAGES};
use crate::activity::{ActivityCategory, DaySummary, Occurrence};

/// Everything the renderer needs for one digest document.
#[derive(Debug)]
pub struct RecapDigest<'a> {
    /// GitHub handle the digest was built for.
    pub handle: &'a str,
    /// Absolute URL this feed is served at, advertised as the self link.
    pub self_url: &'a str,
    /// Raw timestamp of the most recent feed entry, when the feed has one.
    pub last_built: Option<&'a str>,
    /// Per-day summaries; a newest-first feed yields newest day first.
    pub days: &'a [DaySummary],
}

/// Per-category display row: unit noun, its plural, and the verb suffix.
struct CategoryLabel {
    category: ActivityCategory,
    unit: &'static str,
    plural: &'static str,
    suffix: &'static str,
}

/// Fixed render order, one row per category. Days show their lines in this
/// order no matter how the per-day map iterates.
const LABELS: [CategoryLabel; 18] = [
    CategoryLabel {
        category: ActivityCategory::CreateRepository,
        unit: "repository",
        plural: "repositories",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::CreateBranch,
        unit: "branch",
        plural: "branches",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::CreateTag,
        unit: "tag",
        plural: "tags",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::DeleteRepository,
        unit: "repository",
        plural: "repositories",
        suffix: "deleted",
    },
    CategoryLabel {
        category: ActivityCategory::DeleteBranch,
        unit: "branch",
        plural: "branches",
        suffix: "deleted",
    },
    CategoryLabel {
        category: ActivityCategory::DeleteTag,
        unit: "tag",
        plural: "tags",
        suffix: "deleted",
    },
    CategoryLabel {
        category: ActivityCategory::Fork,
        unit: "fork",
        plural: "forks",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::Push,
        unit: "commit",
        plural: "commits",
        suffix: "pushed",
    },
    CategoryLabel {
        category: ActivityCategory::IssuesOpened,
        unit: "issue",
        plural: "issues",
        suffix: "opened",
    },
    CategoryLabel {
        category: ActivityCategory::IssuesClosed,
        unit: "issue",
        plural: "issues",
        suffix: "closed",
    },
    CategoryLabel {
        category: ActivityCategory::PullRequestOpened,
        unit: "pull request",
        plural: "pull requests",
        suffix: "opened",
    },
    CategoryLabel {
        category: ActivityCategory::PullRequestClosed,
        unit: "pull request",
        plural: "pull requests",
        suffix: "closed",
    },
    CategoryLabel {
        category: ActivityCategory::PullRequestMerged,
        unit: "pull request",
        plural: "pull requests",
        suffix: "merged",
    },
    CategoryLabel {
        category: ActivityCategory::IssueComment,
        unit: "time",
        plural: "times",
        suffix: "commented",
    },
    CategoryLabel {
        category: ActivityCategory::PullRequestReviewComment,
        unit: "time",
        plural: "times",
        suffix: "reviewed",
    },
    CategoryLabel {
        category: ActivityCategory::Star,
        unit: "star",
        plural: "stars",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::Watch,
        unit: "watch",
        plural: "watches",
        suffix: "created",
    },
    CategoryLabel {
        category: ActivityCategory::Unknown,
        unit: "unknown activity",
        plural: "unknown activities",
        suffix: "found",
    },
];

/// Render the full RSS document for one digest.
#[must_use]
pub fn render_feed(digest: &RecapDigest<'_>, pick: PickFn) -> String {
    let handle = xml_escape(digest.handle);
    let user_link = format!("https://github.com/{handle}");
    let description = format!("{handle}'s daily activities in GitHub");

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str(
        r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
    );
    xml.push_str("<channel>");
    let _ = write!(xml, "<title>GitHub Recap Feed ({handle})</title>");
    let _ = write!(
        xml,
        r#"<atom:link href="{}" rel="self" type="application/rss+xml" />"#,
        xml_escape(digest.self_url)
    );
    let _ = write!(xml, "<link>{user_link}</link>");
    let _ = write!(xml, "<description>{description}</description>");
    if let Some(last_built) = digest.last_built {
        let _ = write!(xml, "<lastBuildDate>{}</lastBuildDate>", xml_escape(last_built));
    }

    for day in digest.days {
        xml.push_str("<item>");
        let _ = write!(xml, "<title>{description} on {}</title>", day.date);
        let _ = write!(xml, "<description>{}</description>", day_content(day, pick));
        let _ = write!(xml, "<link>{user_link}</link>");
        let _ = write!(
            xml,
            r#"<guid isPermaLink="false">github-recap-feed-{handle}-{}</guid>"#,
            day.date
        );
        let _ = write!(xml, "<pubDate>{}</pubDate>", day.date);
        let _ = write!(xml, "<dc:creator>{handle}</dc:creator>");
        xml.push_str("</item>");
    }

    xml.push_str("</channel></rss>");
    xml
}

/// CDATA-wrapped HTML fragment summarizing one day, closed by an
/// encouragement line.
fn day_content(day: &DaySummary, pick: PickFn) -> String {
    let mut lines: Vec<String> = Vec::new();
    for label in &LABELS {
        if let Some(occurrences) = day.activities.get(&label.category) {
            lines.push(activity_line(label, occurrences));
        }
    }
    lines.push(format!("{} {}", pick(&MESSAGES), pick(&EMOJIS)));

    format!("<![CDATA[<div>{}</div>]]>", lines.join("<br>"))
}

/// One `"<count> <noun> <suffix>: <links>"` line.
///
/// The count is the number of occurrences; the anchors are deduplicated by
/// URL, so three pushes to one repository read "3 commits pushed" with a
/// single link.
fn activity_line(label: &CategoryLabel, occurrences: &[Occurrence]) -> String {
    let count = occurrences.len();
    let noun = if count == 1 { label.unit } else { label.plural };

    let mut seen: Vec<&str> = Vec::new();
    let mut links: Vec<String> = Vec::new();
    for occurrence in occurrences {
        if seen.contains(&occurrence.url.as_str()) {
            continue;
        }
        seen.push(&occurrence.url);
        links.push(format!(
            r#"<a href="{}">{}</a>"#,
            xml_escape(&occurrence.url),
            xml_escape(&occurrence.title)
        ));
    }

    format!("{count} {noun} {}: {}", label.suffix, links.join(", "))
}

/// Entity-escape user data interpolated into markup.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
