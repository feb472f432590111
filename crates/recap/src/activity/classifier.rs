//! Event classification.
//!
//! Maps one raw feed entry to an activity category plus a display
//! occurrence. Classification is an ordered rule table: each rule either
//! recognizes the event or passes, and the first match wins. Anything no
//! rule recognizes lands in [`ActivityCategory::Unknown`] so it stays
//! visible in the rendered digest instead of being dropped.
//!
//! The feed's human title is the only discriminator between sibling event
//! subtypes (an opened and a closed issue share one event type), so the
//! keyword checks on the title and their order are part of the contract.

use regex::Regex;
use std::sync::LazyLock;

use super::category::ActivityCategory;
use crate::feed::RawEntry;

/// Event-type token embedded in an entry id
/// (`tag:github.com,2008:PushEvent/123` carries `Push`).
static EVENT_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([A-Za-z]+)Event").unwrap());

/// Trailing issue/PR reference in a title token (`alice/widget#7`).
static TRAILING_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d+$").unwrap());

/// One display instance of a classified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Human-readable label (repo name, or `repo#number` for issues/PRs).
    pub title: String,
    /// Link target for the label.
    pub url: String,
}

/// Classifier output: the category an event belongs to plus how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub category: ActivityCategory,
    pub occurrence: Occurrence,
}

/// Everything a rule may look at, derived once per entry.
struct EventContext<'a> {
    /// `Push`, `Issues`, `Create`, ... or empty when the id carries none.
    event_key: &'a str,
    title: &'a str,
    primary_link: Option<&'a str>,
    /// Final whitespace-delimited title token, as written in the feed.
    last_token: &'a str,
    /// `last_token` with any trailing `#<number>` stripped.
    repo_name: String,
}

impl<'a> EventContext<'a> {
    fn from_entry(entry: &'a RawEntry) -> Self {
        let event_key = EVENT_KEY
            .captures(&entry.id)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());
        let last_token = entry.title_text.split_whitespace().last().unwrap_or("");
        let repo_name = TRAILING_REF.replace(last_token, "").into_owned();

        Self {
            event_key,
            title: &entry.title_text,
            primary_link: entry.primary_link(),
            last_token,
            repo_name,
        }
    }

    fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo_name)
    }

    /// Classification pointing at the repository itself.
    fn repo_default(&self, category: ActivityCategory) -> Classified {
        Classified {
            category,
            occurrence: Occurrence {
                title: self.repo_name.clone(),
                url: self.repo_url(),
            },
        }
    }

    fn primary_or_repo_url(&self) -> String {
        self.primary_link
            .map_or_else(|| self.repo_url(), ToString::to_string)
    }
}

/// One classification rule: recognize the event or pass.
type Rule = for<'a> fn(&EventContext<'a>) -> Option<Classified>;

/// Ordered rule table; first match wins.
const RULES: &[Rule] = &[
    push_and_fork,
    create_and_delete,
    comments,
    issues_and_pull_requests,
    watch_and_star,
];

/// Classify one raw entry.
///
/// Total function: entries no rule recognizes come back as
/// [`ActivityCategory::Unknown`] with the repo-default occurrence, never an
/// error. Classifying the same entry twice yields the same result.
#[must_use]
pub fn classify(entry: &RawEntry) -> Classified {
    let ctx = EventContext::from_entry(entry);
    RULES
        .iter()
        .find_map(|rule| rule(&ctx))
        .unwrap_or_else(|| ctx.repo_default(ActivityCategory::Unknown))
}

/// `Push` and `Fork` map straight through with repo defaults.
fn push_and_fork(ctx: &EventContext<'_>) -> Option<Classified> {
    let category = match ctx.event_key {
        "Push" => ActivityCategory::Push,
        "Fork" => ActivityCategory::Fork,
        _ => return None,
    };
    Some(ctx.repo_default(category))
}

/// `Create`/`Delete` disambiguate on the object kind named in the title.
///
/// Checked as repository, then branch, then tag. A title naming none of
/// them passes, which drops the event to `Unknown`.
fn create_and_delete(ctx: &EventContext<'_>) -> Option<Classified> {
    let creating = match ctx.event_key {
        "Create" => true,
        "Delete" => false,
        _ => return None,
    };

    let category = if ctx.title.contains("repository") {
        if creating {
            ActivityCategory::CreateRepository
        } else {
            ActivityCategory::DeleteRepository
        }
    } else if ctx.title.contains("branch") {
        if creating {
            ActivityCategory::CreateBranch
        } else {
            ActivityCategory::DeleteBranch
        }
    } else if ctx.title.contains("tag") {
        if creating {
            ActivityCategory::CreateTag
        } else {
            ActivityCategory::DeleteTag
        }
    } else {
        return None;
    };

    Some(ctx.repo_default(category))
}

/// Comment events point at the thing commented on, not the repository.
fn comments(ctx: &EventContext<'_>) -> Option<Classified> {
    let category = match ctx.event_key {
        "IssueComment" => ActivityCategory::IssueComment,
        "PullRequestReviewComment" => ActivityCategory::PullRequestReviewComment,
        _ => return None,
    };

    Some(Classified {
        category,
        occurrence: Occurrence {
            title: ctx.last_token.to_string(),
            url: ctx.primary_or_repo_url(),
        },
    })
}

/// `Issues`/`PullRequest` disambiguate on the action named in the title.
///
/// Keyword order is contractual: "reopened" contains "opened" and must land
/// on the opened category. Titles naming no recognized action pass, which
/// drops the event to `Unknown`.
fn issues_and_pull_requests(ctx: &EventContext<'_>) -> Option<Classified> {
    let issues = match ctx.event_key {
        "Issues" => true,
        "PullRequest" => false,
        _ => return None,
    };

    let category = if ctx.title.contains("opened") {
        if issues {
            ActivityCategory::IssuesOpened
        } else {
            ActivityCategory::PullRequestOpened
        }
    } else if ctx.title.contains("closed") {
        if issues {
            ActivityCategory::IssuesClosed
        } else {
            ActivityCategory::PullRequestClosed
        }
    } else if !issues && ctx.title.contains("merged") {
        ActivityCategory::PullRequestMerged
    } else {
        return None;
    };

    let url = ctx.primary_or_repo_url();
    let number = trailing_path_segment(&url).to_string();

    Some(Classified {
        category,
        occurrence: Occurrence {
            title: format!("{}#{number}", ctx.repo_name),
            url,
        },
    })
}

/// `Watch` events are stars when the title says so.
fn watch_and_star(ctx: &EventContext<'_>) -> Option<Classified> {
    if ctx.event_key != "Watch" {
        return None;
    }
    let category = if ctx.title.contains("star") {
        ActivityCategory::Star
    } else {
        ActivityCategory::Watch
    };
    Some(ctx.repo_default(category))
}

/// Final path segment of a link, query string and fragment stripped.
fn trailing_path_segment(link: &str) -> &str {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}
