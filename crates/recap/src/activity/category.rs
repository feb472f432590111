//! Activity categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of one feed event.
///
/// The set is closed: the classifier maps every entry to exactly one of
/// these, with [`ActivityCategory::Unknown`] as the catch-all for event
/// types the rules do not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    /// Commits pushed to a branch.
    Push,
    /// Repository created.
    CreateRepository,
    /// Branch created.
    CreateBranch,
    /// Tag created.
    CreateTag,
    /// Repository deleted.
    DeleteRepository,
    /// Branch deleted.
    DeleteBranch,
    /// Tag deleted.
    DeleteTag,
    /// Issue opened (or reopened).
    IssuesOpened,
    /// Issue closed.
    IssuesClosed,
    /// Pull request opened (or reopened).
    PullRequestOpened,
    /// Pull request closed without merging.
    PullRequestClosed,
    /// Pull request merged.
    PullRequestMerged,
    /// Comment on an issue.
    IssueComment,
    /// Review comment on a pull request.
    PullRequestReviewComment,
    /// Repository forked.
    Fork,
    /// Repository starred.
    Star,
    /// Repository watched.
    Watch,
    /// Anything the classifier does not recognize.
    Unknown,
}

impl ActivityCategory {
    /// Get all categories.
    #[must_use]
    pub fn all() -> &'static [ActivityCategory] {
        &[
            ActivityCategory::Push,
            ActivityCategory::CreateRepository,
            ActivityCategory::CreateBranch,
            ActivityCategory::CreateTag,
            ActivityCategory::DeleteRepository,
            ActivityCategory::DeleteBranch,
            ActivityCategory::DeleteTag,
            ActivityCategory::IssuesOpened,
            ActivityCategory::IssuesClosed,
            ActivityCategory::PullRequestOpened,
            ActivityCategory::PullRequestClosed,
            ActivityCategory::PullRequestMerged,
            ActivityCategory::IssueComment,
            ActivityCategory::PullRequestReviewComment,
            ActivityCategory::Fork,
            ActivityCategory::Star,
            ActivityCategory::Watch,
            ActivityCategory::Unknown,
        ]
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityCategory::Push => "Push",
            ActivityCategory::CreateRepository => "CreateRepository",
            ActivityCategory::CreateBranch => "CreateBranch",
            ActivityCategory::CreateTag => "CreateTag",
            ActivityCategory::DeleteRepository => "DeleteRepository",
            ActivityCategory::DeleteBranch => "DeleteBranch",
            ActivityCategory::DeleteTag => "DeleteTag",
            ActivityCategory::IssuesOpened => "IssuesOpened",
            ActivityCategory::IssuesClosed => "IssuesClosed",
            ActivityCategory::PullRequestOpened => "PullRequestOpened",
            ActivityCategory::PullRequestClosed => "PullRequestClosed",
            ActivityCategory::PullRequestMerged => "PullRequestMerged",
            ActivityCategory::IssueComment => "IssueComment",
            ActivityCategory::PullRequestReviewComment => "PullRequestReviewComment",
            ActivityCategory::Fork => "Fork",
            ActivityCategory::Star => "Star",
            ActivityCategory::Watch => "Watch",
            ActivityCategory::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}
