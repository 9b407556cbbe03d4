//! Core types for dependamerge

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies the pull request to fetch from the remote platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Pull request number
    pub number: u64,
}

/// Remote-reported mergeability of a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeableState {
    /// The pull request can be merged without conflicts
    Mergeable,
    /// The pull request has merge conflicts
    Conflicting,
    /// The platform has not finished computing mergeability
    Unknown,
}

impl std::fmt::Display for MergeableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mergeable => write!(f, "mergeable"),
            Self::Conflicting => write!(f, "conflicting"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Pull request state (open, closed, merged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState {
    /// The pull request is open and can be merged
    Open,
    /// The pull request was closed without merging
    Closed,
    /// The pull request was merged
    Merged,
}

impl std::fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// State of a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// The reviewer approved the changes
    Approved,
    /// The reviewer requested changes
    ChangesRequested,
    /// The reviewer commented without a verdict
    Commented,
    /// The review was dismissed
    Dismissed,
    /// The review has not been submitted yet
    Pending,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeMethod {
    /// Create a merge commit
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto the base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

impl std::str::FromStr for MergeMethod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MERGE" => Ok(Self::Merge),
            "SQUASH" => Ok(Self::Squash),
            "REBASE" => Ok(Self::Rebase),
            _ => Err(Error::Config(format!("unknown merge method: {value}"))),
        }
    }
}

/// Merge-relevant snapshot of a pull request
///
/// Fetched once per handler invocation and never mutated afterwards, so the
/// eligibility evaluation stays a pure function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSnapshot {
    /// GraphQL node ID, used for the merge mutation
    pub id: String,
    /// Pull request title
    pub title: String,
    /// Whether the platform considers the pull request mergeable
    pub mergeable: MergeableState,
    /// Whether the pull request has already been merged
    pub merged: bool,
    /// Current state of the pull request
    pub state: PullRequestState,
    /// Author name of the most recent commit, when known
    pub last_commit_author_name: Option<String>,
    /// Full message of the most recent commit
    pub last_commit_message: String,
    /// First line of the most recent commit message
    pub last_commit_headline: String,
    /// State of the most recent review, when one exists
    pub latest_review_state: Option<ReviewState>,
}

/// Input for the merge mutation, built by the eligibility evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeInput {
    /// GraphQL node ID of the pull request to merge
    pub pull_request_id: String,
    /// Headline for the merge commit (the pull request title)
    pub commit_headline: String,
    /// Merge method to use
    pub merge_method: MergeMethod,
}
