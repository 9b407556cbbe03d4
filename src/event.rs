//! Workflow event payload consumed by the handler
//!
//! Both top-level sections are optional so that a payload from some other
//! event type degrades to a no-op instead of a parse failure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The pull request event payload delivered by the workflow runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// Pull request section, absent for non-PR events
    #[serde(default)]
    pub pull_request: Option<EventPullRequest>,
    /// Repository section, absent for some event types
    #[serde(default)]
    pub repository: Option<EventRepository>,
}

/// Pull request fields used by the handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPullRequest {
    /// Pull request number
    pub number: u64,
    /// GraphQL node ID
    pub node_id: String,
    /// Pull request title
    pub title: String,
    /// Account that opened the pull request
    pub user: EventAccount,
}

/// Repository the event refers to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepository {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: EventAccount,
}

/// A user or organization account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAccount {
    /// Account login
    pub login: String,
}

/// Read and parse the event payload file written by the workflow runner
pub fn load_event(path: &Path) -> Result<PullRequestEvent> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Event(format!("cannot read {}: {e}", path.display())))?;

    serde_json::from_str(&raw)
        .map_err(|e| Error::Event(format!("cannot parse {}: {e}", path.display())))
}
