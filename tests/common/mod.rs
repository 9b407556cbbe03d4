//! Shared fixtures for dependamerge tests

#![allow(dead_code)]

pub mod mock_platform;

pub use mock_platform::{MergeOutcome, MockPlatform};

use dependamerge::config::{MergeConfig, MergePreset};
use dependamerge::event::{EventAccount, EventPullRequest, EventRepository, PullRequestEvent};
use dependamerge::types::{
    MergeMethod, MergeableState, PullRequestSnapshot, PullRequestState, ReviewState,
};

/// Login used for the bot across fixtures
pub const BOT_LOGIN: &str = "dependabot[bot]";

/// Config allowing up to minor bumps, squash-merged by the bot login
pub fn minor_config() -> MergeConfig {
    MergeConfig {
        login: BOT_LOGIN.to_string(),
        merge_method: MergeMethod::Squash,
        preset: MergePreset::DependabotMinor,
        max_attempts: 3,
    }
}

/// Snapshot of an approved, open, mergeable pull request authored by the bot
pub fn mergeable_snapshot(title: &str) -> PullRequestSnapshot {
    PullRequestSnapshot {
        id: "PR_node_1".to_string(),
        title: title.to_string(),
        mergeable: MergeableState::Mergeable,
        merged: false,
        state: PullRequestState::Open,
        last_commit_author_name: Some(BOT_LOGIN.to_string()),
        last_commit_message: format!("{title}\n\nSigned-off-by: dependabot[bot]"),
        last_commit_headline: title.to_string(),
        latest_review_state: Some(ReviewState::Approved),
    }
}

/// Event payload for a pull request opened by `login`
pub fn pull_request_event(login: &str, title: &str) -> PullRequestEvent {
    PullRequestEvent {
        pull_request: Some(EventPullRequest {
            number: 42,
            node_id: "PR_node_1".to_string(),
            title: title.to_string(),
            user: EventAccount {
                login: login.to_string(),
            },
        }),
        repository: Some(EventRepository {
            name: "example-repo".to_string(),
            owner: EventAccount {
                login: "example-org".to_string(),
            },
        }),
    }
}
