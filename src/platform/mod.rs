//! Platform services for the remote pull request API
//!
//! The trait is the injected seam between the handler and GitHub, so the
//! decision logic can be exercised against a mock without network stubbing.

mod github;

pub use github::GitHubPlatform;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{MergeInput, PullRequestLocator, PullRequestSnapshot};

/// Remote pull request operations used by the merge handler
#[async_trait]
pub trait PullRequestPlatform: Send + Sync {
    /// Fetch the merge-relevant snapshot of a pull request
    ///
    /// Returns `Ok(None)` when the pull request cannot be resolved.
    async fn fetch_pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Option<PullRequestSnapshot>>;

    /// Merge the pull request described by `input`
    ///
    /// The transient base-branch conflict surfaces as an error whose message
    /// contains the platform's conflict wording; callers decide whether to
    /// retry it.
    async fn merge_pull_request(&self, input: &MergeInput) -> Result<()>;
}
