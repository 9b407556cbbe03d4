//! Merge execution - effectful operations
//!
//! Performs the merge mutation prepared by the planning phase, retrying the
//! one failure class GitHub reports when the base branch moved between the
//! mergeability check and the merge itself.

use crate::error::{Error, Result};
use crate::platform::PullRequestPlatform;
use crate::retry::{RetryPolicy, with_retry};
use crate::types::MergeInput;

/// Message fragment GitHub emits for the transient base-branch conflict.
/// Matching stays an opaque substring check; a structured error code is not
/// available on this mutation.
const RECOVERABLE_SIGNATURE: &str = "Base branch was modified";

/// Whether the failure is the transient base-branch conflict worth retrying
pub fn is_recoverable_merge_error(error: &Error) -> bool {
    error.to_string().contains(RECOVERABLE_SIGNATURE)
}

/// Merge the pull request, retrying the known transient conflict (EFFECTFUL)
///
/// Terminal failures propagate unchanged; nothing is swallowed here.
pub async fn execute_merge(
    input: &MergeInput,
    platform: &dyn PullRequestPlatform,
    policy: &RetryPolicy,
) -> Result<()> {
    with_retry(policy, is_recoverable_merge_error, || {
        platform.merge_pull_request(input)
    })
    .await
}
