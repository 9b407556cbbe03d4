//! Pull request event handler
//!
//! Orchestrates one invocation: read the event, fetch the pull request
//! snapshot, evaluate eligibility and, when eligible, execute the merge.
//! No failure escapes the handler; the invoking process always completes.

use tracing::{debug, error, info, warn};

use crate::config::MergeConfig;
use crate::event::PullRequestEvent;
use crate::merge::{MergeDecision, evaluate, execute_merge};
use crate::platform::PullRequestPlatform;
use crate::retry::RetryPolicy;
use crate::types::PullRequestLocator;

/// Handle one pull request event
///
/// Missing payload sections and unresolvable pull requests are warnings, not
/// errors. Policy disqualifications are logged at info level as expected
/// skip outcomes. Merge failures are logged and contained.
pub async fn handle_pull_request(
    platform: &dyn PullRequestPlatform,
    event: &PullRequestEvent,
    config: &MergeConfig,
) {
    let (Some(pull_request), Some(repository)) =
        (event.pull_request.as_ref(), event.repository.as_ref())
    else {
        warn!("required pull request information is unavailable");
        return;
    };

    if pull_request.user.login != config.login {
        info!(
            login = %config.login,
            pr_number = pull_request.number,
            "pull request not created by the configured login, skipping"
        );
        return;
    }

    let locator = PullRequestLocator {
        owner: repository.owner.login.clone(),
        name: repository.name.clone(),
        number: pull_request.number,
    };

    let snapshot = match platform.fetch_pull_request(&locator).await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            warn!(pr_number = pull_request.number, "unable to fetch pull request information");
            return;
        }
        Err(fetch_error) => {
            warn!(
                pr_number = pull_request.number,
                "unable to fetch pull request information: {fetch_error}"
            );
            return;
        }
    };

    info!(pr_number = pull_request.number, ?snapshot, "found pull request information");

    match evaluate(Some(&snapshot), config) {
        MergeDecision::Skip { reason } => {
            info!(pr_number = pull_request.number, "skipping merge: {reason}");
        }
        MergeDecision::Merge { input } => {
            let policy = RetryPolicy::with_max_attempts(config.max_attempts);
            if let Err(merge_error) = execute_merge(&input, platform, &policy).await {
                error!(pr_number = pull_request.number, "failed to merge pull request");
                debug!(pr_number = pull_request.number, "merge failure: {merge_error}");
            }
        }
    }
}
