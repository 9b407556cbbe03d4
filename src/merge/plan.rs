//! Merge planning - pure eligibility evaluation
//!
//! No I/O happens here - all data is passed in, making it easy to unit test.

use crate::bump::classify_bump;
use crate::config::MergeConfig;
use crate::types::{MergeInput, MergeableState, PullRequestSnapshot, PullRequestState, ReviewState};

/// Outcome of evaluating a pull request for automatic merging
#[derive(Debug, Clone)]
pub enum MergeDecision {
    /// Merge the pull request with the prepared mutation input
    Merge {
        /// Input for the merge mutation
        input: MergeInput,
    },
    /// Leave the pull request alone
    Skip {
        /// Why the pull request is not merged
        reason: String,
    },
}

impl std::fmt::Display for MergeDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge { input } => {
                write!(f, "{} merge of {}", input.merge_method, input.pull_request_id)
            }
            Self::Skip { reason } => write!(f, "skip: {reason}"),
        }
    }
}

/// Evaluate whether the pull request should be merged (PURE - no I/O)
///
/// Conditions are checked in order and the first disqualifying one wins, so
/// every skip carries a distinct reason. The ordering matters only for
/// diagnostics; the conditions are independent predicates over immutable
/// data.
pub fn evaluate(snapshot: Option<&PullRequestSnapshot>, config: &MergeConfig) -> MergeDecision {
    let Some(snapshot) = snapshot else {
        return skip("required pull request information is unavailable");
    };

    if snapshot.last_commit_author_name.as_deref() != Some(config.login.as_str()) {
        return skip(format!("changes were not made by {}", config.login));
    }

    if snapshot.merged || snapshot.state != PullRequestState::Open {
        return skip("pull request is already merged or closed");
    }

    if snapshot.mergeable != MergeableState::Mergeable {
        return skip(format!("pull request is not mergeable ({})", snapshot.mergeable));
    }

    if snapshot.latest_review_state != Some(ReviewState::Approved) {
        return skip("pull request is not approved");
    }

    let max_category = config.preset.max_category();
    match classify_bump(&snapshot.title) {
        None => return skip("cannot determine a version bump from the title"),
        Some(category) if category > max_category => {
            return skip(format!(
                "{category} bump exceeds the {} preset",
                config.preset
            ));
        }
        Some(_) => {}
    }

    MergeDecision::Merge {
        input: MergeInput {
            pull_request_id: snapshot.id.clone(),
            commit_headline: snapshot.title.clone(),
            merge_method: config.merge_method,
        },
    }
}

fn skip(reason: impl Into<String>) -> MergeDecision {
    MergeDecision::Skip {
        reason: reason.into(),
    }
}
