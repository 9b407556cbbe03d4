//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use dependamerge::error::{Error, Result};
use dependamerge::platform::PullRequestPlatform;
use dependamerge::types::{MergeInput, PullRequestLocator, PullRequestSnapshot};

/// Call record for `fetch_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub owner: String,
    pub name: String,
    pub number: u64,
}

/// Scripted outcome for one `merge_pull_request` call
#[derive(Debug, Clone)]
pub enum MergeOutcome {
    /// The merge succeeds
    Success,
    /// The merge fails with the given platform error message
    Failure(String),
}

/// Simple mock platform service for testing
///
/// This manually implements `PullRequestPlatform` rather than using a
/// mocking framework, keeping call verification explicit.
///
/// Features:
/// - Configurable snapshot response
/// - Scripted per-call merge outcomes (for retry sequences)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatform {
    snapshot: Mutex<Option<PullRequestSnapshot>>,
    merge_script: Mutex<VecDeque<MergeOutcome>>,
    // Call tracking
    fetch_calls: Mutex<Vec<FetchCall>>,
    merge_calls: Mutex<Vec<MergeInput>>,
    // Error injection
    error_on_fetch: Mutex<Option<String>>,
}

impl MockPlatform {
    /// Create a mock that resolves no pull request and merges successfully
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
            merge_script: Mutex::new(VecDeque::new()),
            fetch_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_fetch: Mutex::new(None),
        }
    }

    /// Set the snapshot returned by `fetch_pull_request`
    pub fn set_snapshot(&self, snapshot: Option<PullRequestSnapshot>) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    /// Make `fetch_pull_request` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Queue the outcome for the next unscripted `merge_pull_request` call
    ///
    /// Calls beyond the scripted queue succeed.
    pub fn push_merge_outcome(&self, outcome: MergeOutcome) {
        self.merge_script.lock().unwrap().push_back(outcome);
    }

    // === Call verification methods ===

    /// Get all `fetch_pull_request` calls
    pub fn get_fetch_calls(&self) -> Vec<FetchCall> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pull_request` calls
    pub fn get_merge_calls(&self) -> Vec<MergeInput> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get count of `merge_pull_request` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert that `merge_pull_request` was NOT called
    pub fn assert_merge_not_called(&self) {
        let calls = self.get_merge_calls();
        assert!(
            calls.is_empty(),
            "Expected merge_pull_request NOT to be called but it was: {calls:?}"
        );
    }

    /// Assert that `merge_pull_request` was called with the given headline
    pub fn assert_merge_called_with_headline(&self, headline: &str) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.commit_headline == headline),
            "Expected merge_pull_request with headline {headline:?} but got: {calls:?}"
        );
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PullRequestPlatform for MockPlatform {
    async fn fetch_pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Option<PullRequestSnapshot>> {
        self.fetch_calls.lock().unwrap().push(FetchCall {
            owner: locator.owner.clone(),
            name: locator.name.clone(),
            number: locator.number,
        });

        // Check for injected error
        if let Some(msg) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn merge_pull_request(&self, input: &MergeInput) -> Result<()> {
        self.merge_calls.lock().unwrap().push(input.clone());

        match self.merge_script.lock().unwrap().pop_front() {
            None | Some(MergeOutcome::Success) => Ok(()),
            Some(MergeOutcome::Failure(msg)) => Err(Error::Platform(msg)),
        }
    }
}
