//! Retry with exponential backoff for transient failures
//!
//! The wrapper retries only failures the caller-supplied predicate accepts;
//! everything else propagates unchanged after a single attempt.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Backoff schedule for a retryable operation
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Factor applied to the delay after each further failed attempt
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            multiplier: 4,
        }
    }
}

impl RetryPolicy {
    /// Policy with a custom attempt budget and the default backoff schedule
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Delay scheduled after the given failed attempt (1-based)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay * self.multiplier.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Run `operation`, retrying recoverable failures with exponential backoff
///
/// Each failure is logged in its string form at debug level. A failure is
/// retried only when `recoverable` accepts it and the attempt budget is not
/// exhausted; otherwise it propagates to the caller unchanged. The backoff
/// sleep is the only suspension point besides the operation itself.
pub async fn with_retry<T, F, Fut, P>(
    policy: &RetryPolicy,
    recoverable: P,
    operation: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: Fn(&Error) -> bool,
{
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                debug!(attempt, "attempt failed: {error}");

                if attempt >= policy.max_attempts || !recoverable(&error) {
                    return Err(error);
                }

                let delay = policy.delay_for_attempt(attempt);
                info!(
                    attempt,
                    ?delay,
                    "retrying after transient failure"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
