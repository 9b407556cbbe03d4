//! Merge decision engine
//!
//! Two-phase pattern:
//! 1. Plan - evaluate eligibility and build the mutation input (pure, testable)
//! 2. Execute - perform the merge with backoff retry (effectful)

mod execute;
mod plan;

pub use execute::{execute_merge, is_recoverable_merge_error};
pub use plan::{MergeDecision, evaluate};
