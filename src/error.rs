//! Error types for the merge engine

use thiserror::Error;

/// Errors produced while evaluating or merging a pull request
#[derive(Debug, Error)]
pub enum Error {
    /// A remote platform request failed or was rejected
    #[error("platform error: {0}")]
    Platform(String),

    /// The workflow event payload could not be read or parsed
    #[error("event payload error: {0}")]
    Event(String),

    /// A configuration value could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
