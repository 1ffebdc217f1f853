//! Error types for refspec parsing.

use thiserror::Error;

/// Errors that can occur while parsing or validating a refspec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RefSpecError {
    /// The refspec string violates the refspec grammar.
    #[error("invalid refspec {spec:?}: {reason}")]
    InvalidRefSpec { spec: String, reason: String },

    /// One side of a refspec is not a valid reference pattern.
    #[error("invalid ref pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The direction tag is neither `fetch` nor `push`.
    #[error("invalid refspec direction: {0:?}")]
    InvalidDirection(String),
}

/// Convenience type alias for refspec operations.
pub type Result<T> = std::result::Result<T, RefSpecError>;
