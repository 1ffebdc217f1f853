//! Error types for remote and refspec collection operations.

use refmap_refspec::RefSpecError;
use thiserror::Error;

/// Errors that can occur while reading or mutating a remote's refspecs.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// A required string argument was empty. Raised before the remote is
    /// touched.
    #[error("argument {name} must not be empty")]
    EmptyArgument { name: &'static str },

    /// The refspec text is malformed.
    #[error(transparent)]
    InvalidRefSpec(#[from] RefSpecError),

    /// An index was outside `0..count`.
    #[error("index {index} out of range: must be less than {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// The named remote does not exist.
    #[error("remote not found: {name}")]
    NotFound { name: String },

    /// A remote with this name already exists.
    #[error("remote already exists: {name}")]
    AlreadyExists { name: String },

    /// The remote name is invalid.
    #[error("invalid remote name: {name}: {reason}")]
    InvalidRemoteName { name: String, reason: String },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while loading or persisting remotes.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemoteError {
    /// Returns `true` if the caller can retry with corrected input.
    ///
    /// Backend failures (missing remote, I/O, serialization) return `false`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            RemoteError::EmptyArgument { .. }
                | RemoteError::InvalidRefSpec(_)
                | RemoteError::IndexOutOfRange { .. }
                | RemoteError::InvalidRemoteName { .. }
        )
    }
}

/// Convenience type alias for remote operations.
pub type Result<T> = std::result::Result<T, RemoteError>;
