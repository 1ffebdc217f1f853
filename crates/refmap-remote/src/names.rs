//! Remote name validation.

use refmap_refspec::is_forbidden_char;

use crate::error::{RemoteError, Result};

/// Validate a remote name. Must be a simple identifier (no slashes).
///
/// # Examples
///
/// ```
/// use refmap_remote::names::validate_remote_name;
///
/// assert!(validate_remote_name("origin").is_ok());
/// assert!(validate_remote_name("up/stream").is_err());
/// ```
pub fn validate_remote_name(name: &str) -> Result<()> {
    let invalid = |reason: String| RemoteError::InvalidRemoteName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("remote name must not be empty".into()));
    }
    if name.contains('/') {
        return Err(invalid("remote name must not contain '/'".into()));
    }
    if let Some(ch) = name.chars().find(|ch| is_forbidden_char(*ch) || *ch == '*') {
        return Err(invalid(format!("contains forbidden character: {ch:?}")));
    }
    if name.starts_with('.') || name.contains("..") {
        return Err(invalid("remote name must not start with '.' or contain '..'".into()));
    }
    // Must not end with .lock
    if name.ends_with(".lock") {
        return Err(invalid("remote name must not end with '.lock'".into()));
    }
    Ok(())
}
