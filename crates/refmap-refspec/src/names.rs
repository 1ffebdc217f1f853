//! Reference pattern validation following git-style conventions.
//!
//! A valid pattern (one side of a refspec):
//! - Must be non-empty
//! - Must contain at most one `*`
//! - Must not contain whitespace, control characters, `~`, `^`, `:`, `?`,
//!   `[`, `\`
//! - Must not contain `..` (double dot) or `@{`, and must not be `@`
//! - Must not start or end with `/`, and must not end with `.`
//! - Must not contain consecutive slashes (`//`)
//! - Components between slashes must be non-empty, must not start with `.`,
//!   and must not end with `.lock`

use crate::error::{RefSpecError, Result};

/// Characters that are forbidden anywhere in a reference pattern.
const FORBIDDEN_CHARS: &[char] = &['~', '^', ':', '?', '[', '\\'];

/// The single wildcard character a pattern may carry.
pub const WILDCARD: char = '*';

/// Returns `true` if `ch` may never appear in a reference name.
pub fn is_forbidden_char(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control() || FORBIDDEN_CHARS.contains(&ch)
}

fn invalid(pattern: &str, reason: impl Into<String>) -> RefSpecError {
    RefSpecError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

/// Validate one side of a refspec, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use refmap_refspec::names::validate_ref_pattern;
///
/// assert!(validate_ref_pattern("refs/heads/main").is_ok());
/// assert!(validate_ref_pattern("refs/heads/*").is_ok());
/// assert!(validate_ref_pattern("HEAD").is_ok());
/// assert!(validate_ref_pattern("").is_err());
/// assert!(validate_ref_pattern("refs/*/x/*").is_err());
/// ```
pub fn validate_ref_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(invalid(pattern, "pattern must not be empty"));
    }

    // At most one wildcard.
    if pattern.matches(WILDCARD).count() > 1 {
        return Err(invalid(pattern, "must contain at most one '*'"));
    }

    // Check for forbidden characters.
    if let Some(ch) = pattern.chars().find(|ch| is_forbidden_char(*ch)) {
        return Err(invalid(pattern, format!("contains forbidden character: {ch:?}")));
    }

    // Must not contain `..` (parent traversal).
    if pattern.contains("..") {
        return Err(invalid(pattern, "must not contain '..'"));
    }

    // Must not contain `@{` (reflog syntax).
    if pattern.contains("@{") || pattern == "@" {
        return Err(invalid(pattern, "must not contain '@{' or be '@'"));
    }

    // Must not start or end with `/`.
    if pattern.starts_with('/') || pattern.ends_with('/') {
        return Err(invalid(pattern, "must not start or end with '/'"));
    }

    // Must not end with `.`.
    if pattern.ends_with('.') {
        return Err(invalid(pattern, "must not end with '.'"));
    }

    // Must not contain consecutive slashes.
    if pattern.contains("//") {
        return Err(invalid(pattern, "must not contain consecutive slashes '//'"));
    }

    // Each component must be non-empty, not dot-leading, not `.lock`.
    for component in pattern.split('/') {
        if component.is_empty() {
            return Err(invalid(pattern, "path components must not be empty"));
        }
        if component.starts_with('.') {
            return Err(invalid(
                pattern,
                format!("component must not start with '.': {component:?}"),
            ));
        }
        if component.ends_with(".lock") {
            return Err(invalid(
                pattern,
                format!("component must not end with '.lock': {component:?}"),
            ));
        }
    }

    Ok(())
}
