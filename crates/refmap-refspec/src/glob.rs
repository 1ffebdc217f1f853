//! Single-wildcard matching used to map reference names through a refspec.
//!
//! A pattern without `*` matches only itself. A pattern with one `*` matches
//! any name that starts with the text before the `*`, ends with the text after
//! it, and leaves a non-empty middle. The `*` may span `/`.

use crate::names::WILDCARD;

/// Match `name` against `pattern`, returning the text captured by the
/// wildcard (empty for exact patterns).
pub(crate) fn capture<'n>(pattern: &str, name: &'n str) -> Option<&'n str> {
    match pattern.split_once(WILDCARD) {
        None => (pattern == name).then_some(""),
        Some((prefix, suffix)) => {
            if name.len() <= prefix.len() + suffix.len() {
                return None;
            }
            name.strip_prefix(prefix)?.strip_suffix(suffix)
        }
    }
}

/// Substitute `captured` for the wildcard in `pattern`.
pub(crate) fn expand(pattern: &str, captured: &str) -> String {
    match pattern.split_once(WILDCARD) {
        None => pattern.to_string(),
        Some((prefix, suffix)) => format!("{prefix}{captured}{suffix}"),
    }
}
