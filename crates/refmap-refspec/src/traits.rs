//! The [`RefSpecView`] trait: read access to a refspec.
//!
//! [`RefSpec`](crate::RefSpec) is the production implementation. Test doubles
//! and alternative representations implement the five accessors and inherit
//! the matching helpers.

use crate::glob;
use crate::names::WILDCARD;
use crate::types::RefSpecDirection;

/// Read-only capabilities of a parsed refspec.
pub trait RefSpecView {
    /// The raw rule text.
    fn specification(&self) -> &str;

    /// Whether this rule applies to fetch or push.
    fn direction(&self) -> RefSpecDirection;

    /// The source-side pattern.
    fn source(&self) -> &str;

    /// The destination-side pattern.
    fn destination(&self) -> &str;

    /// Whether non-fast-forward updates are allowed.
    fn force_update(&self) -> bool;

    /// Returns `true` if this is a glob refspec.
    fn is_wildcard(&self) -> bool {
        self.source().contains(WILDCARD)
    }

    /// Returns `true` if `name` matches the source pattern.
    fn src_matches(&self, name: &str) -> bool {
        glob::capture(self.source(), name).is_some()
    }

    /// Returns `true` if `name` matches the destination pattern.
    fn dst_matches(&self, name: &str) -> bool {
        glob::capture(self.destination(), name).is_some()
    }

    /// Map a name matching the source pattern to its destination name.
    ///
    /// Returns `None` when `name` does not match the source.
    fn transform(&self, name: &str) -> Option<String> {
        glob::capture(self.source(), name).map(|m| glob::expand(self.destination(), m))
    }

    /// Map a name matching the destination pattern back to its source name.
    fn rtransform(&self, name: &str) -> Option<String> {
        glob::capture(self.destination(), name).map(|m| glob::expand(self.source(), m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RefSpec;

    /// A hand-built view, independent of the parser.
    struct StaticSpec {
        source: &'static str,
        destination: &'static str,
    }

    impl RefSpecView for StaticSpec {
        fn specification(&self) -> &str {
            "static"
        }
        fn direction(&self) -> RefSpecDirection {
            RefSpecDirection::Push
        }
        fn source(&self) -> &str {
            self.source
        }
        fn destination(&self) -> &str {
            self.destination
        }
        fn force_update(&self) -> bool {
            false
        }
    }

    #[test]
    fn glob_transform_both_ways() {
        let rs = RefSpec::fetch("+refs/heads/*:refs/remotes/origin/*").unwrap();
        assert!(rs.is_wildcard());
        assert!(rs.src_matches("refs/heads/main"));
        assert!(!rs.src_matches("refs/tags/v1"));
        assert!(rs.dst_matches("refs/remotes/origin/main"));
        assert_eq!(
            rs.transform("refs/heads/feature/auth").as_deref(),
            Some("refs/remotes/origin/feature/auth")
        );
        assert_eq!(
            rs.rtransform("refs/remotes/origin/main").as_deref(),
            Some("refs/heads/main")
        );
        assert_eq!(rs.transform("refs/tags/v1"), None);
    }

    #[test]
    fn exact_transform() {
        let rs = RefSpec::push("refs/heads/main:refs/heads/trunk").unwrap();
        assert!(!rs.is_wildcard());
        assert_eq!(rs.transform("refs/heads/main").as_deref(), Some("refs/heads/trunk"));
        assert_eq!(rs.transform("refs/heads/other"), None);
        assert_eq!(rs.rtransform("refs/heads/trunk").as_deref(), Some("refs/heads/main"));
    }

    #[test]
    fn provided_methods_work_for_doubles() {
        let spec = StaticSpec {
            source: "refs/heads/*",
            destination: "refs/mirror/*",
        };
        assert!(spec.is_wildcard());
        assert_eq!(spec.transform("refs/heads/x").as_deref(), Some("refs/mirror/x"));
        assert_eq!(spec.direction(), RefSpecDirection::Push);
    }
}
