//! Reference specifications for refmap.
//!
//! A refspec is a rule of the form `[+]<source>:<destination>` that tells the
//! transfer layer how references on one side of a fetch or push map to
//! references on the other side.
//!
//! # Architecture
//!
//! - **Parsing** splits the leading force flag, then the source and
//!   destination on the first `:`. Each side is checked against git-style
//!   reference rules and may carry at most one `*`.
//! - **Glob refspecs** carry a `*` on both sides. The text matched on one side
//!   is substituted into the other, so `refs/heads/*:refs/remotes/origin/*`
//!   maps `refs/heads/main` to `refs/remotes/origin/main`.
//! - **Values are immutable.** Collections edit refspecs by removing and
//!   re-adding them.
//!
//! # Modules
//!
//! - [`error`] — Error types for parsing
//! - [`types`] — [`RefSpec`], [`RefSpecDirection`], and the persisted
//!   [`RefSpecRecord`]
//! - [`traits`] — The [`RefSpecView`] read interface and matching helpers
//! - [`names`] — Reference pattern validation

pub mod error;
mod glob;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RefSpecError, Result};
pub use names::{is_forbidden_char, validate_ref_pattern};
pub use traits::RefSpecView;
pub use types::{RefSpec, RefSpecDirection, RefSpecRecord};
