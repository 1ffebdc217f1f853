//! Remote refspec management for refmap.
//!
//! This crate exposes the ordered refspecs attached to a named remote as a
//! [`RefSpecCollection`], and the storage those refspecs live in as a
//! [`RemoteBackend`].
//!
//! # Architecture
//!
//! - **Backends** own the stored remotes. [`InMemoryRemotes`] keeps them in a
//!   map; [`FileRemotes`] keeps them in a TOML file.
//! - **Handles** ([`RemoteHandle`]) are scoped working copies of one remote.
//!   Edits are validated on the copy and only reach the backend through
//!   [`RemoteHandle::persist`], so a failed call changes nothing.
//! - **Collections** hold no state beyond the remote's name. Reads load a
//!   fresh handle; writes go through [`RemoteBackend::update_remote`], so
//!   concurrent writers never drop each other's edits.
//!
//! ```
//! use refmap_remote::{InMemoryRemotes, RefSpecs, RemoteBackend};
//!
//! let remotes = InMemoryRemotes::new();
//! let origin = remotes.add_remote("origin", "https://example.com/repo.git").unwrap();
//! let specs = origin.refspecs();
//!
//! specs.add_fetch("+refs/theirs/*:refs/my/*").unwrap();
//! assert_eq!(specs.count().unwrap(), 2);
//! assert_eq!(specs.get(1).unwrap().source(), "refs/theirs/*");
//! ```
//!
//! # Modules
//!
//! - [`error`] — Error types for remote operations
//! - [`config`] — The persisted [`RemoteConfig`] / [`RemotesFile`] layout
//! - [`traits`] — The [`RemoteBackend`] and [`RefSpecs`] traits
//! - [`handle`] — Scoped [`RemoteHandle`]s
//! - [`collection`] — [`RefSpecCollection`]
//! - [`iter`] — Lazy [`RefSpecIter`]
//! - [`remote`] — The [`Remote`] façade
//! - [`memory`] — In-memory [`InMemoryRemotes`]
//! - [`file`] — TOML-file [`FileRemotes`]
//! - [`names`] — Remote name validation

pub mod collection;
pub mod config;
pub mod error;
pub mod file;
pub mod handle;
pub mod iter;
pub mod memory;
pub mod names;
pub mod remote;
pub mod traits;

pub use collection::RefSpecCollection;
pub use config::{default_fetch_refspec, RemoteConfig, RemotesFile};
pub use error::{RemoteError, Result};
pub use file::FileRemotes;
pub use handle::RemoteHandle;
pub use iter::RefSpecIter;
pub use memory::InMemoryRemotes;
pub use names::validate_remote_name;
pub use remote::Remote;
pub use traits::{RefSpecs, RemoteBackend};

pub use refmap_refspec::{RefSpec, RefSpecDirection, RefSpecError, RefSpecView};
