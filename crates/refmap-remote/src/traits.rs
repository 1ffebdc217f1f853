//! Storage and collection interfaces.
//!
//! [`RemoteBackend`] is the storage side: anything that can read and durably
//! write [`RemoteConfig`]s (in-memory, a TOML file, a database). [`RefSpecs`]
//! is the caller side: an index-addressable list of refspecs, implemented by
//! [`RefSpecCollection`](crate::RefSpecCollection) and by test doubles.

use refmap_refspec::{RefSpecDirection, RefSpecView};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};
use crate::handle::RemoteHandle;
use crate::iter::RefSpecIter;
use crate::names::validate_remote_name;
use crate::remote::Remote;

/// Storage backend for remote configuration.
///
/// Implementations must be thread-safe (`Send + Sync`) and make each write
/// atomic: a failed write leaves the previously stored state untouched.
/// Concurrent updates to the same remote must serialize, never overwrite.
pub trait RemoteBackend: Send + Sync {
    /// Read a remote by name.
    ///
    /// Returns `Ok(None)` if the remote does not exist.
    fn read_remote(&self, name: &str) -> Result<Option<RemoteConfig>>;

    /// Edit the stored state of an existing remote in place.
    ///
    /// The read, `edit` and the write happen under one lock. `edit` runs
    /// exactly once; if it fails nothing is written and its error is
    /// returned. On success, returns the state that was stored. Fails with
    /// [`RemoteError::NotFound`] if the remote does not exist.
    fn update_remote(
        &self,
        name: &str,
        edit: &mut dyn FnMut(&mut RemoteConfig) -> Result<()>,
    ) -> Result<RemoteConfig>;

    /// Store a new remote.
    ///
    /// Fails with [`RemoteError::AlreadyExists`] if the name is taken.
    fn insert_remote(&self, config: &RemoteConfig) -> Result<()>;

    /// Delete a remote by name.
    ///
    /// Returns `Ok(true)` if the remote existed and was deleted.
    fn delete_remote(&self, name: &str) -> Result<bool>;

    /// List all remote names, sorted.
    fn remote_names(&self) -> Result<Vec<String>>;

    /// Acquire a scoped handle to the named remote.
    fn load(&self, name: &str) -> Result<RemoteHandle<'_, Self>>
    where
        Self: Sized,
    {
        RemoteHandle::load(self, name)
    }

    /// Look up an existing remote.
    fn remote(&self, name: &str) -> Result<Remote<'_, Self>>
    where
        Self: Sized,
    {
        Remote::open(self, name)
    }

    /// Create a remote seeded with the default fetch refspec, like
    /// `git remote add`.
    fn add_remote(&self, name: &str, url: &str) -> Result<Remote<'_, Self>>
    where
        Self: Sized,
    {
        validate_remote_name(name)?;
        if url.is_empty() {
            return Err(RemoteError::EmptyArgument { name: "url" });
        }
        let config = RemoteConfig::with_default_fetch(name, url)?;
        self.insert_remote(&config)?;
        Remote::open(self, name)
    }
}

/// An ordered, index-addressable list of refspecs.
///
/// Every call observes the current state; implementations must not cache
/// between calls.
pub trait RefSpecs {
    /// The refspec value this list yields.
    type Spec: RefSpecView;

    /// Number of refspecs right now.
    fn count(&self) -> Result<usize>;

    /// The refspec at `index`, or [`RemoteError::IndexOutOfRange`].
    fn get(&self, index: usize) -> Result<Self::Spec>;

    /// Append a fetch refspec and persist it.
    fn add_fetch(&self, spec: &str) -> Result<Self::Spec>;

    /// Append a push refspec and persist it.
    fn add_push(&self, spec: &str) -> Result<Self::Spec>;

    /// Remove every refspec and persist.
    fn clear(&self) -> Result<()>;

    /// Remove the refspec at `index` and persist. Later entries shift down.
    fn remove(&self, index: usize) -> Result<Self::Spec>;

    /// Lazily iterate over the refspecs present when the iterator is created.
    fn iter(&self) -> Result<RefSpecIter<'_, Self>>
    where
        Self: Sized,
    {
        RefSpecIter::new(self)
    }

    /// Read every refspec into a vector.
    fn to_vec(&self) -> Result<Vec<Self::Spec>>
    where
        Self: Sized,
    {
        self.iter()?.collect()
    }

    /// Map `name` through the first refspec of `direction` whose source
    /// matches it.
    fn map_ref(&self, direction: RefSpecDirection, name: &str) -> Result<Option<String>>
    where
        Self: Sized,
    {
        for spec in self.iter()? {
            let spec = spec?;
            if spec.direction() != direction {
                continue;
            }
            if let Some(mapped) = spec.transform(name) {
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}
