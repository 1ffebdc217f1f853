//! The refspec collection of a single remote.
//!
//! [`RefSpecCollection`] stores nothing but the remote's name. Reads load a
//! fresh [`RemoteHandle`]; mutations run through
//! [`RemoteBackend::update_remote`], so the index check, the edit and the
//! write all see the same locked state. All views over the same remote agree
//! with the backend and with each other.

use std::fmt;

use refmap_refspec::{RefSpec, RefSpecDirection};
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};
use crate::handle::RemoteHandle;
use crate::traits::{RefSpecs, RemoteBackend};

/// The ordered refspecs of one remote.
pub struct RefSpecCollection<'b, B: RemoteBackend + ?Sized> {
    backend: &'b B,
    remote: String,
}

impl<'b, B: RemoteBackend + ?Sized> RefSpecCollection<'b, B> {
    /// Bind a collection to the named remote. The remote is not loaded until
    /// the first call.
    pub fn new(backend: &'b B, remote: impl Into<String>) -> Self {
        Self {
            backend,
            remote: remote.into(),
        }
    }

    /// Name of the remote this collection is bound to.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Validate `spec`, append it with `direction`, and return the index it
    /// was stored at along with the parsed value.
    pub fn append(&self, spec: &str, direction: RefSpecDirection) -> Result<(usize, RefSpec)> {
        if spec.is_empty() {
            return Err(RemoteError::EmptyArgument { name: "spec" });
        }
        let refspec = RefSpec::parse(spec, direction)?;

        let index = self.update(|config| {
            config.refspecs.push(refspec.clone());
            Ok(config.refspecs.len() - 1)
        })?;

        debug!(remote = %self.remote, index, %direction, spec, "added refspec");
        Ok((index, refspec))
    }

    fn load(&self) -> Result<RemoteHandle<'b, B>> {
        RemoteHandle::load(self.backend, &self.remote)
    }

    /// Run `edit` once against the stored remote under the backend's lock.
    fn update<T>(&self, edit: impl FnOnce(&mut RemoteConfig) -> Result<T>) -> Result<T> {
        let mut edit = Some(edit);
        let mut out = None;
        self.backend.update_remote(&self.remote, &mut |config| {
            if let Some(edit) = edit.take() {
                out = Some(edit(config)?);
            }
            Ok(())
        })?;
        out.ok_or_else(|| RemoteError::NotFound {
            name: self.remote.clone(),
        })
    }
}

impl<B: RemoteBackend + ?Sized> RefSpecs for RefSpecCollection<'_, B> {
    type Spec = RefSpec;

    fn count(&self) -> Result<usize> {
        Ok(self.load()?.refspec_count())
    }

    fn get(&self, index: usize) -> Result<RefSpec> {
        let handle = self.load()?;
        handle
            .refspec_at(index)
            .cloned()
            .ok_or(RemoteError::IndexOutOfRange {
                index,
                count: handle.refspec_count(),
            })
    }

    fn add_fetch(&self, spec: &str) -> Result<RefSpec> {
        Ok(self.append(spec, RefSpecDirection::Fetch)?.1)
    }

    fn add_push(&self, spec: &str) -> Result<RefSpec> {
        Ok(self.append(spec, RefSpecDirection::Push)?.1)
    }

    fn clear(&self) -> Result<()> {
        self.update(|config| {
            config.refspecs.clear();
            Ok(())
        })?;

        debug!(remote = %self.remote, "cleared refspecs");
        Ok(())
    }

    fn remove(&self, index: usize) -> Result<RefSpec> {
        let removed = self.update(|config| config.remove_refspec(index))?;

        debug!(remote = %self.remote, index, spec = %removed, "removed refspec");
        Ok(removed)
    }
}

impl<B: RemoteBackend + ?Sized> fmt::Debug for RefSpecCollection<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefSpecCollection")
            .field("remote", &self.remote)
            .finish_non_exhaustive()
    }
}
