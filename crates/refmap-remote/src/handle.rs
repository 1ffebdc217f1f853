//! Scoped handles to a loaded remote.
//!
//! A [`RemoteHandle`] is a private working copy of one remote's stored state.
//! Edits touch only the copy and are recorded; [`RemoteHandle::persist`]
//! replays them against the latest stored state through
//! [`RemoteBackend::update_remote`], so edits made elsewhere since the load
//! are kept. A call that fails before persisting leaves the stored remote
//! unchanged. Handles are short-lived: acquire one per operation and let it
//! drop.

use refmap_refspec::{RefSpec, RefSpecDirection};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};
use crate::traits::RemoteBackend;

/// An edit waiting for [`RemoteHandle::persist`].
#[derive(Clone, Debug)]
enum PendingEdit {
    Add(RefSpec),
    Clear,
    Remove(usize),
}

impl PendingEdit {
    fn apply(&self, config: &mut RemoteConfig) -> Result<()> {
        match self {
            PendingEdit::Add(refspec) => config.refspecs.push(refspec.clone()),
            PendingEdit::Clear => config.refspecs.clear(),
            PendingEdit::Remove(index) => {
                config.remove_refspec(*index)?;
            }
        }
        Ok(())
    }
}

/// A loaded remote, borrowed from its backend for the duration of one call.
pub struct RemoteHandle<'b, B: RemoteBackend + ?Sized> {
    backend: &'b B,
    config: RemoteConfig,
    pending: Vec<PendingEdit>,
}

impl<'b, B: RemoteBackend + ?Sized> RemoteHandle<'b, B> {
    /// Load the named remote from `backend`.
    pub fn load(backend: &'b B, name: &str) -> Result<Self> {
        let config = backend
            .read_remote(name)?
            .ok_or_else(|| RemoteError::NotFound {
                name: name.to_string(),
            })?;
        Ok(Self {
            backend,
            config,
            pending: Vec::new(),
        })
    }

    /// Name of the loaded remote.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// URL of the loaded remote.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// The working copy, including unpersisted edits.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Number of refspecs in the working copy.
    pub fn refspec_count(&self) -> usize {
        self.config.refspecs.len()
    }

    /// The refspec at `index`, or `None` past the end.
    pub fn refspec_at(&self, index: usize) -> Option<&RefSpec> {
        self.config.refspecs.get(index)
    }

    /// Validate `spec` and append it with the given direction.
    pub fn add_refspec(&mut self, spec: &str, direction: RefSpecDirection) -> Result<RefSpec> {
        let refspec = RefSpec::parse(spec, direction)?;
        self.config.refspecs.push(refspec.clone());
        self.pending.push(PendingEdit::Add(refspec.clone()));
        Ok(refspec)
    }

    /// Validate `spec` and append it as a fetch refspec.
    pub fn add_fetch_refspec(&mut self, spec: &str) -> Result<RefSpec> {
        self.add_refspec(spec, RefSpecDirection::Fetch)
    }

    /// Validate `spec` and append it as a push refspec.
    pub fn add_push_refspec(&mut self, spec: &str) -> Result<RefSpec> {
        self.add_refspec(spec, RefSpecDirection::Push)
    }

    /// Drop every refspec.
    pub fn clear_refspecs(&mut self) {
        self.config.refspecs.clear();
        self.pending.push(PendingEdit::Clear);
    }

    /// Remove and return the refspec at `index`.
    pub fn remove_refspec(&mut self, index: usize) -> Result<RefSpec> {
        let removed = self.config.remove_refspec(index)?;
        self.pending.push(PendingEdit::Remove(index));
        Ok(removed)
    }

    /// Commit this handle's edits to the backend.
    ///
    /// The edits are replayed in order on the stored state under the
    /// backend's lock. If any of them no longer applies (say, a removal
    /// whose index is now past the end) nothing is written. On success the
    /// working copy is refreshed to the stored state.
    pub fn persist(&mut self) -> Result<()> {
        let pending = &self.pending;
        let stored = self.backend.update_remote(&self.config.name, &mut |config| {
            pending.iter().try_for_each(|edit| edit.apply(config))
        })?;
        self.config = stored;
        self.pending.clear();
        Ok(())
    }
}
