//! In-memory remote backend for testing and ephemeral use.
//!
//! [`InMemoryRemotes`] stores all remotes in a `HashMap` protected by a
//! `RwLock`. It implements the full [`RemoteBackend`] trait and is suitable
//! for unit tests and short-lived processes.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};
use crate::traits::RemoteBackend;

/// An in-memory implementation of [`RemoteBackend`].
///
/// Data is lost when the backend is dropped.
#[derive(Debug, Default)]
pub struct InMemoryRemotes {
    remotes: RwLock<HashMap<String, RemoteConfig>>,
}

impl InMemoryRemotes {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> RemoteError {
    RemoteError::Serialization(format!("lock poisoned: {e}"))
}

impl RemoteBackend for InMemoryRemotes {
    fn read_remote(&self, name: &str) -> Result<Option<RemoteConfig>> {
        let remotes = self.remotes.read().map_err(poisoned)?;
        Ok(remotes.get(name).cloned())
    }

    fn update_remote(
        &self,
        name: &str,
        edit: &mut dyn FnMut(&mut RemoteConfig) -> Result<()>,
    ) -> Result<RemoteConfig> {
        let mut remotes = self.remotes.write().map_err(poisoned)?;
        let stored = remotes.get_mut(name).ok_or_else(|| RemoteError::NotFound {
            name: name.to_string(),
        })?;
        let mut updated = stored.clone();
        edit(&mut updated)?;
        *stored = updated.clone();
        debug!(remote = %name, refspecs = updated.refspecs.len(), "stored remote");
        Ok(updated)
    }

    fn insert_remote(&self, config: &RemoteConfig) -> Result<()> {
        let mut remotes = self.remotes.write().map_err(poisoned)?;
        if remotes.contains_key(&config.name) {
            return Err(RemoteError::AlreadyExists {
                name: config.name.clone(),
            });
        }
        remotes.insert(config.name.clone(), config.clone());
        debug!(remote = %config.name, "created remote");
        Ok(())
    }

    fn delete_remote(&self, name: &str) -> Result<bool> {
        let mut remotes = self.remotes.write().map_err(poisoned)?;
        Ok(remotes.remove(name).is_some())
    }

    fn remote_names(&self) -> Result<Vec<String>> {
        let remotes = self.remotes.read().map_err(poisoned)?;
        let mut names: Vec<String> = remotes.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
