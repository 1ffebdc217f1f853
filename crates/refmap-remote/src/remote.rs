//! A named remote and the views it hands out.

use refmap_refspec::{RefSpec, RefSpecDirection};

use crate::collection::RefSpecCollection;
use crate::error::Result;
use crate::handle::RemoteHandle;
use crate::traits::RemoteBackend;

/// A remote known to a backend.
///
/// Like [`RefSpecCollection`], a `Remote` holds only its name and re-reads the
/// backend on every call.
pub struct Remote<'b, B: RemoteBackend + ?Sized> {
    backend: &'b B,
    name: String,
}

impl<'b, B: RemoteBackend + ?Sized> Remote<'b, B> {
    /// Open an existing remote. Fails with `NotFound` if it does not exist.
    pub fn open(backend: &'b B, name: &str) -> Result<Self> {
        let handle = RemoteHandle::load(backend, name)?;
        Ok(Self {
            backend,
            name: handle.name().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The remote's URL as currently stored.
    pub fn url(&self) -> Result<String> {
        Ok(RemoteHandle::load(self.backend, &self.name)?.url().to_string())
    }

    /// The refspec collection of this remote.
    pub fn refspecs(&self) -> RefSpecCollection<'b, B> {
        RefSpecCollection::new(self.backend, self.name.clone())
    }

    /// Fetch refspecs, in collection order.
    pub fn fetch_refspecs(&self) -> Result<Vec<RefSpec>> {
        self.refspecs_for(RefSpecDirection::Fetch)
    }

    /// Push refspecs, in collection order.
    pub fn push_refspecs(&self) -> Result<Vec<RefSpec>> {
        self.refspecs_for(RefSpecDirection::Push)
    }

    fn refspecs_for(&self, direction: RefSpecDirection) -> Result<Vec<RefSpec>> {
        let handle = RemoteHandle::load(self.backend, &self.name)?;
        Ok(handle.config().refspecs_for(direction).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::memory::InMemoryRemotes;
    use crate::traits::RefSpecs;

    #[test]
    fn add_remote_seeds_default_fetch() {
        let remotes = InMemoryRemotes::new();
        let origin = remotes.add_remote("origin", "https://example.com/repo.git").unwrap();
        assert_eq!(origin.name(), "origin");
        assert_eq!(origin.url().unwrap(), "https://example.com/repo.git");

        let fetch = origin.fetch_refspecs().unwrap();
        assert_eq!(fetch.len(), 1);
        assert_eq!(fetch[0].destination(), "refs/remotes/origin/*");
        assert!(origin.push_refspecs().unwrap().is_empty());
    }

    #[test]
    fn add_remote_twice_fails() {
        let remotes = InMemoryRemotes::new();
        remotes.add_remote("origin", "a").unwrap();
        let err = remotes.add_remote("origin", "b").err().unwrap();
        assert!(matches!(err, RemoteError::AlreadyExists { .. }));
    }

    #[test]
    fn add_remote_validates_input() {
        let remotes = InMemoryRemotes::new();
        assert!(matches!(
            remotes.add_remote("bad/name", "a").err().unwrap(),
            RemoteError::InvalidRemoteName { .. }
        ));
        assert!(matches!(
            remotes.add_remote("x.lock", "a").err().unwrap(),
            RemoteError::InvalidRemoteName { name, .. } if name == "x.lock"
        ));
        assert!(matches!(
            remotes.add_remote("origin", "").err().unwrap(),
            RemoteError::EmptyArgument { name: "url" }
        ));
    }

    #[test]
    fn open_missing_remote_fails() {
        let remotes = InMemoryRemotes::new();
        assert!(matches!(
            remotes.remote("origin").err().unwrap(),
            RemoteError::NotFound { .. }
        ));
    }

    #[test]
    fn direction_filters_follow_collection() {
        let remotes = InMemoryRemotes::new();
        let origin = remotes.add_remote("origin", "x").unwrap();
        origin.refspecs().add_push("refs/heads/main:refs/heads/main").unwrap();
        assert_eq!(origin.push_refspecs().unwrap().len(), 1);
        assert_eq!(origin.refspecs().count().unwrap(), 2);
    }
}
