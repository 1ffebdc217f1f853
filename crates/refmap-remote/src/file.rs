//! File-backed remote backend.
//!
//! [`FileRemotes`] keeps every remote in a single TOML file (see
//! [`crate::config`]). Reads always go to disk. Writes are read-modify-write
//! cycles serialized by a mutex and committed by renaming a fully written
//! temporary file over the original, so readers see either the old file or
//! the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::{RemoteConfig, RemotesFile};
use crate::error::{RemoteError, Result};
use crate::traits::RemoteBackend;

/// A [`RemoteBackend`] persisted to a TOML file.
#[derive(Debug)]
pub struct FileRemotes {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileRemotes {
    /// Use the remotes file at `path`. The file need not exist yet; a missing
    /// file reads as an empty set of remotes.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<RemotesFile> {
        match fs::read_to_string(&self.path) {
            Ok(text) => RemotesFile::from_toml_str(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RemotesFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_file(&self, file: &RemotesFile) -> Result<()> {
        let text = file.to_toml_string()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| RemoteError::Io(e.error))?;

        debug!(path = %self.path.display(), remotes = file.remotes.len(), "wrote remotes file");
        Ok(())
    }

    /// Apply `f` to the current file contents and write the result. Nothing
    /// is written if `f` fails.
    fn modify<T>(&self, f: impl FnOnce(&mut RemotesFile) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| RemoteError::Serialization(format!("lock poisoned: {e}")))?;
        let mut file = self.read_file()?;
        let out = f(&mut file)?;
        self.write_file(&file)?;
        Ok(out)
    }
}

impl RemoteBackend for FileRemotes {
    fn read_remote(&self, name: &str) -> Result<Option<RemoteConfig>> {
        Ok(self.read_file()?.get(name).cloned())
    }

    fn update_remote(
        &self,
        name: &str,
        edit: &mut dyn FnMut(&mut RemoteConfig) -> Result<()>,
    ) -> Result<RemoteConfig> {
        self.modify(|file| {
            let stored = file.get_mut(name).ok_or_else(|| RemoteError::NotFound {
                name: name.to_string(),
            })?;
            edit(stored)?;
            Ok(stored.clone())
        })
    }

    fn insert_remote(&self, config: &RemoteConfig) -> Result<()> {
        self.modify(|file| {
            if file.get(&config.name).is_some() {
                return Err(RemoteError::AlreadyExists {
                    name: config.name.clone(),
                });
            }
            file.remotes.push(config.clone());
            Ok(())
        })?;
        info!(remote = %config.name, url = %config.url, "added remote");
        Ok(())
    }

    fn delete_remote(&self, name: &str) -> Result<bool> {
        let deleted = self.modify(|file| {
            let before = file.remotes.len();
            file.remotes.retain(|r| r.name != name);
            Ok(file.remotes.len() != before)
        })?;
        if deleted {
            info!(remote = %name, "removed remote");
        }
        Ok(deleted)
    }

    fn remote_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .read_file()?
            .remotes
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort();
        Ok(names)
    }
}
