//! Persisted remote configuration.
//!
//! A remotes file is TOML with one `[[remote]]` table per remote. Refspecs are
//! stored as an ordered list so that indices survive a reload:
//!
//! ```toml
//! [[remote]]
//! name = "origin"
//! url = "https://example.com/repo.git"
//!
//! [[remote.refspec]]
//! direction = "fetch"
//! spec = "+refs/heads/*:refs/remotes/origin/*"
//! ```

use refmap_refspec::{RefSpec, RefSpecDirection};
use serde::{Deserialize, Serialize};

use crate::error::{RemoteError, Result};

/// The stored state of one remote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub name: String,
    pub url: String,
    /// Refspecs in collection order.
    #[serde(default, rename = "refspec")]
    pub refspecs: Vec<RefSpec>,
}

impl RemoteConfig {
    /// A remote with no refspecs.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            refspecs: Vec::new(),
        }
    }

    /// A remote seeded with the default fetch refspec for `name`.
    pub fn with_default_fetch(name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let mut config = Self::new(name, url);
        let default = RefSpec::fetch(&default_fetch_refspec(&config.name))?;
        config.refspecs.push(default);
        Ok(config)
    }

    /// Remove and return the refspec at `index`. Later entries shift down.
    pub fn remove_refspec(&mut self, index: usize) -> Result<RefSpec> {
        let count = self.refspecs.len();
        if index >= count {
            return Err(RemoteError::IndexOutOfRange { index, count });
        }
        Ok(self.refspecs.remove(index))
    }

    /// Refspecs of one direction, in collection order.
    pub fn refspecs_for(&self, direction: RefSpecDirection) -> impl Iterator<Item = &RefSpec> {
        self.refspecs
            .iter()
            .filter(move |rs| rs.direction() == direction)
    }
}

/// The fetch refspec a newly added remote starts with.
pub fn default_fetch_refspec(remote: &str) -> String {
    format!("+refs/heads/*:refs/remotes/{remote}/*")
}

/// Top-level layout of a remotes file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotesFile {
    #[serde(default, rename = "remote")]
    pub remotes: Vec<RemoteConfig>,
}

impl RemotesFile {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RemoteError::Serialization(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RemoteError::Serialization(e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&RemoteConfig> {
        self.remotes.iter().find(|r| r.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RemoteConfig> {
        self.remotes.iter_mut().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fetch_refspec_targets_remote_namespace() {
        assert_eq!(default_fetch_refspec("origin"), "+refs/heads/*:refs/remotes/origin/*");
        let config = RemoteConfig::with_default_fetch("origin", "https://example.com").unwrap();
        assert_eq!(config.refspecs.len(), 1);
        assert!(config.refspecs[0].force_update());
        assert_eq!(config.refspecs[0].direction(), RefSpecDirection::Fetch);
    }

    #[test]
    fn toml_preserves_mixed_order() {
        let mut config = RemoteConfig::new("origin", "https://example.com/repo.git");
        config.refspecs.push(RefSpec::push("refs/heads/main:refs/heads/main").unwrap());
        config.refspecs.push(RefSpec::fetch("+refs/heads/*:refs/remotes/origin/*").unwrap());
        let file = RemotesFile { remotes: vec![config.clone()] };

        let text = file.to_toml_string().unwrap();
        assert!(text.contains("[[remote.refspec]]"), "got:\n{text}");

        let back = RemotesFile::from_toml_str(&text).unwrap();
        assert_eq!(back.get("origin"), Some(&config));
    }

    #[test]
    fn empty_text_is_empty_file() {
        let file = RemotesFile::from_toml_str("").unwrap();
        assert!(file.remotes.is_empty());
    }

    #[test]
    fn malformed_refspec_in_file_is_rejected() {
        let text = r#"
[[remote]]
name = "origin"
url = "x"

[[remote.refspec]]
direction = "fetch"
spec = "not-a-refspec"
"#;
        let err = RemotesFile::from_toml_str(text).unwrap_err();
        assert!(matches!(err, RemoteError::Serialization(_)));
    }

    #[test]
    fn refspecs_for_filters_direction() {
        let mut config = RemoteConfig::with_default_fetch("origin", "x").unwrap();
        config.refspecs.push(RefSpec::push("refs/heads/a:refs/heads/b").unwrap());
        assert_eq!(config.refspecs_for(RefSpecDirection::Push).count(), 1);
        assert_eq!(config.refspecs_for(RefSpecDirection::Fetch).count(), 1);
    }
}
