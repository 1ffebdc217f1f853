//! The [`RefSpec`] value type and its [`RefSpecDirection`] tag.
//!
//! A refspec is a rule of the form `[+]<source>:<destination>` telling the
//! transfer layer which references on one side map to which references on
//! the other. Values are immutable: to change a refspec attached to a remote,
//! remove it and add a new one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RefSpecError, Result};
use crate::names::{validate_ref_pattern, WILDCARD};
use crate::traits::RefSpecView;

/// Which transfer operation a refspec applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefSpecDirection {
    /// Maps remote refs to local refs when fetching.
    Fetch,
    /// Maps local refs to remote refs when pushing.
    Push,
}

impl RefSpecDirection {
    /// Lowercase name, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefSpecDirection::Fetch => "fetch",
            RefSpecDirection::Push => "push",
        }
    }
}

impl fmt::Display for RefSpecDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefSpecDirection {
    type Err = RefSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fetch" => Ok(RefSpecDirection::Fetch),
            "push" => Ok(RefSpecDirection::Push),
            other => Err(RefSpecError::InvalidDirection(other.to_string())),
        }
    }
}

/// A parsed push or fetch reference specification.
///
/// The raw text is kept verbatim so that [`RefSpec::specification`] always
/// round-trips to exactly what was parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RefSpecRecord", into = "RefSpecRecord")]
pub struct RefSpec {
    specification: String,
    direction: RefSpecDirection,
    source: String,
    destination: String,
    force_update: bool,
}

impl RefSpec {
    /// Parse `"+refs/heads/*:refs/remotes/origin/*"` style text.
    ///
    /// A leading `+` marks a forced update. The remainder is split on the
    /// first `:`; both sides must be valid reference patterns, and a `*` on
    /// one side requires a `*` on the other.
    pub fn parse(spec: &str, direction: RefSpecDirection) -> Result<Self> {
        let invalid = |reason: String| RefSpecError::InvalidRefSpec {
            spec: spec.to_string(),
            reason,
        };

        let (force_update, rest) = match spec.strip_prefix('+') {
            Some(stripped) => (true, stripped),
            None => (false, spec),
        };

        let (source, destination) = rest.split_once(':').ok_or_else(|| {
            invalid("missing ':' between source and destination".into())
        })?;

        if source.is_empty() {
            return Err(invalid("source must not be empty".into()));
        }
        if destination.is_empty() {
            return Err(invalid("destination must not be empty".into()));
        }

        validate_ref_pattern(source).map_err(|e| invalid(format!("source: {e}")))?;
        validate_ref_pattern(destination)
            .map_err(|e| invalid(format!("destination: {e}")))?;

        if source.contains(WILDCARD) != destination.contains(WILDCARD) {
            return Err(invalid(
                "a '*' on one side requires a '*' on the other".into(),
            ));
        }

        Ok(Self {
            specification: spec.to_string(),
            direction,
            source: source.to_string(),
            destination: destination.to_string(),
            force_update,
        })
    }

    /// Parse a fetch-direction refspec.
    pub fn fetch(spec: &str) -> Result<Self> {
        Self::parse(spec, RefSpecDirection::Fetch)
    }

    /// Parse a push-direction refspec.
    pub fn push(spec: &str) -> Result<Self> {
        Self::parse(spec, RefSpecDirection::Push)
    }

    /// The raw rule text, exactly as parsed.
    pub fn specification(&self) -> &str {
        &self.specification
    }

    /// Whether this rule applies to fetches or pushes.
    pub fn direction(&self) -> RefSpecDirection {
        self.direction
    }

    /// The pattern matched against the sending side's references.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern describing where a matched source is written.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether the destination may be updated without a fast-forward.
    pub fn force_update(&self) -> bool {
        self.force_update
    }
}

impl RefSpecView for RefSpec {
    fn specification(&self) -> &str {
        RefSpec::specification(self)
    }

    fn direction(&self) -> RefSpecDirection {
        RefSpec::direction(self)
    }

    fn source(&self) -> &str {
        RefSpec::source(self)
    }

    fn destination(&self) -> &str {
        RefSpec::destination(self)
    }

    fn force_update(&self) -> bool {
        RefSpec::force_update(self)
    }
}

impl fmt::Display for RefSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specification)
    }
}

/// Persisted form of a [`RefSpec`]: the direction tag plus the raw text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSpecRecord {
    pub direction: RefSpecDirection,
    pub spec: String,
}

impl TryFrom<RefSpecRecord> for RefSpec {
    type Error = RefSpecError;

    fn try_from(record: RefSpecRecord) -> Result<Self> {
        RefSpec::parse(&record.spec, record.direction)
    }
}

impl From<RefSpec> for RefSpecRecord {
    fn from(refspec: RefSpec) -> Self {
        Self {
            direction: refspec.direction,
            spec: refspec.specification,
        }
    }
}
