//! Semantic version policy.
//!
//! Decides whether a candidate version qualifies as an upgrade given how large
//! a bump the policy's [`Granularity`] allows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, Result};
use crate::version::{self, LATEST};

use super::kind::PolicyType;

/// Largest version bump a [`SemverPolicy`] accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Granularity {
    /// Never update
    None,
    /// Any increase, including moves between prerelease channels
    All,
    /// Any increase within the same prerelease channel
    Major,
    /// Increases that keep the major version
    Minor,
    /// Increases that keep major and minor
    Patch,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::None,
        Granularity::All,
        Granularity::Major,
        Granularity::Minor,
        Granularity::Patch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::None => "none",
            Granularity::All => "all",
            Granularity::Major => "major",
            Granularity::Minor => "minor",
            Granularity::Patch => "patch",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| PolicyError::InvalidGranularity(s.to_string()))
    }
}

impl TryFrom<String> for Granularity {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Granularity> for String {
    fn from(value: Granularity) -> Self {
        value.as_str().to_string()
    }
}

/// Policy comparing versions by SemVer precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemverPolicy {
    granularity: Granularity,
}

impl SemverPolicy {
    pub fn new(granularity: Granularity) -> Self {
        SemverPolicy { granularity }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Decide whether `new` should replace `current`.
    ///
    /// A `current` of `"latest"` always yields `true` and `new` is not parsed.
    /// Prerelease channels are only crossed under [`Granularity::All`], and
    /// anything not strictly newer is rejected before the granularity check.
    ///
    /// # Errors
    /// Returns a parse error naming the operand that is not a valid version.
    pub fn should_update(&self, current: &str, new: &str) -> Result<bool> {
        if current == LATEST {
            return Ok(true);
        }

        let current_version = version::parse_version(current)
            .map_err(|e| PolicyError::current_version(current, e))?;
        let new_version =
            version::parse_version(new).map_err(|e| PolicyError::new_version(new, e))?;

        if current_version.pre != new_version.pre && self.granularity != Granularity::All {
            return Ok(false);
        }

        if !version::is_newer(&current_version, &new_version) {
            return Ok(false);
        }

        let same_major = new_version.major == current_version.major;
        let same_minor = new_version.minor == current_version.minor;

        Ok(match self.granularity {
            Granularity::All | Granularity::Major => true,
            Granularity::Minor => same_major,
            Granularity::Patch => same_major && same_minor,
            Granularity::None => false,
        })
    }

    pub fn name(&self) -> &'static str {
        self.granularity.as_str()
    }

    pub fn policy_type(&self) -> PolicyType {
        PolicyType::Semver
    }
}
