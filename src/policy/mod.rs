//! Upgrade policies - pure decisions over a pair of version strings
//!
//! A [`Policy`] is a closed set of strategies:
//! - `None` never updates
//! - `Semver` compares versions within a [`Granularity`]
//! - `Force` always updates
//! - `Glob` and `Regexp` match the candidate version against a pattern
//!
//! Policies hold only immutable configuration and can be shared freely
//! between threads.

pub mod kind;
pub mod pattern;
pub mod semver;

use std::fmt;
use std::str::FromStr;

use crate::error::{PolicyError, Result};

pub use self::kind::PolicyType;
pub use self::pattern::{GlobPolicy, RegexpPolicy};
pub use self::semver::{Granularity, SemverPolicy};

/// A configured upgrade strategy
#[derive(Debug, Clone)]
pub enum Policy {
    None,
    Semver(SemverPolicy),
    Force,
    Glob(GlobPolicy),
    Regexp(RegexpPolicy),
}

impl Policy {
    pub fn semver(granularity: Granularity) -> Self {
        Policy::Semver(SemverPolicy::new(granularity))
    }

    pub fn glob(pattern: impl Into<String>) -> Result<Self> {
        Ok(Policy::Glob(GlobPolicy::new(pattern)?))
    }

    pub fn regexp(pattern: &str) -> Result<Self> {
        Ok(Policy::Regexp(RegexpPolicy::new(pattern)?))
    }

    /// Build a policy from decoded configuration fields.
    ///
    /// # Arguments
    /// * `policy_type` - Strategy to use
    /// * `granularity` - Required for `Semver`, ignored otherwise
    /// * `pattern` - Required for `Glob` and `Regexp`, ignored otherwise
    pub fn from_parts(
        policy_type: PolicyType,
        granularity: Option<Granularity>,
        pattern: Option<&str>,
    ) -> Result<Self> {
        match policy_type {
            PolicyType::None => Ok(Policy::None),
            PolicyType::Force => Ok(Policy::Force),
            PolicyType::Semver => granularity.map(Policy::semver).ok_or_else(|| {
                PolicyError::config("semver policy requires a granularity")
            }),
            PolicyType::Glob => {
                Policy::glob(pattern.ok_or_else(|| missing_pattern(policy_type))?)
            }
            PolicyType::Regexp => {
                Policy::regexp(pattern.ok_or_else(|| missing_pattern(policy_type))?)
            }
        }
    }

    /// Decide whether `new` should replace `current`
    pub fn should_update(&self, current: &str, new: &str) -> Result<bool> {
        match self {
            Policy::None => Ok(false),
            Policy::Force => Ok(true),
            Policy::Semver(p) => p.should_update(current, new),
            Policy::Glob(p) => p.should_update(current, new),
            Policy::Regexp(p) => p.should_update(current, new),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Policy::None => "none",
            Policy::Force => "force",
            Policy::Semver(p) => p.name(),
            Policy::Glob(p) => p.name(),
            Policy::Regexp(p) => p.name(),
        }
    }

    pub fn policy_type(&self) -> PolicyType {
        match self {
            Policy::None => PolicyType::None,
            Policy::Force => PolicyType::Force,
            Policy::Semver(p) => p.policy_type(),
            Policy::Glob(p) => p.policy_type(),
            Policy::Regexp(p) => p.policy_type(),
        }
    }
}

fn missing_pattern(policy_type: PolicyType) -> PolicyError {
    PolicyError::config(format!("{} policy requires a pattern", policy_type))
}

/// Parses the single-string notation: `none`, `all`, `major`, `minor`,
/// `patch`, `force`, `semver:<granularity>`, `glob:<pattern>` or
/// `regexp:<pattern>`.
impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Some((prefix, pattern)) = trimmed.split_once(':') {
            return match prefix.to_lowercase().as_str() {
                "semver" => pattern
                    .trim()
                    .to_lowercase()
                    .parse::<Granularity>()
                    .map(Policy::semver),
                "glob" => Policy::glob(pattern),
                "regexp" => Policy::regexp(pattern),
                _ => Err(PolicyError::InvalidPolicyType(s.to_string())),
            };
        }

        match trimmed.to_lowercase().as_str() {
            "none" => Ok(Policy::None),
            "force" => Ok(Policy::Force),
            other => other
                .parse::<Granularity>()
                .map(Policy::semver)
                .map_err(|_| PolicyError::InvalidPolicyType(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // bare "none" parses back to Policy::None
            Policy::Semver(p) if p.granularity() == Granularity::None => {
                write!(f, "semver:{}", p.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
