//! Policy type tag and its process-wide name registry.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PolicyError, Result};
use crate::registry::{DuplicateName, NameRegistry, Registration};

/// Which decision strategy a policy uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyType {
    None,
    Semver,
    Force,
    Glob,
    Regexp,
}

impl PolicyType {
    /// Every defined tag, in declaration order
    pub const ALL: [PolicyType; 5] = [
        PolicyType::None,
        PolicyType::Semver,
        PolicyType::Force,
        PolicyType::Glob,
        PolicyType::Regexp,
    ];

    /// Short lowercase name used in configuration documents.
    pub fn short_name(self) -> &'static str {
        match self {
            PolicyType::None => "none",
            PolicyType::Semver => "semver",
            PolicyType::Force => "force",
            PolicyType::Glob => "glob",
            PolicyType::Regexp => "regexp",
        }
    }

    /// The shared read-only registry
    pub fn registry() -> Result<&'static NameRegistry<PolicyType>> {
        REGISTRY.as_ref().map_err(|e| e.clone().into())
    }

    /// Resolved external name of this tag
    pub fn encode(self) -> Result<&'static str> {
        Self::registry()?
            .name_of(self)
            .ok_or_else(|| PolicyError::UnknownPolicyType(format!("{:?}", self)))
    }

    /// Tag whose resolved name equals `name` exactly
    pub fn decode(name: &str) -> Result<PolicyType> {
        Self::registry()?
            .tag_of(name)
            .ok_or_else(|| PolicyError::InvalidPolicyType(name.to_string()))
    }

    /// Canonical name, before the naming strategy is applied
    pub fn canonical_name(self) -> Result<&'static str> {
        Self::registry()?
            .canonical_name_of(self)
            .ok_or_else(|| PolicyError::UnknownPolicyType(format!("{:?}", self)))
    }
}

lazy_static! {
    static ref REGISTRY: std::result::Result<NameRegistry<PolicyType>, DuplicateName> =
        NameRegistry::build(&[
            Registration::new(PolicyType::None, "PolicyTypeNone")
                .with_custom_name(PolicyType::short_name),
            Registration::new(PolicyType::Semver, "PolicyTypeSemver")
                .with_custom_name(PolicyType::short_name),
            Registration::new(PolicyType::Force, "PolicyTypeForce")
                .with_custom_name(PolicyType::short_name),
            Registration::new(PolicyType::Glob, "PolicyTypeGlob")
                .with_custom_name(PolicyType::short_name),
            Registration::new(PolicyType::Regexp, "PolicyTypeRegexp")
                .with_custom_name(PolicyType::short_name),
        ]);
}

impl TryFrom<u8> for PolicyType {
    type Error = PolicyError;

    fn try_from(value: u8) -> Result<Self> {
        PolicyType::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| PolicyError::UnknownPolicyType(value.to_string()))
    }
}

impl FromStr for PolicyType {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        PolicyType::decode(s)
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().map_err(|_| fmt::Error)?)
    }
}

impl Serialize for PolicyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let name = self
            .encode()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for PolicyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)
            .map_err(|e| {
                <D::Error as de::Error>::custom(format!("policy type should be a string: {}", e))
            })?;
        PolicyType::decode(&name).map_err(<D::Error as de::Error>::custom)
    }
}
