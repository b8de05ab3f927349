//! Bidirectional name tables for closed tag enums.
//!
//! Every tag is registered once with its canonical name and, optionally, a
//! naming strategy that replaces the canonical name on the wire. Both the
//! canonical and the resolved names must be unique.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::PolicyError;

/// Naming strategy overriding a tag's canonical name.
pub type NameFn<T> = fn(T) -> &'static str;

/// A single tag registration
#[derive(Debug, Clone, Copy)]
pub struct Registration<T> {
    pub tag: T,
    pub canonical: &'static str,
    pub custom: Option<NameFn<T>>,
}

impl<T: Copy> Registration<T> {
    pub fn new(tag: T, canonical: &'static str) -> Self {
        Registration {
            tag,
            canonical,
            custom: None,
        }
    }

    /// Attach a naming strategy
    pub fn with_custom_name(mut self, name: NameFn<T>) -> Self {
        self.custom = Some(name);
        self
    }

    /// Name used for encode and decode
    pub fn resolved(&self) -> &'static str {
        match self.custom {
            Some(name) => name(self.tag),
            None => self.canonical,
        }
    }
}

/// A tag or name registered twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName(pub String);

impl From<DuplicateName> for PolicyError {
    fn from(value: DuplicateName) -> Self {
        PolicyError::DuplicateName(value.0)
    }
}

/// Read-only name ↔ tag lookup built from registrations.
#[derive(Debug)]
pub struct NameRegistry<T> {
    by_name: HashMap<&'static str, T>,
    by_tag: HashMap<T, &'static str>,
    canonical: HashMap<T, &'static str>,
}

impl<T> NameRegistry<T>
where
    T: Copy + Eq + Hash + std::fmt::Debug,
{
    /// Build the tables, rejecting any duplicate tag or name.
    pub fn build(registrations: &[Registration<T>]) -> Result<Self, DuplicateName> {
        let mut by_name = HashMap::with_capacity(registrations.len());
        let mut by_tag = HashMap::with_capacity(registrations.len());
        let mut canonical = HashMap::with_capacity(registrations.len());
        let mut canonical_names = HashMap::with_capacity(registrations.len());

        for reg in registrations {
            if canonical_names.insert(reg.canonical, reg.tag).is_some() {
                return Err(DuplicateName(reg.canonical.to_string()));
            }
            if canonical.insert(reg.tag, reg.canonical).is_some() {
                return Err(DuplicateName(format!("{:?}", reg.tag)));
            }

            let name = reg.resolved();
            if by_name.insert(name, reg.tag).is_some() {
                return Err(DuplicateName(name.to_string()));
            }
            by_tag.insert(reg.tag, name);
        }

        Ok(NameRegistry {
            by_name,
            by_tag,
            canonical,
        })
    }

    /// Resolved name for a tag, if registered
    pub fn name_of(&self, tag: T) -> Option<&'static str> {
        self.by_tag.get(&tag).copied()
    }

    /// Canonical (pre-strategy) name for a tag, if registered
    pub fn canonical_name_of(&self, tag: T) -> Option<&'static str> {
        self.canonical.get(&tag).copied()
    }

    /// Exact, case-sensitive lookup by resolved name
    pub fn tag_of(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}
