//! Pattern based policies matching the candidate version string.

use regex::Regex;

use crate::error::{PolicyError, Result};

use super::kind::PolicyType;

/// Matches the new version against a shell-style wildcard
///
/// `*` matches any run of characters, including none. Everything else is
/// literal and the whole string must match.
#[derive(Debug, Clone)]
pub struct GlobPolicy {
    pattern: String,
    name: String,
    matcher: Regex,
}

impl GlobPolicy {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        // Escape everything, then reopen the wildcard
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\*", ".*");
        let matcher = Regex::new(&format!("^(?s:{})$", regex_pattern))
            .map_err(|e| PolicyError::pattern(&pattern, e))?;

        Ok(GlobPolicy {
            name: format!("glob:{}", pattern),
            pattern,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Only the candidate is inspected.
    pub fn should_update(&self, _current: &str, new: &str) -> Result<bool> {
        Ok(self.matcher.is_match(new))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy_type(&self) -> PolicyType {
        PolicyType::Glob
    }
}

/// Matches the new version against a regular expression.
///
/// The expression is unanchored; anchor it with `^` and `$` to require a
/// full match. An invalid expression is rejected when the policy is built.
#[derive(Debug, Clone)]
pub struct RegexpPolicy {
    name: String,
    regex: Regex,
}

impl RegexpPolicy {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| PolicyError::pattern(pattern, e))?;
        Ok(RegexpPolicy {
            name: format!("regexp:{}", pattern),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn should_update(&self, _current: &str, new: &str) -> Result<bool> {
        Ok(self.regex.is_match(new))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy_type(&self) -> PolicyType {
        PolicyType::Regexp
    }
}
