//! Version parsing and precedence on top of the `semver` crate.
//!
//! Image tags are rarely strict SemVer, so parsing accepts a single leading
//! `v`/`V`, pads a missing minor or patch component with zero and drops
//! leading zeros from numeric components and prerelease identifiers before
//! handing the string to [`semver::Version::parse`].

use std::cmp::Ordering;

pub use semver::Version;

/// Sentinel tag meaning "track whatever is newest".
pub const LATEST: &str = "latest";

/// Parses a version string into a [`Version`].
///
/// # Example
/// ```
/// use upgrade_policy::version::parse_version;
///
/// assert_eq!(parse_version("v1.2.3").unwrap().to_string(), "1.2.3");
/// assert_eq!(parse_version("1.2").unwrap().to_string(), "1.2.0");
/// assert_eq!(parse_version("2-rc.1").unwrap().to_string(), "2.0.0-rc.1");
/// assert_eq!(parse_version("2023.01.05").unwrap().to_string(), "2023.1.5");
/// assert!(parse_version("abc").is_err());
/// ```
pub fn parse_version(input: &str) -> Result<Version, semver::Error> {
    let clean = input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input);

    // Build metadata starts at the first '+', prerelease at the first '-' before it
    let (rest, build) = match clean.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (clean, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let mut parts: Vec<&str> = core.split('.').map(trim_leading_zeros).collect();
    if parts.len() < 3 {
        parts.resize(3, "0");
    }

    let mut normalized = parts.join(".");
    if let Some(pre) = pre {
        let identifiers: Vec<&str> = pre.split('.').map(trim_leading_zeros).collect();
        normalized.push('-');
        normalized.push_str(&identifiers.join("."));
    }
    if let Some(build) = build {
        normalized.push('+');
        normalized.push_str(build);
    }

    Version::parse(&normalized)
}

/// `"007"` becomes `"7"`, `"000"` becomes `"0"`; non-numeric input is untouched.
fn trim_leading_zeros(part: &str) -> &str {
    if part.len() > 1 && part.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = part.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    } else {
        part
    }
}

/// Orders two versions by SemVer precedence.
///
/// Build metadata does not take part in precedence, unlike `Version`'s own `Ord`.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// Returns true when `candidate` has strictly higher precedence than `current`.
pub fn is_newer(current: &Version, candidate: &Version) -> bool {
    cmp_precedence(current, candidate) == Ordering::Less
}
