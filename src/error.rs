use thiserror::Error;

/// Unified error type for upgrade policy operations
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("failed to parse current version '{version}': {reason}")]
    CurrentVersion { version: String, reason: String },

    #[error("failed to parse new version '{version}': {reason}")]
    NewVersion { version: String, reason: String },

    #[error("unknown policy type: {0}")]
    UnknownPolicyType(String),

    #[error("invalid policy type \"{0}\"")]
    InvalidPolicyType(String),

    #[error("invalid granularity \"{0}\"")]
    InvalidGranularity(String),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("duplicate registered name: {0}")]
    DuplicateName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in upgrade-policy
pub type Result<T> = std::result::Result<T, PolicyError>;

impl PolicyError {
    /// Create a parse error for the running version
    pub fn current_version(version: impl Into<String>, reason: impl ToString) -> Self {
        PolicyError::CurrentVersion {
            version: version.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a parse error for the candidate version
    pub fn new_version(version: impl Into<String>, reason: impl ToString) -> Self {
        PolicyError::NewVersion {
            version: version.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a pattern compilation error
    pub fn pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        PolicyError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PolicyError::Config(msg.into())
    }

    /// Whether this error came from parsing one of the two decision operands
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PolicyError::CurrentVersion { .. } | PolicyError::NewVersion { .. }
        )
    }
}
