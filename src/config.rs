use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::policy::{Granularity, Policy, PolicyType};

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "UPGRADE_POLICY_CONFIG";

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "upgradepolicy.toml";

/// Represents the complete configuration for upgrade-policy.
///
/// Holds the default policy and per-image overrides keyed by image name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub images: HashMap<String, PolicyConfig>,
}

/// Policy description as written in a configuration document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PolicyConfig {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl PolicyConfig {
    /// Turns the decoded fields into a ready-to-use policy.
    ///
    /// # Returns
    /// * `Ok(Policy)` - The configured policy
    /// * `Err` - If a required field is missing or the pattern does not compile
    pub fn build(&self) -> Result<Policy> {
        Policy::from_parts(
            self.policy_type,
            self.granularity,
            self.pattern.as_deref(),
        )
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            policy_type: PolicyType::Semver,
            granularity: Some(Granularity::Patch),
            pattern: None,
        }
    }
}

impl Config {
    /// Policy for an image, falling back to the default policy.
    pub fn policy_for(&self, image: Option<&str>) -> Result<Policy> {
        match image.and_then(|name| self.images.get(name)) {
            Some(image_policy) => image_policy.build(),
            None => self.policy.build(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `UPGRADE_POLICY_CONFIG` environment variable
/// 3. `upgradepolicy.toml` in current directory
/// 4. `upgradepolicy.toml` in user config directory
/// 5. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path)?;
            parse_config(&config_str)
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parses a TOML configuration document.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
