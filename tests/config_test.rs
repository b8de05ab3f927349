// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use upgrade_policy::config::{load_config, Config, CONFIG_ENV};
use upgrade_policy::{Granularity, PolicyType};

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_from_file() {
    let temp_file = write_config(
        r#"
[policy]
type = "semver"
granularity = "all"

[images."registry.local/app"]
type = "regexp"
pattern = "^v2\\."
"#,
    );

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.policy.granularity, Some(Granularity::All));

    let app = config.policy_for(Some("registry.local/app")).unwrap();
    assert_eq!(app.policy_type(), PolicyType::Regexp);
    assert!(app.should_update("v1.9", "v2.0").unwrap());
    assert!(!app.should_update("v1.9", "v3.0").unwrap());
}

#[test]
fn test_fixture_overrides() {
    let config = load_config(Some("tests/fixtures/images.toml")).expect("Failed to load fixture");

    let default = config.policy_for(None).unwrap();
    assert!(default.should_update("1.2.3", "1.4.0").unwrap());
    assert!(!default.should_update("1.2.3", "2.0.0").unwrap());

    let postgres = config.policy_for(Some("postgres")).unwrap();
    assert!(!postgres.should_update("15.1.0", "15.2.0").unwrap());

    let canary = config.policy_for(Some("canary")).unwrap();
    assert!(canary.should_update("2.0.0", "1.0.0").unwrap());
}

#[test]
fn test_missing_explicit_file_is_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
fn test_malformed_file_is_error() {
    let temp_file = write_config("[policy\ntype = ");
    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_invalid_pattern_fails_on_build() {
    let temp_file = write_config(
        r#"
[policy]
type = "regexp"
pattern = "(unclosed"
"#,
    );

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    let err = config.policy_for(None).unwrap_err();
    assert!(err.to_string().contains("invalid pattern"));
}

#[test]
#[serial]
fn test_env_var_config() {
    let temp_file = write_config(
        r#"
[policy]
type = "force"
"#,
    );

    std::env::set_var(CONFIG_ENV, temp_file.path());
    let config = load_config(None);
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(config.unwrap().policy.policy_type, PolicyType::Force);
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env_var() {
    let from_env = write_config("[policy]\ntype = \"force\"\n");
    let explicit = write_config("[policy]\ntype = \"none\"\n");

    std::env::set_var(CONFIG_ENV, from_env.path());
    let config = load_config(Some(explicit.path().to_str().unwrap()));
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(config.unwrap().policy.policy_type, PolicyType::None);
}

#[test]
fn test_default_values() {
    let config = Config::default();
    let policy = config.policy_for(Some("anything")).unwrap();
    assert_eq!(policy.name(), "patch");
}
