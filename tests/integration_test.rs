// tests/integration_test.rs
use std::process::Command;

fn upgrade_policy() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_upgrade-policy"));
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0");
    cmd
}

#[test]
fn test_help() {
    let output = upgrade_policy()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("upgrade-policy"));
    assert!(stdout.contains("Decide whether a new version"));
}

#[test]
fn test_decision_with_shorthand() {
    let output = upgrade_policy()
        .args(["--policy", "patch", "1.2.3", "1.2.4"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("update"));
    assert!(stdout.contains("1.2.3 -> 1.2.4"));
}

#[test]
fn test_json_output_from_fixture() {
    let output = upgrade_policy()
        .args([
            "--config",
            "tests/fixtures/images.toml",
            "--image",
            "nginx",
            "--json",
            "1.20.0",
            "1.19.0",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "glob");
    assert_eq!(value["policy"], "glob:1.2*");
    assert_eq!(value["update"], false);
}

#[test]
fn test_parse_error_exits_nonzero() {
    let output = upgrade_policy()
        .args(["--policy", "minor", "abc", "1.0.0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("abc"));
}

#[test]
fn test_list_policy_types() {
    let output = upgrade_policy()
        .arg("--list")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["none", "semver", "force", "glob", "regexp"] {
        assert!(stdout.contains(name));
    }
}
