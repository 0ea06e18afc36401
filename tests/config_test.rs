// tests/config_test.rs
use git_bump::config::{load_config, Config};
use git_bump::GitBumpError;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert!(!config.behavior.assume_yes);
    assert!(!config.tag.annotated);
    assert_eq!(config.tag.message, "Release {version}");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[behavior]
assume_yes = true

[tag]
annotated = true
message = "Ship {version}"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.behavior.assume_yes);
    assert!(config.tag.annotated);
    assert_eq!(config.tag.render_message("v2.0.0"), "Ship v2.0.0");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[branches]\nmain = \"v{version}\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_behavior_config_from_fixture() {
    let config = load_config(Some(fixture("config_with_behavior.toml").as_str()))
        .expect("Failed to load test config");
    assert!(config.behavior.assume_yes);
    assert!(!config.tag.annotated);
}

#[test]
fn test_annotated_config_from_fixture() {
    let config = load_config(Some(fixture("config_annotated.toml").as_str()))
        .expect("Failed to load test config");
    assert!(config.tag.annotated);
    assert!(!config.behavior.assume_yes);
}

#[test]
fn test_invalid_config_is_error() {
    let err = load_config(Some(fixture("config_invalid.toml").as_str())).unwrap_err();
    assert!(matches!(err, GitBumpError::Config(_)));
    assert!(err.to_string().contains("config_invalid.toml"));
}

#[test]
#[serial]
fn test_local_config_file_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gitbump.toml"),
        "[behavior]\nassume_yes = true\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert!(config.unwrap().behavior.assume_yes);
}
