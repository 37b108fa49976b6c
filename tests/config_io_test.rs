//! Config store persistence tests: default creation, commit round-trips,
//! and init behavior.

use meteor::config::{Config, init_config};
use serde_json::{Value, json};
use tempfile::TempDir;

#[test]
fn test_load_or_default_creates_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".meteor").join("launcher.json");

    let config = Config::load_or_default(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.get_str("jre").unwrap(), "");
    assert_eq!(config.get_i64("ram").unwrap(), 2048);
}

#[test]
fn test_commit_then_reload_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");

    let mut config = Config::load_or_default(&path).unwrap();
    config.set("theme", "light");
    config.set("custom-flag", true);
    config.commit().unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.get_str("theme").unwrap(), "light");
    assert_eq!(reloaded.get("custom-flag"), Some(&Value::Bool(true)));
    // unedited keys come back exactly as written
    assert_eq!(reloaded.get_i64("ram").unwrap(), 2048);
    assert_eq!(reloaded.get("vm-args"), Some(&json!([])));
}

#[test]
fn test_reload_preserves_key_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");

    let config = Config::load_or_default(&path).unwrap();
    let before: Vec<String> = config.root().keys().cloned().collect();

    let reloaded = Config::load(&path).unwrap();
    let after: Vec<String> = reloaded.root().keys().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_nested_write_persists() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");

    let mut config = Config::load_or_default(&path).unwrap();
    config.set("window", json!({ "width": 800 }));
    config.set_path(&["window".to_string(), "width".to_string()], 1024);
    config.commit().unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(
        reloaded.get_path(&["window".to_string(), "width".to_string()]),
        Some(&json!(1024))
    );
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");

    init_config(&path, false).unwrap();
    assert!(init_config(&path, false).is_err());
    assert!(init_config(&path, true).is_ok());
}

#[test]
fn test_load_fails_on_malformed_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load(&path).is_err());
}
