//! Integration tests for layered settings loading.
//!
//! Each test uses its own env prefix so tests can run in parallel
//! without stepping on each other's environment.

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ally::config::Settings;

#[test]
fn given_no_config_when_load_then_default_data_dir() {
    let settings = Settings::load_from(None, "ALLY_TEST_DEFAULT").unwrap();

    assert!(settings.data_dir.is_absolute());
    assert_eq!(
        settings.data_dir.file_name().unwrap().to_str().unwrap(),
        "ally"
    );
}

#[test]
fn given_config_file_when_load_then_file_value_used() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("ally.toml");
    fs::write(&config_path, "data_dir = \"/tmp/ally-file-layer\"\n").unwrap();

    let settings = Settings::load_from(Some(&config_path), "ALLY_TEST_FILE").unwrap();

    assert_eq!(settings.data_dir, PathBuf::from("/tmp/ally-file-layer"));
}

#[test]
fn given_missing_config_file_when_load_then_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("does-not-exist.toml");

    let settings = Settings::load_from(Some(&config_path), "ALLY_TEST_MISSING").unwrap();

    assert_eq!(
        settings.data_dir.file_name().unwrap().to_str().unwrap(),
        "ally"
    );
}

#[test]
fn given_env_var_when_load_then_overrides_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("ally.toml");
    fs::write(&config_path, "data_dir = \"/tmp/ally-file-layer\"\n").unwrap();

    env::set_var("ALLY_TEST_ENV_DATA_DIR", "/tmp/ally-env-layer");
    let settings = Settings::load_from(Some(&config_path), "ALLY_TEST_ENV").unwrap();
    env::remove_var("ALLY_TEST_ENV_DATA_DIR");

    assert_eq!(settings.data_dir, PathBuf::from("/tmp/ally-env-layer"));
}

#[test]
fn given_tilde_in_data_dir_when_load_then_expanded() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("ally.toml");
    fs::write(&config_path, "data_dir = \"~/ally-aliases\"\n").unwrap();

    let settings = Settings::load_from(Some(&config_path), "ALLY_TEST_TILDE").unwrap();

    assert!(!settings.data_dir.to_string_lossy().contains('~'));
    assert!(settings.data_dir.ends_with("ally-aliases"));
}
