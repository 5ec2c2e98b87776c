//! SCOPECHAIN_* environment overrides.
//!
//! Kept in its own test binary with a single test: environment
//! variables are process-wide.

use std::fs;

use tempfile::TempDir;

use scopechain::config::{RawSettings, Settings};
use scopechain::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_env_vars_when_load_then_override_files_and_yield_to_cli() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "welcome = \"Hello\"\nexclamation = \".\"\n").unwrap();
    fs::write(&local, "welcome = \"Hi\"\ncourse = \"Rust\"\n").unwrap();
    std::env::remove_var("SCOPECHAIN_WELCOME");
    std::env::set_var("SCOPECHAIN_COURSE", "Env");
    std::env::set_var("SCOPECHAIN_EXCLAMATION", "?");

    // Act
    let loaded = Settings::load_from(Some(&global), Some(&local)).expect("load settings");
    let overridden = loaded.apply_overrides(&RawSettings {
        exclamation: Some("!!".into()),
        ..Default::default()
    });

    // Cleanup
    std::env::remove_var("SCOPECHAIN_COURSE");
    std::env::remove_var("SCOPECHAIN_EXCLAMATION");

    // Assert: env beats both files
    assert_eq!(loaded.welcome, "Hi");
    assert_eq!(loaded.course, "Env");
    assert_eq!(loaded.exclamation, "?");

    // Assert: CLI beats env, untouched keys keep the env value
    assert_eq!(overridden.course, "Env");
    assert_eq!(overridden.exclamation, "!!");
    assert_eq!(overridden.welcome, "Hi");
}
