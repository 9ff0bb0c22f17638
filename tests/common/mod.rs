//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with an rlaunch.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rlaunch.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a temporary directory with an empty config, so only built-in presets apply
pub fn create_empty_config() -> (TempDir, PathBuf) {
    create_test_config("")
}

/// Owned argument vector from string literals
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
