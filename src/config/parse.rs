//! Configuration file parsing and discovery

use crate::config::presets::merge_with_builtins;
use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, LaunchError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["rlaunch.yml", "rlaunch.yaml"];

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Config file in the per-user configuration directory, if one exists
pub fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "rlaunch")?;
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, LaunchError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string and merge it over the built-in presets
pub fn parse_config(yaml: &str) -> Result<Config, LaunchError> {
    let user: Config = if yaml.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(merge_with_builtins(user))
}

/// Load configuration with automatic file discovery.
///
/// Falls back to the built-in presets when no file is found anywhere.
pub fn parse_config_auto() -> Result<(Config, Option<PathBuf>), LaunchError> {
    let found = match find_config_file() {
        Ok(path) => Some(path),
        Err(ConfigError::NotFound(_)) => user_config_file(),
        Err(e) => return Err(e.into()),
    };

    match found {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((merge_with_builtins(Config::default()), None)),
    }
}
