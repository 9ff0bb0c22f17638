//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::{Config, Preset, Profile};
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for (name, preset) in &config.presets {
        validate_preset(name, preset)?;
    }

    let default = config.default_preset_name();
    if !config.presets.contains_key(default) {
        return Err(ConfigError::PresetNotFound(default.to_string()));
    }

    Ok(())
}

/// Validate a single preset
pub fn validate_preset(name: &str, preset: &Preset) -> ConfigResult<()> {
    if preset.debug_flags.iter().all(|f| f.is_empty()) {
        return Err(ConfigError::NoDebugFlags(name.to_string()));
    }

    validate_profile(name, "debug", &preset.debug)?;
    validate_profile(name, "release", &preset.release)?;

    for var in preset.vars.keys() {
        if var.is_empty() || var.contains(['{', '}']) {
            return Err(ConfigError::Invalid(format!(
                "Preset '{}' has an invalid variable name '{}'",
                name, var
            )));
        }
    }

    Ok(())
}

fn validate_profile(preset: &str, mode: &str, profile: &Profile) -> ConfigResult<()> {
    if profile.program.trim().is_empty() {
        return Err(ConfigError::EmptyProgram {
            preset: preset.to_string(),
            mode: mode.to_string(),
        });
    }

    for key in profile.env.keys() {
        validate_env_name(key)?;
    }

    Ok(())
}

/// An env name must be non-empty and contain neither `=` nor whitespace
pub fn validate_env_name(name: &str) -> ConfigResult<()> {
    if name.is_empty() || name.contains('=') || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvName(name.to_string()));
    }
    Ok(())
}
