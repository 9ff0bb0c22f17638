//! Core configuration types
//!
//! This module defines the data structures that represent an rlaunch.yml configuration file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the preset used when neither the CLI nor the config picks one
pub const DEFAULT_PRESET: &str = "standard";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Preset to use when `--preset` is not given
    #[serde(
        rename = "default-preset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_preset: Option<String>,

    /// Presets defined in the configuration, keyed by name
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

impl Config {
    /// Name of the preset to use when none is requested explicitly
    pub fn default_preset_name(&self) -> &str {
        self.default_preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }
}

/// A named debug/release profile pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preset {
    /// Usage description for `--list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// First-argument values that select the debug profile
    #[serde(rename = "debug-flags", default = "default_debug_flags")]
    pub debug_flags: Vec<String>,

    /// Default values for `${name}` placeholders in profile args
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, String>,

    /// Profile used in debug mode
    pub debug: Profile,

    /// Profile used in release mode
    pub release: Profile,
}

/// The structured form of one command template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Executable to launch
    pub program: String,

    /// Arguments passed to the executable, may contain `${name}` placeholders
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Environment variables set on the child only
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

fn default_debug_flags() -> Vec<String> {
    vec!["--debug".to_string(), "-D".to_string()]
}
