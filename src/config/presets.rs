//! Built-in presets
//!
//! `standard` runs the visual agent with a 3000 step budget redrawn every 70ms.
//! `short` runs 1000 steps at the program's default redraw interval and is
//! switched to debug with the bare `debug` keyword.

use crate::config::types::{Config, Preset, Profile};
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn backtrace_env() -> BTreeMap<String, String> {
    BTreeMap::from([("RUST_BACKTRACE".to_string(), "1".to_string())])
}

fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The `--debug` / `-D` preset
pub fn standard() -> Preset {
    Preset {
        usage: Some("Visual run, 3000 steps, 70ms redraw interval".to_string()),
        debug_flags: strings(&["--debug", "-D"]),
        vars: vars(&[
            ("debug_file", "debug.txt"),
            ("level", "trace"),
            ("maxloop", "3000"),
            ("interval", "70"),
        ]),
        debug: Profile {
            program: "cargo".to_string(),
            args: strings(&[
                "run",
                "--",
                "--debug",
                "${debug_file}",
                "--level",
                "${level}",
                "--vis",
                "--maxloop",
                "${maxloop}",
                "--interval",
                "${interval}",
            ]),
            env: backtrace_env(),
        },
        release: Profile {
            program: "cargo".to_string(),
            args: strings(&[
                "run",
                "--release",
                "--",
                "--vis",
                "--maxloop",
                "${maxloop}",
                "--interval",
                "${interval}",
            ]),
            env: BTreeMap::new(),
        },
    }
}

/// The `debug` keyword preset
pub fn short() -> Preset {
    Preset {
        usage: Some("Visual run, 1000 steps".to_string()),
        debug_flags: strings(&["debug"]),
        vars: vars(&[
            ("debug_file", "debug.txt"),
            ("level", "trace"),
            ("maxloop", "1000"),
        ]),
        debug: Profile {
            program: "cargo".to_string(),
            args: strings(&[
                "run",
                "--",
                "--debug",
                "${debug_file}",
                "--level",
                "${level}",
                "--vis",
                "--maxloop",
                "${maxloop}",
            ]),
            env: backtrace_env(),
        },
        release: Profile {
            program: "cargo".to_string(),
            args: strings(&["run", "--release", "--", "--vis", "--maxloop", "${maxloop}"]),
            env: BTreeMap::new(),
        },
    }
}

/// Configuration holding only the built-in presets
pub fn builtin_config() -> Config {
    let mut config = Config::default();
    config.presets.insert("standard".to_string(), standard());
    config.presets.insert("short".to_string(), short());
    config
}

/// Merge a user configuration over the built-ins.
///
/// User presets replace built-ins of the same name.
pub fn merge_with_builtins(user: Config) -> Config {
    let mut merged = builtin_config();
    merged.default_preset = user.default_preset;
    merged.presets.extend(user.presets);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_has_both_presets() {
        let config = builtin_config();
        assert!(config.presets.contains_key("standard"));
        assert!(config.presets.contains_key("short"));
        assert_eq!(config.default_preset_name(), "standard");
    }

    #[test]
    fn test_short_preset_has_no_interval() {
        let preset = short();
        assert!(!preset.vars.contains_key("interval"));
        assert!(!preset.release.args.iter().any(|a| a == "--interval"));
    }

    #[test]
    fn test_merge_overrides_by_name() {
        let mut user = Config::default();
        let mut custom = standard();
        custom.vars.insert("maxloop".to_string(), "50".to_string());
        user.presets.insert("standard".to_string(), custom);
        user.default_preset = Some("short".to_string());

        let merged = merge_with_builtins(user);
        assert_eq!(merged.presets.len(), 2);
        assert_eq!(merged.default_preset_name(), "short");
        assert_eq!(
            merged.presets["standard"].vars.get("maxloop").map(String::as_str),
            Some("50")
        );
    }
}
