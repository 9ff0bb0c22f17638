//! Debug/release mode selection

use crate::config::{Preset, Profile};
use std::fmt;

/// The two mutually exclusive run configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debug,
    Release,
}

impl Mode {
    /// The profile a preset uses for this mode
    pub fn profile(self, preset: &Preset) -> &Profile {
        match self {
            Mode::Debug => &preset.debug,
            Mode::Release => &preset.release,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Debug => write!(f, "debug"),
            Mode::Release => write!(f, "release"),
        }
    }
}

/// Select the mode from the launcher's arguments (program name excluded).
///
/// Only the first argument is inspected. It selects debug when it equals one of
/// `debug_flags`; anything else, including no arguments at all, selects release.
pub fn select_mode<S: AsRef<str>>(args: &[S], debug_flags: &[String]) -> Mode {
    match args.first() {
        Some(first) if debug_flags.iter().any(|f| f == first.as_ref()) => Mode::Debug,
        _ => Mode::Release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets::{short, standard};

    #[test]
    fn test_long_debug_flag() {
        let flags = standard().debug_flags;
        assert_eq!(select_mode(&["--debug"], &flags), Mode::Debug);
    }

    #[test]
    fn test_short_debug_flag() {
        let flags = standard().debug_flags;
        assert_eq!(select_mode(&["-D"], &flags), Mode::Debug);
    }

    #[test]
    fn test_no_arguments_is_release() {
        let flags = standard().debug_flags;
        let args: [&str; 0] = [];
        assert_eq!(select_mode(&args, &flags), Mode::Release);
    }

    #[test]
    fn test_other_value_is_release() {
        let flags = standard().debug_flags;
        assert_eq!(select_mode(&["--release"], &flags), Mode::Release);
        assert_eq!(select_mode(&["-d"], &flags), Mode::Release);
        assert_eq!(select_mode(&["debug"], &flags), Mode::Release);
    }

    #[test]
    fn test_only_first_argument_counts() {
        let flags = standard().debug_flags;
        assert_eq!(select_mode(&["-v", "--debug"], &flags), Mode::Release);
        assert_eq!(select_mode(&["--debug", "anything"], &flags), Mode::Debug);
    }

    #[test]
    fn test_keyword_preset() {
        let flags = short().debug_flags;
        assert_eq!(select_mode(&["debug"], &flags), Mode::Debug);
        assert_eq!(select_mode(&["--debug"], &flags), Mode::Release);
        assert_eq!(select_mode(&["-D"], &flags), Mode::Release);
    }

    #[test]
    fn test_mode_picks_profile() {
        let preset = standard();
        assert_eq!(Mode::Debug.profile(&preset), &preset.debug);
        assert_eq!(Mode::Release.profile(&preset), &preset.release);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Debug.to_string(), "debug");
        assert_eq!(Mode::Release.to_string(), "release");
    }
}
