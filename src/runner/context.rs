//! Execution context for launching
//!
//! The context carries everything the launch needs besides the invocation itself.

use crate::ui::{status_line, Tag};
use std::env;
use std::path::PathBuf;

/// Execution context shared by the launch steps
pub struct Context {
    /// Working directory for the child process
    pub working_dir: PathBuf,

    /// Configuration file path, if one was loaded
    pub config_path: Option<PathBuf>,

    /// Print the command instead of running it
    pub dry_run: bool,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_path: None,
            dry_run: false,
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the configuration file path
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Enable or disable dry-run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print the command about to run
    pub fn print_run(&self, template: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", status_line(Tag::Run, template));
        }
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", status_line(Tag::Info, message));
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{}", status_line(Tag::Error, message));
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{}", status_line(Tag::Debug, message));
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = Context::new();
        assert_eq!(ctx.verbosity, Verbosity::Normal);
        assert!(!ctx.dry_run);
        assert!(ctx.config_path.is_none());
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
        assert!(Verbosity::Normal > Verbosity::Quiet);
        assert!(Verbosity::Quiet > Verbosity::Silent);
    }

    #[test]
    fn test_builders() {
        let ctx = Context::new()
            .with_working_dir(PathBuf::from("/tmp"))
            .with_config_path(Some(PathBuf::from("/tmp/rlaunch.yml")))
            .with_dry_run(true)
            .with_verbosity(Verbosity::Verbose);
        assert_eq!(ctx.working_dir, PathBuf::from("/tmp"));
        assert_eq!(ctx.config_path, Some(PathBuf::from("/tmp/rlaunch.yml")));
        assert!(ctx.dry_run);
        assert_eq!(ctx.verbosity, Verbosity::Verbose);
    }
}
