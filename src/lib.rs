//! rlaunch - a debug/release launcher for cargo projects
//!
//! rlaunch picks a debug or release profile from the first command-line argument,
//! resolves it into a concrete command line, and runs it as a single child process.
//! Profiles come from built-in presets or an `rlaunch.yml` file.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{LaunchError, Result};

/// Current version of rlaunch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
