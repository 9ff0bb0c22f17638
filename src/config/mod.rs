//! Configuration parsing and validation
//!
//! This module handles parsing of rlaunch.yml configuration files,
//! the built-in presets, and validation of configuration structure.

pub mod parse;
pub mod presets;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use presets::*;
pub use schema::*;
pub use types::*;
