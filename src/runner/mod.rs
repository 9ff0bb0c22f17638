//! Launch engine
//!
//! This module selects the run mode, resolves the matching profile into an
//! invocation, and runs it as a child process.

pub mod command;
pub mod context;
pub mod interpolate;
pub mod invocation;
pub mod mode;
pub mod template;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use invocation::*;
pub use mode::*;
pub use template::*;
