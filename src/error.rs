//! Error types for rlaunch

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rlaunch operations
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Main error type for rlaunch
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Child process errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Placeholder substitution errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LaunchError {
    /// Exit code the launcher should terminate with.
    ///
    /// A child that exited with a code passes it through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Execution(ExecutionError::CommandFailed(Some(code))) => *code,
            _ => 1,
        }
    }

    /// Whether the error was already printed through the launch context.
    ///
    /// Child process failures are reported at `Quiet` verbosity and above, so `main`
    /// must not print them a second time.
    pub fn is_reported(&self) -> bool {
        matches!(self, LaunchError::Execution(_))
    }
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Preset '{0}' is not defined")]
    PresetNotFound(String),

    #[error("Preset '{preset}' has an empty program in its {mode} profile")]
    EmptyProgram { preset: String, mode: String },

    #[error("Invalid environment variable name '{0}'")]
    InvalidEnvName(String),

    #[error("Preset '{0}' defines no debug flags")]
    NoDebugFlags(String),

    #[error("Invalid variable assignment '{0}' (expected KEY=VALUE)")]
    InvalidVar(String),

    #[error("Failed to read config file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Child process errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to launch '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Command failed with {}", describe_exit(.0))]
    CommandFailed(Option<i32>),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Placeholder substitution errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Invalid interpolation syntax: {0}")]
    InvalidSyntax(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;
