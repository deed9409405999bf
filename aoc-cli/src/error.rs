//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
///
/// Only configuration and registration problems are fatal; input and
/// output failures inside the pipeline never surface here.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
