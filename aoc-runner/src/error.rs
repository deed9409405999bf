//! Error types for the runner library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a module for a day that already has one
    #[error("Duplicate day module registration for day {0}")]
    DuplicateDay(u8),
    /// Day number outside the calendar (1-25)
    #[error("Day {0} is out of range (expected 1-25)")]
    InvalidDay(u8),
}

/// Error type for a failed solution write
///
/// Carried inside [`crate::WriteOutcome::Failed`]; never raised to callers.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination file could not be opened for writing
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the solution text failed partway through
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
