//! Error types for secret-santa
//!
//! Every failure a draw can hit is a [`SantaError`]. The CLI catches all of
//! them and reports `Error: <message>`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a roster or drawing pairs
#[derive(Debug, Error)]
pub enum SantaError {
    /// An input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fewer than two participants were supplied
    #[error("At least two participants are required for Secret Santa.")]
    InsufficientParticipants {
        /// How many participants were supplied
        count: usize,
    },

    /// No valid draw was found within the attempt budget
    #[error(
        "Failed to assign Secret Santa pairs without conflicts after {attempts} attempts."
    )]
    AssignmentExhausted {
        /// How many attempts were made
        attempts: u32,
    },

    /// An exclusion line did not contain exactly two names
    #[error("invalid exclusion on line {line}: expected `giver,receiver`, found {fields} field(s)")]
    MalformedExclusion {
        /// 1-based line number in the exclusion file
        line: usize,
        /// Number of non-empty fields found on the line
        fields: usize,
    },

    /// The settings file was unreadable or invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for secret-santa operations
pub type Result<T, E = SantaError> = std::result::Result<T, E>;
