//! Error types for the user-record CLI.

use thiserror::Error;

use crate::error::RecordError;

/// Errors surfaced while building or printing the CLI record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// An override produced an invalid record.
    #[error("user record error: {source}")]
    RecordError {
        /// Underlying record error.
        #[from]
        #[source]
        source: RecordError,
    },
    /// Writing the rendered record failed.
    #[error("failed to write output: {message}")]
    WriteError {
        /// Description of the I/O failure.
        message: String,
    },
}
