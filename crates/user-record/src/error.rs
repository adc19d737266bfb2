//! Error types for the user-record crate.
//!
//! Record construction and JSON handling share a single semantic error enum.
//! Foreign error types are flattened into owned messages so the enum stays
//! `Clone` and comparable in tests.

use thiserror::Error;

/// Errors that can occur when building, parsing, or serialising a
/// [`UserRecord`](crate::UserRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was empty or whitespace-only.
    #[error("user record field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The JSON document is malformed or does not have the record shape.
    #[error("invalid user record JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The record could not be written as JSON.
    #[error("failed to serialise user record: {message}")]
    SerializeError {
        /// Description of the serialisation error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        RecordError::EmptyField { field: "name" },
        "user record field 'name' must not be empty"
    )]
    #[case(
        RecordError::ParseError { message: "missing field `id`".to_owned() },
        "invalid user record JSON: missing field `id`"
    )]
    #[case(
        RecordError::SerializeError { message: "boom".to_owned() },
        "failed to serialise user record: boom"
    )]
    fn record_error_formats_correctly(#[case] err: RecordError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
