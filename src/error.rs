//! Error types for Sentir operations.
//!
//! Provides rich error context for library consumers, split between fatal
//! artifact failures and per-request failures that the caller can recover
//! from.

use std::fmt;
use std::path::PathBuf;

/// Main error type for Sentir operations.
///
/// The dominant real-world failure in this pipeline is a numeric feature row
/// whose width disagrees with the scaler or classifier, so dimension errors
/// always carry both the expected and the actual width.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::DimensionMismatch {
///     expected: "4 numeric columns".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum SentirError {
    /// Feature widths don't match for the operation.
    DimensionMismatch {
        /// Expected width description
        expected: String,
        /// Actual width found
        actual: String,
    },

    /// A required artifact file was absent at the resolved path.
    ArtifactMissing {
        /// Absolute path that was attempted
        path: PathBuf,
    },

    /// An artifact file was present but failed to deserialize.
    ArtifactCorrupt {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying deserialization error text
        message: String,
    },

    /// Review text was empty or whitespace-only after trimming.
    EmptyInput {
        /// Field name
        field: String,
    },

    /// A form field violated its declared range.
    InvalidField {
        /// Field name
        field: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The classifier's decision call failed for any other reason.
    ///
    /// Never retried: there is no transient failure mode here, a retry would
    /// reproduce the identical deterministic error.
    PredictionFailure {
        /// Underlying message
        message: String,
    },

    /// I/O error (permission denied, read failure, etc.).
    Io(std::io::Error),

    /// Serialization error while writing artifacts.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SentirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentirError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            SentirError::ArtifactMissing { path } => {
                write!(f, "Artifact file not found: {}", path.display())
            }
            SentirError::ArtifactCorrupt { path, message } => {
                write!(
                    f,
                    "Artifact file {} failed to deserialize: {message}",
                    path.display()
                )
            }
            SentirError::EmptyInput { field } => {
                write!(f, "Empty input: {field} is empty or whitespace-only")
            }
            SentirError::InvalidField {
                field,
                value,
                constraint,
            } => {
                write!(f, "Invalid field: {field} = {value}, expected {constraint}")
            }
            SentirError::PredictionFailure { message } => {
                write!(f, "Prediction failed: {message}")
            }
            SentirError::Io(e) => write!(f, "I/O error: {e}"),
            SentirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            SentirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SentirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SentirError {
    fn from(err: std::io::Error) -> Self {
        SentirError::Io(err)
    }
}

impl From<&str> for SentirError {
    fn from(msg: &str) -> Self {
        SentirError::Other(msg.to_string())
    }
}

impl From<String> for SentirError {
    fn from(msg: String) -> Self {
        SentirError::Other(msg)
    }
}

impl SentirError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error for a named field.
    #[must_use]
    pub fn empty_input(field: &str) -> Self {
        Self::EmptyInput {
            field: field.to_string(),
        }
    }

    /// Whether this error ends the session.
    ///
    /// Artifact errors are unrecoverable startup failures; per-request errors
    /// (empty input, dimension mismatch, prediction failure) are caught at
    /// the request boundary so the next submission can proceed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SentirError::ArtifactMissing { .. }
                | SentirError::ArtifactCorrupt { .. }
                | SentirError::Io(_)
                | SentirError::Serialization(_)
        )
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentirError>;
