//! Error types for file type interrogation.
//!
//! Uses thiserror for structured error types that can be converted for the
//! Python bindings. Not finding a type is not an error: detection returns
//! `Ok(None)` in that case.

use crate::definitions::DefinitionError;
use thiserror::Error;

/// Main error type for interrogator operations.
#[derive(Debug, Error)]
pub enum InterrogatorError {
    /// Missing input or an unusable setting
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero-length buffer or empty stream
    #[error("Input is empty")]
    EmptyInput,

    /// Malformed definition source; no catalog was built
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Stream or file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for interrogator operations
pub type Result<T> = std::result::Result<T, InterrogatorError>;

/// Convert interrogator errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<InterrogatorError> for pyo3::PyErr {
    fn from(err: InterrogatorError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyValueError};

        match err {
            InterrogatorError::Io(e) => PyIOError::new_err(e.to_string()),
            InterrogatorError::InvalidArgument(msg) => PyValueError::new_err(msg),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
