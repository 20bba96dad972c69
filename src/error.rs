//! Error types for clasificar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for clasificar operations.
///
/// # Examples
///
/// ```
/// use clasificar::error::ClasificarError;
///
/// let err = ClasificarError::CategoryNotFound {
///     category: "Spam".to_string(),
/// };
/// assert!(err.to_string().contains("Spam"));
/// ```
#[derive(Debug)]
pub enum ClasificarError {
    /// Training or untraining referenced a category that does not exist
    /// while auto-categorization is disabled.
    CategoryNotFound {
        /// The unresolved category name
        category: String,
    },

    /// The requested capability is not defined for the engine's
    /// configuration.
    UnsupportedOperation {
        /// Description of the unavailable operation
        operation: String,
    },

    /// A snapshot document is malformed or incompatible.
    Snapshot {
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ClasificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClasificarError::CategoryNotFound { category } => {
                write!(f, "Category not found: {category}")
            }
            ClasificarError::UnsupportedOperation { operation } => {
                write!(f, "Unsupported operation: {operation}")
            }
            ClasificarError::Snapshot { message } => {
                write!(f, "Invalid snapshot: {message}")
            }
            ClasificarError::Io(e) => write!(f, "I/O error: {e}"),
            ClasificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ClasificarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClasificarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClasificarError {
    fn from(err: std::io::Error) -> Self {
        ClasificarError::Io(err)
    }
}

impl From<&str> for ClasificarError {
    fn from(msg: &str) -> Self {
        ClasificarError::Other(msg.to_string())
    }
}

impl From<String> for ClasificarError {
    fn from(msg: String) -> Self {
        ClasificarError::Other(msg)
    }
}

/// Convenience result type for clasificar operations.
pub type Result<T> = std::result::Result<T, ClasificarError>;
