//! JavaScript error types raised by the value layer.
//!
//! Two families live here:
//! - [`JsError`]: guest-visible conditions (type and reference errors) that
//!   the evaluator turns into catchable exceptions.
//! - [`AccountingError`]: failures of the diagnostic memory accounting walk.
//!
//! Contract violations are neither; they go through [`contract_violation`]
//! and abort.

use std::fmt;

use thiserror::Error;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors that the
/// value layer can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Type error (e.g. converting a Symbol to a number)
    TypeError,
    /// Reference to a binding that was never resolved
    ReferenceError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeError => write!(f, "TypeError"),
            ErrorKind::ReferenceError => write!(f, "ReferenceError"),
        }
    }
}

/// A recoverable JavaScript error.
///
/// # Examples
///
/// ```
/// use js_value::{ErrorKind, JsError};
///
/// let error = JsError::type_error("Cannot convert a Symbol value to a number");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(
///     error.to_string(),
///     "TypeError: Cannot convert a Symbol value to a number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a ReferenceError for an unresolved binding name.
    pub fn reference_error(name: &str) -> Self {
        JsError::new(ErrorKind::ReferenceError, format!("{} is not defined", name))
    }

    /// Returns true if this is a TypeError.
    pub fn is_type_error(&self) -> bool {
        self.kind == ErrorKind::TypeError
    }

    /// Returns true if this is a ReferenceError.
    pub fn is_reference_error(&self) -> bool {
        self.kind == ErrorKind::ReferenceError
    }
}

/// Result type for value-layer operations
pub type JsResult<T> = Result<T, JsError>;

/// Failure of a memory accounting walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountingError {
    /// The object graph nests deeper than the context allows.
    #[error("object graph exceeds the accounting depth limit of {limit}")]
    DepthLimitExceeded {
        /// Configured limit
        limit: usize,
    },
    /// The native-size lookup for a wrapped host resource failed.
    #[error("native size lookup failed: {0}")]
    NativeLookup(String),
}

/// Abort on a caller bug in the consuming layer.
///
/// These are never guest-visible: hashing or exporting a property slot, or
/// hashing an unresolved reference.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(what: &str) -> ! {
    tracing::error!(violation = what, "value layer contract violation");
    panic!("{}", what)
}
