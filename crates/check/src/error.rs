//! Error types produced by failing checks.
//!
//! A failed check never panics. It returns one of the [`CheckError`] kinds
//! below (or whatever the chain's exception factory builds), carrying the
//! fully rendered message as its `Display` text.

use std::fmt;
use std::io;

// ============================================================================
// CHECK ERROR
// ============================================================================

/// The error kinds produced by the built-in exception factories.
///
/// `Display` is always the bare message, so the error text is exactly the
/// sentence rendered for the violation:
///
/// ```rust,ignore
/// let err = Check::that_int_named(-5, "age").is(positive()).unwrap_err();
/// assert_eq!(err.to_string(), "age must be positive (was -5)");
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The value under test violated a check. The default kind.
    #[error("{0}")]
    IllegalArgument(String),

    /// The object under test is in a state that violates a check.
    #[error("{0}")]
    IllegalState(String),

    /// An index or segment lies outside its container.
    #[error("{0}")]
    IndexOutOfBounds(String),

    /// A required value was absent.
    #[error("{0}")]
    Null(String),

    /// The requested operation is not supported for the value.
    #[error("{0}")]
    Unsupported(String),

    /// A built-in check was applied to a value it cannot handle.
    #[error(transparent)]
    CorruptCheck(#[from] CorruptCheck),

    /// An I/O-flavoured violation.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CheckError {
    /// Returns the message carried by this error.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the short kind name, useful for matching in tests and logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IllegalArgument(_) => "illegal_argument",
            Self::IllegalState(_) => "illegal_state",
            Self::IndexOutOfBounds(_) => "index_out_of_bounds",
            Self::Null(_) => "null",
            Self::Unsupported(_) => "unsupported",
            Self::CorruptCheck(_) => "corrupt_check",
            Self::Io(_) => "io",
        }
    }

    /// Returns true for the default validation-failure kind.
    #[must_use]
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument(_))
    }
}

// ============================================================================
// CORRUPT CHECK
// ============================================================================

/// A built-in check was invoked against a value incompatible with it.
///
/// This is a bug in the calling code, not a property of the value under
/// test. Only catalog checks report it; closures handed to a chain never do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("corrupt check {check}: {reason}")]
pub struct CorruptCheck {
    check: &'static str,
    reason: String,
}

impl CorruptCheck {
    pub(crate) fn new(check: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            check,
            reason: reason.to_string(),
        }
    }

    /// Name of the misapplied check.
    #[must_use]
    pub fn check(&self) -> &'static str {
        self.check
    }

    /// Why the check could not be evaluated.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<CorruptCheck> for io::Error {
    fn from(err: CorruptCheck) -> Self {
        Self::new(io::ErrorKind::InvalidInput, err)
    }
}

// ============================================================================
// TESTS
// ============================================================================
