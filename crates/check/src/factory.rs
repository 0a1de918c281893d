//! Exception factories.
//!
//! A chain turns every rendered message into an error through an
//! [`ExceptionFactory`]. Any `Fn(String) -> E` is one, so a tuple-variant
//! constructor or `std::io::Error::other::<String>` can be passed directly.
//! The functions below cover the built-in [`CheckError`] kinds.
//!
//! ```rust,ignore
//! Check::on(factory::illegal_state, &path).is(writable())?;
//! Check::on(MyError::Invalid, input).is(not_blank())?;
//! ```

use std::io;

use crate::error::CheckError;

/// Builds the error returned by a failed check from its message.
pub trait ExceptionFactory {
    /// The error type produced.
    type Error;

    /// Creates the error for `message`.
    fn create(&self, message: String) -> Self::Error;
}

impl<E, F> ExceptionFactory for F
where
    F: Fn(String) -> E,
{
    type Error = E;

    #[inline]
    fn create(&self, message: String) -> E {
        self(message)
    }
}

/// The default factory of every chain.
pub type DefaultFactory = fn(String) -> CheckError;

/// [`CheckError::IllegalArgument`].
#[must_use]
pub fn illegal_argument(message: String) -> CheckError {
    CheckError::IllegalArgument(message)
}

/// [`CheckError::IllegalState`].
#[must_use]
pub fn illegal_state(message: String) -> CheckError {
    CheckError::IllegalState(message)
}

/// [`CheckError::IndexOutOfBounds`].
#[must_use]
pub fn index_out_of_bounds(message: String) -> CheckError {
    CheckError::IndexOutOfBounds(message)
}

/// [`CheckError::Null`].
#[must_use]
pub fn null(message: String) -> CheckError {
    CheckError::Null(message)
}

/// [`CheckError::Unsupported`].
#[must_use]
pub fn unsupported(message: String) -> CheckError {
    CheckError::Unsupported(message)
}

/// [`CheckError::Io`] wrapping an [`io::ErrorKind::Other`] error.
#[must_use]
pub fn io(message: String) -> CheckError {
    CheckError::Io(io::Error::other(message))
}
