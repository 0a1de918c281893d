//! NOT combinator - logical negation of a check
//!
//! [`Not`] wraps either a [`Predicate`] or a [`Relation`] and inverts its
//! outcome. It is the value produced by `negate()`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_check::combinators::Not;
//!
//! let odd = Not::new(even());
//! assert!(odd.test(&3));
//! ```

use crate::error::CorruptCheck;
use crate::foundation::{Predicate, Relation};

/// Inverts a check with logical NOT.
///
/// # Type Parameters
///
/// * `C` - The inner check type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C> {
    /// The inner check to invert.
    pub(crate) inner: C,
}

impl<C> Not<C> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner check.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner check.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Predicate<T> for Not<C>
where
    T: ?Sized,
    C: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }

    fn evaluate(&self, value: &T) -> Result<bool, CorruptCheck> {
        self.inner.evaluate(value).map(|holds| !holds)
    }
}

impl<S, O, C> Relation<S, O> for Not<C>
where
    S: ?Sized,
    O: ?Sized,
    C: Relation<S, O>,
{
    fn exists(&self, subject: &S, object: &O) -> bool {
        !self.inner.exists(subject, object)
    }

    fn evaluate(&self, subject: &S, object: &O) -> Result<bool, CorruptCheck> {
        self.inner.evaluate(subject, object).map(|holds| !holds)
    }
}

/// Creates a `Not` combinator.
pub fn not<C>(inner: C) -> Not<C> {
    Not::new(inner)
}
