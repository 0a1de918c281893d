//! Keyed wrappers for the built-in catalog.
//!
//! A [`Builtin`] is a plain function pointer stamped with a [`CheckKey`].
//! Catalog factories return a fresh `Builtin` on every call, but the key is
//! the same every time, which is all the registry needs.

use std::fmt;

use crate::combinators::{Bound, Not};
use crate::error::CorruptCheck;
use crate::foundation::{CheckKey, Predicate, PropertyKey, Property, Relation};

// ============================================================================
// BUILTIN CHECK
// ============================================================================

/// A built-in check: a function pointer plus its registry identity.
#[derive(Clone, Copy)]
pub struct Builtin<F> {
    key: CheckKey,
    f: F,
}

impl<F> Builtin<F> {
    /// The identity of this check.
    #[must_use]
    pub const fn id(&self) -> CheckKey {
        self.key
    }

    /// Binds the object operand of a built-in relation.
    ///
    /// Same as [`Relation::to`], callable without naming operand types.
    pub fn to<O>(self, object: O) -> Bound<Self, O> {
        Bound::new(self, object)
    }

    /// Returns the unregistered negation of this check.
    pub fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<F> fmt::Debug for Builtin<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.key, f)
    }
}

impl<T: ?Sized> Builtin<fn(&T) -> bool> {
    pub(crate) const fn predicate(key: CheckKey, f: fn(&T) -> bool) -> Self {
        Self { key, f }
    }
}

impl<S: ?Sized, O: ?Sized> Builtin<fn(&S, &O) -> bool> {
    pub(crate) const fn relation(key: CheckKey, f: fn(&S, &O) -> bool) -> Self {
        Self { key, f }
    }
}

impl<S: ?Sized, O: ?Sized> Builtin<fn(&S, &O) -> Result<bool, CorruptCheck>> {
    pub(crate) const fn fallible(
        key: CheckKey,
        f: fn(&S, &O) -> Result<bool, CorruptCheck>,
    ) -> Self {
        Self { key, f }
    }
}

impl<T: ?Sized> Predicate<T> for Builtin<fn(&T) -> bool> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        (self.f)(value)
    }

    fn key(&self) -> Option<CheckKey> {
        Some(self.key)
    }
}

impl<S: ?Sized, O: ?Sized> Relation<S, O> for Builtin<fn(&S, &O) -> bool> {
    #[inline]
    fn exists(&self, subject: &S, object: &O) -> bool {
        (self.f)(subject, object)
    }

    fn key(&self) -> Option<CheckKey> {
        Some(self.key)
    }
}

impl<S: ?Sized, O: ?Sized> Relation<S, O> for Builtin<fn(&S, &O) -> Result<bool, CorruptCheck>> {
    /// Misuse counts as "does not hold"; chains use [`evaluate`](Relation::evaluate).
    fn exists(&self, subject: &S, object: &O) -> bool {
        (self.f)(subject, object).unwrap_or(false)
    }

    fn evaluate(&self, subject: &S, object: &O) -> Result<bool, CorruptCheck> {
        (self.f)(subject, object).inspect_err(|err| {
            tracing::trace!(check = ?self.key, reason = err.reason(), "built-in check misused");
        })
    }

    fn key(&self) -> Option<CheckKey> {
        Some(self.key)
    }
}

// ============================================================================
// BUILTIN PROPERTY
// ============================================================================

/// A built-in property extractor stamped with its [`PropertyKey`].
#[derive(Clone, Copy)]
pub struct Extractor<F> {
    key: PropertyKey,
    f: F,
}

impl<F> fmt::Debug for Extractor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.key, f)
    }
}

impl<T: ?Sized, V> Extractor<fn(&T) -> V> {
    pub(crate) const fn new(key: PropertyKey, f: fn(&T) -> V) -> Self {
        Self { key, f }
    }
}

impl<T: ?Sized, V> Property<T> for Extractor<fn(&T) -> V> {
    type Output = V;

    #[inline]
    fn extract(&self, value: &T) -> V {
        (self.f)(value)
    }

    fn key(&self) -> Option<PropertyKey> {
        Some(self.key)
    }
}
