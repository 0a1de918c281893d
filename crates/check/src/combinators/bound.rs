//! A relation with its object operand fixed.

use std::fmt::Debug;

use crate::error::CorruptCheck;
use crate::foundation::{CheckKey, Operand, Predicate, Relation};

/// A [`Relation`] bound to a concrete object, usable wherever a
/// [`Predicate`] on the subject is expected.
///
/// The binding keeps the relation's identity so the failure message of a
/// built-in relation still resolves, and it exposes the object through
/// [`Predicate::operand`] for rendering.
///
/// # Examples
///
/// ```rust,ignore
/// let at_least_three = gte().to(3);
/// assert!(at_least_three.test(&5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound<R, O> {
    pub(crate) relation: R,
    pub(crate) object: O,
}

impl<R, O> Bound<R, O> {
    /// Binds `object` as the second operand of `relation`.
    pub fn new(relation: R, object: O) -> Self {
        Self { relation, object }
    }

    /// The bound object operand.
    pub fn object(&self) -> &O {
        &self.object
    }

    /// The underlying relation.
    pub fn relation(&self) -> &R {
        &self.relation
    }
}

impl<S, O, R> Predicate<S> for Bound<R, O>
where
    S: ?Sized,
    O: Debug,
    R: Relation<S, O>,
{
    #[inline]
    fn test(&self, value: &S) -> bool {
        self.relation.exists(value, &self.object)
    }

    fn evaluate(&self, value: &S) -> Result<bool, CorruptCheck> {
        self.relation.evaluate(value, &self.object)
    }

    fn key(&self) -> Option<CheckKey> {
        self.relation.key()
    }

    fn operand(&self) -> Option<Operand<'_>> {
        Some(Operand::of(&self.object))
    }
}
