//! Role swap for relations.

use crate::error::CorruptCheck;
use crate::foundation::Relation;

/// A relation with subject and object swapped.
///
/// `Converse(r).exists(s, o) == r.exists(o, s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converse<R> {
    pub(crate) inner: R,
}

impl<R> Converse<R> {
    /// Creates a new `Converse` combinator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Extracts the original relation.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<S, O, R> Relation<S, O> for Converse<R>
where
    S: ?Sized,
    O: ?Sized,
    R: Relation<O, S>,
{
    fn exists(&self, subject: &S, object: &O) -> bool {
        self.inner.exists(object, subject)
    }

    fn evaluate(&self, subject: &S, object: &O) -> Result<bool, CorruptCheck> {
        self.inner.evaluate(object, subject)
    }
}
