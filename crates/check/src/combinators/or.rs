//! OR combinator - logical disjunction of predicates
//!
//! The left predicate is evaluated first; the right one runs only when the
//! left one fails.

use crate::error::CorruptCheck;
use crate::foundation::Predicate;

/// Combines two predicates with logical OR.
///
/// # Type Parameters
///
/// * `L` - The left (first) predicate type
/// * `R` - The right (second) predicate type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) predicate.
    pub(crate) left: L,
    /// The right (second) predicate.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left predicate.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right predicate.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right predicates.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T, L, R> Predicate<T> for Or<L, R>
where
    T: ?Sized,
    L: Predicate<T>,
    R: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.left.test(value) || self.right.test(value)
    }

    fn evaluate(&self, value: &T) -> Result<bool, CorruptCheck> {
        if self.left.evaluate(value)? {
            return Ok(true);
        }
        self.right.evaluate(value)
    }
}

/// Creates an `Or` combinator from two predicates.
pub fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}
