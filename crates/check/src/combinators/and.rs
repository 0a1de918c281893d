//! AND combinator - logical conjunction of predicates
//!
//! The left predicate is evaluated first; the right one runs only when the
//! left one holds.

use crate::error::CorruptCheck;
use crate::foundation::Predicate;

/// Combines two predicates with logical AND.
///
/// # Type Parameters
///
/// * `L` - The left (first) predicate type
/// * `R` - The right (second) predicate type
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_check::combinators::And;
///
/// let teen = And::new(gte().to(13), lt().to(20));
/// assert!(teen.test(&15));
/// assert!(!teen.test(&21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) predicate.
    pub(crate) left: L,
    /// The right (second) predicate.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<T, L, R> Predicate<T> for And<L, R>
where
    T: ?Sized,
    L: Predicate<T>,
    R: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.left.test(value) && self.right.test(value)
    }

    fn evaluate(&self, value: &T) -> Result<bool, CorruptCheck> {
        if !self.left.evaluate(value)? {
            return Ok(false);
        }
        self.right.evaluate(value)
    }
}

/// Creates an `And` combinator from two predicates.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
