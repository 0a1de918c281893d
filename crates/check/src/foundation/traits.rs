//! Check shapes.
//!
//! Two traits carry all behaviour: [`Predicate`] (one operand) and
//! [`Relation`] (subject and object). The integer shapes are named
//! refinements of those two, so that an `i32` check reads as what it is in
//! signatures without introducing a second set of methods.

use std::fmt::Debug;

use crate::combinators::{And, Bound, Converse, Not, Or};
use crate::error::CorruptCheck;
use crate::foundation::{CheckKey, PropertyKey};

// ============================================================================
// PREDICATE
// ============================================================================

/// A test of a single value.
///
/// Implemented for every `Fn(&T) -> bool`, and for the checks returned by
/// the catalog factories in [`crate::checks`].
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_check::prelude::*;
///
/// let short = |s: &&str| s.len() < 8;
/// assert!(short.test(&"abc"));
/// assert!(!short.negate().test(&"abc"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns whether `value` satisfies the predicate.
    fn test(&self, value: &T) -> bool;

    /// Evaluates the predicate, reporting misuse of a built-in check.
    ///
    /// Only catalog checks override this.
    fn evaluate(&self, value: &T) -> Result<bool, CorruptCheck> {
        Ok(self.test(value))
    }

    /// The identity of this check in the registry, if it has one.
    fn key(&self) -> Option<CheckKey> {
        None
    }

    /// The object operand a relation was bound to.
    fn operand(&self) -> Option<Operand<'_>> {
        None
    }

    /// Returns a predicate that holds exactly when this one does not.
    ///
    /// The negation is a new, unregistered check. Prefer
    /// `is_not(check)` on a chain, which keeps the built-in message.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Short-circuiting conjunction; `other` runs only if `self` holds.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And::new(self, other)
    }

    /// Short-circuiting disjunction; `other` runs only if `self` fails.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or::new(self, other)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A borrowed object operand together with its type name.
#[derive(Clone, Copy)]
pub struct Operand<'a> {
    /// The operand itself.
    pub value: &'a dyn Debug,
    /// Full type name of the operand.
    pub type_name: &'static str,
}

impl<'a> Operand<'a> {
    /// Borrows `value` as an operand.
    pub fn of<O: Debug>(value: &'a O) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<O>(),
        }
    }
}

impl Debug for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

// ============================================================================
// RELATION
// ============================================================================

/// A relationship between a subject (the value under test) and an object.
///
/// A relation is applied to a chain by binding its object with
/// [`to`](Relation::to), which yields a [`Predicate`] on the subject:
///
/// ```rust,ignore
/// Check::that_named(list, "items").has(len(), gte().to(3))?;
/// ```
pub trait Relation<S: ?Sized, O: ?Sized> {
    /// Returns whether the relation holds between `subject` and `object`.
    fn exists(&self, subject: &S, object: &O) -> bool;

    /// Evaluates the relation, reporting misuse of a built-in check.
    fn evaluate(&self, subject: &S, object: &O) -> Result<bool, CorruptCheck> {
        Ok(self.exists(subject, object))
    }

    /// The identity of this check in the registry, if it has one.
    fn key(&self) -> Option<CheckKey> {
        None
    }

    /// Binds the object operand, producing a predicate on the subject.
    fn to(self, object: O) -> Bound<Self, O>
    where
        Self: Sized,
        O: Sized,
    {
        Bound::new(self, object)
    }

    /// Returns a relation that holds exactly when this one does not.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Swaps the subject and object roles.
    fn converse(self) -> Converse<Self>
    where
        Self: Sized,
    {
        Converse::new(self)
    }
}

impl<S: ?Sized, O: ?Sized, F> Relation<S, O> for F
where
    F: Fn(&S, &O) -> bool,
{
    #[inline]
    fn exists(&self, subject: &S, object: &O) -> bool {
        self(subject, object)
    }
}

// ============================================================================
// INTEGER SHAPES
// ============================================================================

/// A predicate on `i32`, the shape [`IntCheck`](crate::chain::IntCheck) accepts.
pub trait IntPredicate: Predicate<i32> {}

impl<P: Predicate<i32> + ?Sized> IntPredicate for P {}

/// A relation between two `i32` values.
pub trait IntRelation: Relation<i32, i32> {}

impl<R: Relation<i32, i32> + ?Sized> IntRelation for R {}

/// A relation between an `i32` subject and an object of any type.
pub trait IntObjRelation<O: ?Sized>: Relation<i32, O> {}

impl<O: ?Sized, R: Relation<i32, O> + ?Sized> IntObjRelation<O> for R {}

/// A relation between a subject of any type and an `i32` object.
pub trait ObjIntRelation<S: ?Sized>: Relation<S, i32> {}

impl<S: ?Sized, R: Relation<S, i32> + ?Sized> ObjIntRelation<S> for R {}

// ============================================================================
// PROPERTY
// ============================================================================

/// A pure transform from the value under test to a derived value.
///
/// `has(property, check)` applies `check` to the derived value. Built-in
/// properties carry a [`PropertyKey`] so the failure message can name the
/// derived value (`items.len()`); closures are named generically.
pub trait Property<T: ?Sized> {
    /// The derived value type.
    type Output;

    /// Extracts the derived value.
    fn extract(&self, value: &T) -> Self::Output;

    /// The identity of this property in the registry, if it has one.
    fn key(&self) -> Option<PropertyKey> {
        None
    }
}

impl<T: ?Sized, V, F> Property<T> for F
where
    F: Fn(&T) -> V,
{
    type Output = V;

    #[inline]
    fn extract(&self, value: &T) -> V {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_predicates() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.test(&4));
        assert!(!even.test(&3));
        assert_eq!(Predicate::key(&even), None);
        assert!(even.evaluate(&4).is_ok());
    }

    #[test]
    fn closures_are_relations() {
        let divides = |a: &i32, b: &i32| b % a == 0;
        assert!(divides.exists(&3, &9));
        assert!(!divides.exists(&2, &9));
        assert!(divides.converse().exists(&9, &3));
    }

    #[test]
    fn closures_are_properties() {
        let doubled = |n: &i32| n * 2;
        assert_eq!(doubled.extract(&21), 42);
        assert_eq!(Property::key(&doubled), None);
    }

    fn takes_int_predicate<P: IntPredicate>(p: &P, value: i32) -> bool {
        p.test(&value)
    }

    #[test]
    fn int_shapes_are_refinements() {
        assert!(takes_int_predicate(&|n: &i32| *n > 0, 1));
        assert!(takes_int_predicate(&Relation::to(|a: &i32, b: &i32| a > b, 0), 1));
    }
}
