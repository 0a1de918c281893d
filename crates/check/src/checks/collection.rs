//! Collection checks.
//!
//! Three small traits abstract over the standard containers: [`Len`] for
//! anything with a size, [`Contains`] for element membership and [`HasKey`]
//! for map keys.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::{Builtin, CheckKey};

// ============================================================================
// TRAITS
// ============================================================================

/// Anything with a number of elements.
pub trait Len {
    /// Number of elements (bytes, for strings).
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_len {
    ($({$($generics:tt)*} $ty:ty;)+) => {
        $(
            impl<$($generics)*> Len for $ty {
                #[inline]
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }
            }
        )+
    };
}

impl_len! {
    {} str;
    {} String;
    {T} [T];
    {T} Vec<T>;
    {T} VecDeque<T>;
    {T, S} HashSet<T, S>;
    {T} BTreeSet<T>;
    {K, V, S} HashMap<K, V, S>;
    {K, V} BTreeMap<K, V>;
}

impl<T, const N: usize> Len for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<C: Len + ?Sized> Len for &C {
    fn len(&self) -> usize {
        C::len(*self)
    }
}

/// Element membership.
pub trait Contains<E: ?Sized> {
    /// Whether `element` is present.
    fn contains_element(&self, element: &E) -> bool;
}

impl<T: PartialEq> Contains<T> for [T] {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Contains<T> for [T; N] {
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Contains<T> for VecDeque<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, Q, S> Contains<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<T, Q> Contains<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn contains_element(&self, element: &Q) -> bool {
        self.contains(element)
    }
}

impl<E: ?Sized, C: Contains<E> + ?Sized> Contains<E> for &C {
    fn contains_element(&self, element: &E) -> bool {
        C::contains_element(*self, element)
    }
}

// Owning pointers check their pointee.
macro_rules! impl_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<C: Len + ?Sized> Len for $ptr<C> {
                fn len(&self) -> usize {
                    C::len(self)
                }
            }

            impl<E: ?Sized, C: Contains<E> + ?Sized> Contains<E> for $ptr<C> {
                fn contains_element(&self, element: &E) -> bool {
                    C::contains_element(self, element)
                }
            }
        )+
    };
}

impl_pointer!(Box, Rc, Arc);

impl<B: Len + ToOwned + ?Sized> Len for Cow<'_, B> {
    fn len(&self) -> usize {
        B::len(self)
    }
}

impl<E: ?Sized, B: Contains<E> + ToOwned + ?Sized> Contains<E> for Cow<'_, B> {
    fn contains_element(&self, element: &E) -> bool {
        B::contains_element(self, element)
    }
}

/// Map key membership.
pub trait HasKey<Q: ?Sized> {
    /// Whether `key` is present.
    fn has_key(&self, key: &Q) -> bool;
}

impl<K, V, Q, S> HasKey<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V, Q> HasKey<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<Q: ?Sized, M: HasKey<Q> + ?Sized> HasKey<Q> for &M {
    fn has_key(&self, key: &Q) -> bool {
        M::has_key(*self, key)
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

fn is_empty<C: Len + ?Sized>(value: &C) -> bool {
    value.is_empty()
}

fn is_not_empty<C: Len + ?Sized>(value: &C) -> bool {
    !value.is_empty()
}

/// The collection or string has no elements.
#[must_use]
pub fn empty<C: Len + ?Sized>() -> Builtin<fn(&C) -> bool> {
    Builtin::predicate(CheckKey::EMPTY, is_empty::<C>)
}

/// The collection or string has at least one element.
#[must_use]
pub fn not_empty<C: Len + ?Sized>() -> Builtin<fn(&C) -> bool> {
    Builtin::predicate(CheckKey::NOT_EMPTY, is_not_empty::<C>)
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

fn holds<C: Contains<E> + ?Sized, E: ?Sized>(collection: &C, element: &E) -> bool {
    collection.contains_element(element)
}

fn is_in<E: ?Sized, C: Contains<E> + ?Sized>(element: &E, collection: &C) -> bool {
    collection.contains_element(element)
}

fn holds_key<M: HasKey<K> + ?Sized, K: ?Sized>(map: &M, key: &K) -> bool {
    map.has_key(key)
}

/// The collection contains the object element.
#[must_use]
pub fn contains<C: Contains<E> + ?Sized, E: ?Sized>() -> Builtin<fn(&C, &E) -> bool> {
    Builtin::relation(CheckKey::CONTAINS, holds::<C, E>)
}

/// The map contains the object key.
#[must_use]
pub fn contains_key<M: HasKey<K> + ?Sized, K: ?Sized>() -> Builtin<fn(&M, &K) -> bool> {
    Builtin::relation(CheckKey::CONTAINS_KEY, holds_key::<M, K>)
}

/// The value is an element of the object collection.
#[must_use]
pub fn element_of<E: ?Sized, C: Contains<E> + ?Sized>() -> Builtin<fn(&E, &C) -> bool> {
    Builtin::relation(CheckKey::ELEMENT_OF, is_in::<E, C>)
}
