//! Index and length checks with an `i32` operand.

use crate::checks::Len;
use crate::foundation::{Builtin, CheckKey};

fn is_index_of<C: Len + ?Sized>(index: &i32, container: &C) -> bool {
    usize::try_from(*index).is_ok_and(|i| i < container.len())
}

fn has_len<C: Len + ?Sized>(container: &C, len: &i32) -> bool {
    usize::try_from(*len).is_ok_and(|n| container.len() == n)
}

fn has_len_at_least<C: Len + ?Sized>(container: &C, len: &i32) -> bool {
    match usize::try_from(*len) {
        Ok(n) => container.len() >= n,
        Err(_) => true,
    }
}

fn has_len_at_most<C: Len + ?Sized>(container: &C, len: &i32) -> bool {
    usize::try_from(*len).is_ok_and(|n| container.len() <= n)
}

/// The value is a valid index into the object container.
#[must_use]
pub fn index_of<C: Len + ?Sized>() -> Builtin<fn(&i32, &C) -> bool> {
    Builtin::relation(CheckKey::INDEX_OF, is_index_of::<C>)
}

/// The container's length equals the object.
#[must_use]
pub fn len_eq<C: Len + ?Sized>() -> Builtin<fn(&C, &i32) -> bool> {
    Builtin::relation(CheckKey::LEN_EQ, has_len::<C>)
}

/// The container's length is at least the object.
#[must_use]
pub fn len_gte<C: Len + ?Sized>() -> Builtin<fn(&C, &i32) -> bool> {
    Builtin::relation(CheckKey::LEN_GTE, has_len_at_least::<C>)
}

/// The container's length is at most the object.
#[must_use]
pub fn len_lte<C: Len + ?Sized>() -> Builtin<fn(&C, &i32) -> bool> {
    Builtin::relation(CheckKey::LEN_LTE, has_len_at_most::<C>)
}
