//! Reference identity.

use std::ptr;

use crate::foundation::{Builtin, CheckKey};

fn is_same<T: ?Sized>(a: &&T, b: &&T) -> bool {
    ptr::eq(*a, *b)
}

/// The value is the very same object as the object operand, not merely an
/// equal one. Both sides are references.
///
/// ```rust,ignore
/// Check::that_named(&config, "config").is(same_as().to(&expected))?;
/// ```
#[must_use]
pub fn same_as<'a, T: ?Sized>() -> Builtin<fn(&&'a T, &&'a T) -> bool> {
    Builtin::relation(CheckKey::SAME_AS, is_same::<T>)
}
