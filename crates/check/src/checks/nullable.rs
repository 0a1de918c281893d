//! Presence checks for `Option` values.
//!
//! `None` is the absent value; the messages call it `null`.

use crate::foundation::{Builtin, CheckKey};

fn is_none<U>(value: &Option<U>) -> bool {
    value.is_none()
}

fn is_some<U>(value: &Option<U>) -> bool {
    value.is_some()
}

/// The value is `None`.
#[must_use]
pub fn null<U>() -> Builtin<fn(&Option<U>) -> bool> {
    Builtin::predicate(CheckKey::NULL, is_none::<U>)
}

/// The value is `Some`.
///
/// Used on a chain this fails with the chain's own error kind. Use
/// [`Check::not_null`](crate::chain::Check::not_null) to reject `None` with
/// [`CheckError::Null`](crate::error::CheckError::Null) instead.
#[must_use]
pub fn not_null<U>() -> Builtin<fn(&Option<U>) -> bool> {
    Builtin::predicate(CheckKey::NOT_NULL, is_some::<U>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Predicate;

    #[test]
    fn test_null() {
        assert!(null().test(&None::<i32>));
        assert!(!null().test(&Some(1)));
    }

    #[test]
    fn test_not_null() {
        assert!(not_null().test(&Some("x")));
        assert!(!not_null().test(&None::<&str>));
        assert_ne!(
            Predicate::<Option<u8>>::key(&not_null()),
            Predicate::<Option<u8>>::key(&null())
        );
    }
}
