//! Built-in property extractors for `has`.
//!
//! A property derives a value from the value under test; the chain then
//! checks the derived value. The extractors here are registered, so a failed
//! `has(len(), ..)` on `items` is reported against `items.len()`.

use crate::checks::{Len, Signed};
use crate::foundation::{Extractor, PropertyKey};

fn length<C: Len + ?Sized>(value: &C) -> usize {
    value.len()
}

fn chars<S: AsRef<str> + ?Sized>(value: &S) -> usize {
    value.as_ref().chars().count()
}

fn magnitude<N: Signed>(value: &N) -> N::Magnitude {
    value.magnitude()
}

fn trimmed<S: AsRef<str> + ?Sized>(value: &S) -> String {
    value.as_ref().trim().to_owned()
}

/// Number of elements; bytes for strings.
#[must_use]
pub fn len<C: Len + ?Sized>() -> Extractor<fn(&C) -> usize> {
    Extractor::new(PropertyKey::LEN, length::<C>)
}

/// Number of `char`s in a string.
#[must_use]
pub fn char_count<S: AsRef<str> + ?Sized>() -> Extractor<fn(&S) -> usize> {
    Extractor::new(PropertyKey::CHAR_COUNT, chars::<S>)
}

/// Absolute value. Integers yield their unsigned magnitude, so `i32::MIN`
/// does not overflow.
#[must_use]
pub fn abs<N: Signed>() -> Extractor<fn(&N) -> N::Magnitude> {
    Extractor::new(PropertyKey::ABS, magnitude::<N>)
}

/// The string without leading and trailing whitespace.
#[must_use]
pub fn trim<S: AsRef<str> + ?Sized>() -> Extractor<fn(&S) -> String> {
    Extractor::new(PropertyKey::TRIM, trimmed::<S>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Property;

    #[test]
    fn test_extractors() {
        assert_eq!(len::<[u8]>().extract(b"abc"), 3);
        assert_eq!(char_count::<str>().extract("héllo"), 5);
        assert_eq!(abs().extract(&-7i32), 7u32);
        assert_eq!(trim::<str>().extract("  hi "), "hi");
    }

    #[test]
    fn test_extractors_are_keyed() {
        assert_eq!(Property::<str>::key(&len::<str>()), Some(PropertyKey::LEN));
        assert_eq!(Property::<str>::key(&trim::<str>()), Some(PropertyKey::TRIM));
    }
}
