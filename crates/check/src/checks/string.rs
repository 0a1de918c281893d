//! String content checks.
//!
//! Subjects and objects are anything that can be viewed as `str`, so the
//! same check works on `String`, `&str` and `Cow<str>`.

use crate::foundation::{Builtin, CheckKey};

fn is_blank<S: AsRef<str> + ?Sized>(value: &S) -> bool {
    value.as_ref().trim().is_empty()
}

fn is_not_blank<S: AsRef<str> + ?Sized>(value: &S) -> bool {
    !is_blank(value)
}

fn has_substring<S, P>(value: &S, needle: &P) -> bool
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    value.as_ref().contains(needle.as_ref())
}

fn has_prefix<S, P>(value: &S, prefix: &P) -> bool
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    value.as_ref().starts_with(prefix.as_ref())
}

fn has_suffix<S, P>(value: &S, suffix: &P) -> bool
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    value.as_ref().ends_with(suffix.as_ref())
}

/// The string is empty or whitespace only.
#[must_use]
pub fn blank<S: AsRef<str> + ?Sized>() -> Builtin<fn(&S) -> bool> {
    Builtin::predicate(CheckKey::BLANK, is_blank::<S>)
}

/// The string has at least one non-whitespace character.
#[must_use]
pub fn not_blank<S: AsRef<str> + ?Sized>() -> Builtin<fn(&S) -> bool> {
    Builtin::predicate(CheckKey::NOT_BLANK, is_not_blank::<S>)
}

/// The string contains the object substring.
#[must_use]
pub fn has_substr<S, P>() -> Builtin<fn(&S, &P) -> bool>
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    Builtin::relation(CheckKey::HAS_SUBSTR, has_substring::<S, P>)
}

/// The string starts with the object.
#[must_use]
pub fn starts_with<S, P>() -> Builtin<fn(&S, &P) -> bool>
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    Builtin::relation(CheckKey::STARTS_WITH, has_prefix::<S, P>)
}

/// The string ends with the object.
#[must_use]
pub fn ends_with<S, P>() -> Builtin<fn(&S, &P) -> bool>
where
    S: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    Builtin::relation(CheckKey::ENDS_WITH, has_suffix::<S, P>)
}
