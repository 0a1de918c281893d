//! The failure path shared by both chain kinds.
//!
//! Success costs one predicate evaluation and a comparison. Everything else
//! here (naming a derived value, building the context, rendering) runs only
//! after a check has failed.

use std::any::type_name;
use std::fmt::{Debug, Display};

use crate::error::CorruptCheck;
use crate::factory::ExceptionFactory;
use crate::foundation::{Predicate, Property};
use crate::message::{self, DEFAULT_NAME, ViolationContext, short_type_name, template};
use crate::registry::registry;

/// How a failing check's message is produced.
#[derive(Clone, Copy)]
pub(crate) enum Message<'m> {
    /// Through the registry, or the generic fallback.
    Prefab,
    /// From a caller-supplied template; the registry is not consulted.
    Template {
        pattern: &'m str,
        args: &'m [&'m dyn Display],
    },
}

/// Whether the chain may continue: the check holds, or does not when
/// `negated`.
#[inline]
fn passes<T, C, X>(check: &C, value: &T, negated: bool) -> Result<bool, X>
where
    T: ?Sized,
    C: Predicate<T>,
    X: From<CorruptCheck>,
{
    Ok(check.evaluate(value)? != negated)
}

fn context<'a, T, C>(
    check: &'a C,
    value: &'a T,
    name: Option<&'a str>,
    negated: bool,
) -> ViolationContext<'a>
where
    T: Debug,
    C: Predicate<T>,
{
    ViolationContext::new(value, type_name::<T>())
        .with_check(check.key(), type_name::<C>())
        .with_name(name)
        .with_object(check.operand())
        .with_negated(negated)
}

fn fail<F>(factory: &F, ctx: &ViolationContext<'_>, how: Message<'_>) -> F::Error
where
    F: ExceptionFactory,
{
    let text = match how {
        Message::Prefab => message::prefab(ctx),
        Message::Template { pattern, args } => template::render(pattern, ctx, args),
    };
    factory.create(text)
}

/// Applies `check` to the value under test.
pub(crate) fn check<T, C, F>(
    value: &T,
    name: Option<&str>,
    check: &C,
    negated: bool,
    message: Message<'_>,
    factory: &F,
) -> Result<(), F::Error>
where
    T: Debug,
    C: Predicate<T>,
    F: ExceptionFactory,
    F::Error: From<CorruptCheck>,
{
    if passes(check, value, negated)? {
        return Ok(());
    }
    Err(fail(factory, &context(check, value, name, negated), message))
}

/// Applies `check` to a value derived from the value under test.
#[allow(clippy::too_many_arguments)]
pub(crate) fn check_property<T, P, C, F>(
    value: &T,
    name: Option<&str>,
    property: &P,
    label: Option<&str>,
    check: &C,
    negated: bool,
    message: Message<'_>,
    factory: &F,
) -> Result<(), F::Error>
where
    T: ?Sized,
    P: Property<T>,
    P::Output: Debug,
    C: Predicate<P::Output>,
    F: ExceptionFactory,
    F::Error: From<CorruptCheck>,
{
    let derived = property.extract(value);
    if passes(check, &derived, negated)? {
        return Ok(());
    }
    let name = property_name(property, name, label);
    Err(fail(factory, &context(check, &derived, Some(&name), negated), message))
}

/// Applies `check`, producing the error from `supplier` alone.
pub(crate) fn check_or_else<T, C, X, S>(
    value: &T,
    check: &C,
    negated: bool,
    supplier: S,
) -> Result<(), X>
where
    T: ?Sized,
    C: Predicate<T>,
    X: From<CorruptCheck>,
    S: FnOnce() -> X,
{
    if passes(check, value, negated)? {
        Ok(())
    } else {
        Err(supplier())
    }
}

/// Display name of a derived value.
///
/// `label` (or the registered name of a built-in property) is appended to
/// the chain's name: `items.len()`. An unregistered, unlabelled property is
/// rendered as `<function>(<name>)`, or `property(<name>)` for a closure.
pub(crate) fn property_name<T, P>(property: &P, name: Option<&str>, label: Option<&str>) -> String
where
    T: ?Sized,
    P: Property<T>,
{
    let base = name.unwrap_or(DEFAULT_NAME);
    let registered = property.key().and_then(|key| registry().property_name(key));
    match label.or(registered) {
        Some(prop) => format!("{base}.{prop}"),
        None => {
            let short = short_type_name(type_name::<P>());
            if short.contains("{{") {
                format!("{ANONYMOUS_PROPERTY}({base})")
            } else {
                format!("{short}({base})")
            }
        }
    }
}

/// Stands in for the name of a closure property.
const ANONYMOUS_PROPERTY: &str = "property";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::positive;
    use crate::error::CheckError;
    use crate::factory::{DefaultFactory, illegal_argument};
    use crate::properties::len;

    const FACTORY: DefaultFactory = illegal_argument;

    #[test]
    fn passing_check_is_ok() {
        assert!(check(&3, None, &positive(), false, Message::Prefab, &FACTORY).is_ok());
        assert!(check(&-3, None, &positive(), true, Message::Prefab, &FACTORY).is_ok());
    }

    #[test]
    fn failing_check_renders_prefab() {
        let err =
            check(&-3, Some("n"), &positive(), false, Message::Prefab, &FACTORY).unwrap_err();
        assert!(matches!(
            err,
            CheckError::IllegalArgument(ref m) if m == "n must be positive (was -3)"
        ));
    }

    #[test]
    fn derived_value_names() {
        let named = |name, label| property_name::<Vec<i32>, _>(&len(), name, label);
        assert_eq!(named(Some("items"), None), "items.len()");
        assert_eq!(named(None, None), "argument.len()");
        assert_eq!(named(Some("items"), Some("count")), "items.count");

        let first = |v: &Vec<i32>| v.first().copied();
        let name = property_name::<Vec<i32>, _>(&first, Some("items"), None);
        assert_eq!(name, "property(items)");
        let name = property_name::<Vec<i32>, _>(&first, None, None);
        assert_eq!(name, "property(argument)");

        #[allow(clippy::ptr_arg)]
        fn head(v: &Vec<i32>) -> Option<i32> {
            v.first().copied()
        }
        let name = property_name::<Vec<i32>, _>(&head, Some("items"), None);
        assert_eq!(name, "head(items)");
    }

    #[test]
    fn supplier_is_lazy() {
        let mut called = false;
        let ok: Result<(), CheckError> = check_or_else(&1, &positive(), false, || {
            called = true;
            CheckError::IllegalState(String::new())
        });
        assert!(ok.is_ok());
        assert!(!called);
    }
}
