//! Chain over a value of any type.

use std::borrow::Cow;
use std::fmt::{self, Debug, Display};

use super::engine::{self, Message};
use super::Chain;
use crate::error::CorruptCheck;
use crate::factory::{DefaultFactory, ExceptionFactory};
use crate::foundation::{Predicate, Property};

/// A validation chain over one value of type `T`.
///
/// Every check consumes the chain and returns it on success, so a failing
/// check ends the chain: there is nothing left to continue with.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_check::prelude::*;
///
/// let items = Check::that_named(items, "items")
///     .is(not_empty())?
///     .has(len(), lte().to(10))?
///     .ok();
/// ```
pub struct ObjectCheck<T, F = DefaultFactory> {
    value: T,
    name: Option<Cow<'static, str>>,
    factory: F,
}

impl<T, F> ObjectCheck<T, F> {
    pub(crate) fn new(value: T, name: Option<Cow<'static, str>>, factory: F) -> Self {
        Self {
            value,
            name,
            factory,
        }
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }

    // ========================================================================
    // SUPPLIED ERRORS
    // ========================================================================

    /// Applies `check`; on failure returns the error built by `supplier`.
    ///
    /// No message is rendered and the chain's factory is not used.
    pub fn is_or_else<C, X>(self, check: C, supplier: impl FnOnce() -> X) -> Result<Self, X>
    where
        C: Predicate<T>,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&self.value, &check, false, supplier)?;
        Ok(self)
    }

    /// Negated form of [`is_or_else`](Self::is_or_else).
    pub fn is_not_or_else<C, X>(self, check: C, supplier: impl FnOnce() -> X) -> Result<Self, X>
    where
        C: Predicate<T>,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&self.value, &check, true, supplier)?;
        Ok(self)
    }

    /// Applies `check` to a derived value; on failure returns the error built
    /// by `supplier`.
    pub fn has_or_else<P, C, X>(
        self,
        property: P,
        check: C,
        supplier: impl FnOnce() -> X,
    ) -> Result<Self, X>
    where
        P: Property<T>,
        C: Predicate<P::Output>,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&property.extract(&self.value), &check, false, supplier)?;
        Ok(self)
    }

    /// Negated form of [`has_or_else`](Self::has_or_else).
    pub fn not_has_or_else<P, C, X>(
        self,
        property: P,
        check: C,
        supplier: impl FnOnce() -> X,
    ) -> Result<Self, X>
    where
        P: Property<T>,
        C: Predicate<P::Output>,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&property.extract(&self.value), &check, true, supplier)?;
        Ok(self)
    }
}

impl<T, F> ObjectCheck<T, F>
where
    F: ExceptionFactory,
    F::Error: From<CorruptCheck>,
{
    // ========================================================================
    // CHECKS
    // ========================================================================

    /// Applies `check` to the value.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the check's prefab message, or the
    /// generic fallback if `check` is not a built-in.
    pub fn is<C>(self, check: C) -> Result<Self, F::Error>
    where
        T: Debug,
        C: Predicate<T>,
    {
        self.apply(&check, false, Message::Prefab)?;
        Ok(self)
    }

    /// Requires `check` not to hold. The message of a built-in check is kept,
    /// in its "must not" form.
    ///
    /// # Errors
    ///
    /// As for [`is`](Self::is).
    pub fn is_not<C>(self, check: C) -> Result<Self, F::Error>
    where
        T: Debug,
        C: Predicate<T>,
    {
        self.apply(&check, true, Message::Prefab)?;
        Ok(self)
    }

    /// Applies `check`, rendering a failure from the template `pattern`
    /// (see [`template`](crate::message::template)). The registry is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the rendered template.
    pub fn is_msg<C>(self, check: C, pattern: &str, args: &[&dyn Display]) -> Result<Self, F::Error>
    where
        T: Debug,
        C: Predicate<T>,
    {
        self.apply(&check, false, Message::Template { pattern, args })?;
        Ok(self)
    }

    /// Negated form of [`is_msg`](Self::is_msg).
    ///
    /// # Errors
    ///
    /// As for [`is_msg`](Self::is_msg).
    pub fn is_not_msg<C>(
        self,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error>
    where
        T: Debug,
        C: Predicate<T>,
    {
        self.apply(&check, true, Message::Template { pattern, args })?;
        Ok(self)
    }

    // ========================================================================
    // PROPERTY CHECKS
    // ========================================================================

    /// Applies `check` to the value derived by `property`.
    ///
    /// The value itself is left untouched and remains the chain's value.
    ///
    /// # Errors
    ///
    /// The factory's error; the derived value is named after the property
    /// (`items.len()`).
    pub fn has<P, C>(self, property: P, check: C) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        self.apply_property(&property, None, &check, false, Message::Prefab)?;
        Ok(self)
    }

    /// Negated form of [`has`](Self::has).
    ///
    /// # Errors
    ///
    /// As for [`has`](Self::has).
    pub fn not_has<P, C>(self, property: P, check: C) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        self.apply_property(&property, None, &check, true, Message::Prefab)?;
        Ok(self)
    }

    /// Like [`has`](Self::has), naming the property explicitly: a failure
    /// is reported against `<name>.<label>`.
    ///
    /// # Errors
    ///
    /// As for [`has`](Self::has).
    pub fn has_named<P, C>(self, property: P, label: &str, check: C) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        self.apply_property(&property, Some(label), &check, false, Message::Prefab)?;
        Ok(self)
    }

    /// Negated form of [`has_named`](Self::has_named).
    ///
    /// # Errors
    ///
    /// As for [`has`](Self::has).
    pub fn not_has_named<P, C>(self, property: P, label: &str, check: C) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        self.apply_property(&property, Some(label), &check, true, Message::Prefab)?;
        Ok(self)
    }

    /// Like [`has`](Self::has), rendering a failure from a template.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the rendered template.
    pub fn has_msg<P, C>(
        self,
        property: P,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        let how = Message::Template { pattern, args };
        self.apply_property(&property, None, &check, false, how)?;
        Ok(self)
    }

    /// Negated form of [`has_msg`](Self::has_msg).
    ///
    /// # Errors
    ///
    /// As for [`has_msg`](Self::has_msg).
    pub fn not_has_msg<P, C>(
        self,
        property: P,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        let how = Message::Template { pattern, args };
        self.apply_property(&property, None, &check, true, how)?;
        Ok(self)
    }

    /// Like [`has_named`](Self::has_named), rendering a failure from a
    /// template; `${name}` is `<name>.<label>`.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the rendered template.
    pub fn has_named_msg<P, C>(
        self,
        property: P,
        label: &str,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        let how = Message::Template { pattern, args };
        self.apply_property(&property, Some(label), &check, false, how)?;
        Ok(self)
    }

    /// Negated form of [`has_named_msg`](Self::has_named_msg).
    ///
    /// # Errors
    ///
    /// As for [`has_named_msg`](Self::has_named_msg).
    pub fn not_has_named_msg<P, C>(
        self,
        property: P,
        label: &str,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        let how = Message::Template { pattern, args };
        self.apply_property(&property, Some(label), &check, true, how)?;
        Ok(self)
    }

    fn apply<C>(&self, check: &C, negated: bool, how: Message<'_>) -> Result<(), F::Error>
    where
        T: Debug,
        C: Predicate<T>,
    {
        engine::check(&self.value, self.name.as_deref(), check, negated, how, &self.factory)
    }

    fn apply_property<P, C>(
        &self,
        property: &P,
        label: Option<&str>,
        check: &C,
        negated: bool,
        how: Message<'_>,
    ) -> Result<(), F::Error>
    where
        P: Property<T>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        engine::check_property(
            &self.value,
            self.name.as_deref(),
            property,
            label,
            check,
            negated,
            how,
            &self.factory,
        )
    }
}

impl<T, F> Chain for ObjectCheck<T, F> {
    type Value = T;
    type Factory = F;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn ok(self) -> T {
        self.value
    }

    fn into_factory(self) -> F {
        self.factory
    }
}

impl<T: Debug, F> Debug for ObjectCheck<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCheck")
            .field("value", &self.value)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
