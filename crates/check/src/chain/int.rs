//! Chain over an `i32`.
//!
//! The integer chain holds its value inline and accepts only
//! [`IntPredicate`] checks, so a numeric precondition never goes through a
//! generic object wrapper.

use std::borrow::Cow;
use std::fmt::{self, Debug, Display};

use super::Chain;
use super::engine::{self, Message};
use crate::error::CorruptCheck;
use crate::factory::{DefaultFactory, ExceptionFactory};
use crate::foundation::{IntPredicate, Predicate, Property};

/// A validation chain over one `i32`.
///
/// ```rust,ignore
/// let port = Check::that_int_named(port, "port")
///     .is(positive())?
///     .is(lte().to(65_535))?
///     .ok();
/// ```
pub struct IntCheck<F = DefaultFactory> {
    value: i32,
    name: Option<Cow<'static, str>>,
    factory: F,
}

impl<F> IntCheck<F> {
    pub(crate) fn new(value: i32, name: Option<Cow<'static, str>>, factory: F) -> Self {
        Self {
            value,
            name,
            factory,
        }
    }

    /// The value under test.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Applies `check`; on failure returns the error built by `supplier`.
    pub fn is_or_else<C, X>(self, check: C, supplier: impl FnOnce() -> X) -> Result<Self, X>
    where
        C: IntPredicate,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&self.value, &check, false, supplier)?;
        Ok(self)
    }

    /// Negated form of [`is_or_else`](Self::is_or_else).
    pub fn is_not_or_else<C, X>(self, check: C, supplier: impl FnOnce() -> X) -> Result<Self, X>
    where
        C: IntPredicate,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&self.value, &check, true, supplier)?;
        Ok(self)
    }

    /// Applies `check` to a derived value; on failure returns the error
    /// built by `supplier`.
    pub fn has_or_else<P, C, X>(
        self,
        property: P,
        check: C,
        supplier: impl FnOnce() -> X,
    ) -> Result<Self, X>
    where
        P: Property<i32>,
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
        P: Property<i32>,
        C: Predicate<P::Output>,
        X: From<CorruptCheck>,
    {
        engine::check_or_else(&property.extract(&self.value), &check, true, supplier)?;
        Ok(self)
    }
}

impl<F> IntCheck<F>
where
    F: ExceptionFactory,
    F::Error: From<CorruptCheck>,
{
    /// Applies `check` to the value.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the check's prefab message.
    pub fn is<C: IntPredicate>(self, check: C) -> Result<Self, F::Error> {
        self.apply(&check, false, Message::Prefab)?;
        Ok(self)
    }

    /// Requires `check` not to hold.
    ///
    /// # Errors
    ///
    /// As for [`is`](Self::is).
    pub fn is_not<C: IntPredicate>(self, check: C) -> Result<Self, F::Error> {
        self.apply(&check, true, Message::Prefab)?;
        Ok(self)
    }

    /// Applies `check`, rendering a failure from the template `pattern`.
    ///
    /// # Errors
    ///
    /// The factory's error carrying the rendered template.
    pub fn is_msg<C: IntPredicate>(
        self,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error> {
        self.apply(&check, false, Message::Template { pattern, args })?;
        Ok(self)
    }

    /// Negated form of [`is_msg`](Self::is_msg).
    ///
    /// # Errors
    ///
    /// As for [`is_msg`](Self::is_msg).
    pub fn is_not_msg<C: IntPredicate>(
        self,
        check: C,
        pattern: &str,
        args: &[&dyn Display],
    ) -> Result<Self, F::Error> {
        self.apply(&check, true, Message::Template { pattern, args })?;
        Ok(self)
    }

    /// Applies `check` to the value derived by `property`.
    ///
    /// # Errors
    ///
    /// The factory's error; the derived value is named after the property
    /// (`delta.abs()`).
    pub fn has<P, C>(self, property: P, check: C) -> Result<Self, F::Error>
    where
        P: Property<i32>,
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
        P: Property<i32>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        self.apply_property(&property, None, &check, true, Message::Prefab)?;
        Ok(self)
    }

    /// Like [`has`](Self::has), naming the property explicitly.
    ///
    /// # Errors
    ///
    /// As for [`has`](Self::has).
    pub fn has_named<P, C>(self, property: P, label: &str, check: C) -> Result<Self, F::Error>
    where
        P: Property<i32>,
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
        P: Property<i32>,
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
        P: Property<i32>,
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
        P: Property<i32>,
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
        P: Property<i32>,
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
        P: Property<i32>,
        P::Output: Debug,
        C: Predicate<P::Output>,
    {
        let how = Message::Template { pattern, args };
        self.apply_property(&property, Some(label), &check, true, how)?;
        Ok(self)
    }

    fn apply<C: IntPredicate>(
        &self,
        check: &C,
        negated: bool,
        how: Message<'_>,
    ) -> Result<(), F::Error> {
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
        P: Property<i32>,
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

impl<F> Chain for IntCheck<F> {
    type Value = i32;
    type Factory = F;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn ok(self) -> i32 {
        self.value
    }

    fn into_factory(self) -> F {
        self.factory
    }
}

impl<F> Debug for IntCheck<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntCheck")
            .field("value", &self.value)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
