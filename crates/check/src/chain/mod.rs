//! Validation chains
//!
//! [`Check`] opens a chain over one value; each check either returns the
//! chain for the next check or ends it with the first failure. Two chain
//! kinds share the [`Chain`] trait for pivots and terminal operations:
//!
//! - [`ObjectCheck`] holds a value of any type;
//! - [`IntCheck`] holds an `i32` and accepts integer checks only.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_check::prelude::*;
//!
//! fn open(path: &Path, retries: i32) -> Result<(), CheckError> {
//!     Check::that_named(path, "path")
//!         .is(file())?
//!         .and_int_named(retries, "retries")
//!         .is_not(negative())?;
//!     Ok(())
//! }
//! ```

mod engine;
mod int;
mod object;

use std::any::type_name;
use std::borrow::Cow;

pub use int::IntCheck;
pub use object::ObjectCheck;

use crate::error::CheckError;
use crate::factory::{self, DefaultFactory};
use crate::foundation::CheckKey;
use crate::message::{self, Absent, ViolationContext};

// ============================================================================
// CHAIN
// ============================================================================

/// Operations shared by both chain kinds: pivoting to another value and
/// ending the chain.
pub trait Chain: Sized {
    /// The value under test.
    type Value;

    /// The chain's exception factory.
    type Factory;

    /// Display name of the value under test, if one was given.
    fn name(&self) -> Option<&str>;

    /// Ends the chain, returning the validated value.
    fn ok(self) -> Self::Value;

    /// Ends the chain, keeping only its exception factory.
    fn into_factory(self) -> Self::Factory;

    /// Ends the chain, returning a transform of the validated value.
    fn ok_map<R>(self, transform: impl FnOnce(Self::Value) -> R) -> R {
        transform(self.ok())
    }

    /// Ends the chain, handing the validated value to `consumer`.
    fn then(self, consumer: impl FnOnce(Self::Value)) {
        consumer(self.ok());
    }

    /// Starts a new chain over `value`, with the same exception factory.
    fn and<U>(self, value: U) -> ObjectCheck<U, Self::Factory> {
        ObjectCheck::new(value, None, self.into_factory())
    }

    /// Starts a new named chain over `value`, with the same exception
    /// factory.
    fn and_named<U>(
        self,
        value: U,
        name: impl Into<Cow<'static, str>>,
    ) -> ObjectCheck<U, Self::Factory> {
        ObjectCheck::new(value, Some(name.into()), self.into_factory())
    }

    /// Starts a new chain over an `i32`, with the same exception factory.
    fn and_int(self, value: i32) -> IntCheck<Self::Factory> {
        IntCheck::new(value, None, self.into_factory())
    }

    /// Starts a new named chain over an `i32`, with the same exception
    /// factory.
    fn and_int_named(
        self,
        value: i32,
        name: impl Into<Cow<'static, str>>,
    ) -> IntCheck<Self::Factory> {
        IntCheck::new(value, Some(name.into()), self.into_factory())
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Entry points for validation chains.
///
/// Chains opened with `that*` fail with
/// [`CheckError::IllegalArgument`]; chains opened with `on*` fail with
/// whatever their factory builds.
#[derive(Debug, Clone, Copy)]
pub struct Check;

impl Check {
    /// Opens a chain over `value`.
    pub fn that<T>(value: T) -> ObjectCheck<T> {
        ObjectCheck::new(value, None, default_factory())
    }

    /// Opens a chain over `value`, named `name` in messages.
    pub fn that_named<T>(value: T, name: impl Into<Cow<'static, str>>) -> ObjectCheck<T> {
        ObjectCheck::new(value, Some(name.into()), default_factory())
    }

    /// Opens a chain over `value` whose failures are built by `factory`.
    pub fn on<T, F>(factory: F, value: T) -> ObjectCheck<T, F> {
        ObjectCheck::new(value, None, factory)
    }

    /// Opens a named chain over `value` whose failures are built by
    /// `factory`.
    pub fn on_named<T, F>(
        factory: F,
        value: T,
        name: impl Into<Cow<'static, str>>,
    ) -> ObjectCheck<T, F> {
        ObjectCheck::new(value, Some(name.into()), factory)
    }

    /// Opens a chain over an `i32`.
    pub fn that_int(value: i32) -> IntCheck {
        IntCheck::new(value, None, default_factory())
    }

    /// Opens a chain over an `i32`, named `name` in messages.
    pub fn that_int_named(value: i32, name: impl Into<Cow<'static, str>>) -> IntCheck {
        IntCheck::new(value, Some(name.into()), default_factory())
    }

    /// Opens a chain over an `i32` whose failures are built by `factory`.
    pub fn on_int<F>(factory: F, value: i32) -> IntCheck<F> {
        IntCheck::new(value, None, factory)
    }

    /// Opens a named chain over an `i32` whose failures are built by
    /// `factory`.
    pub fn on_int_named<F>(
        factory: F,
        value: i32,
        name: impl Into<Cow<'static, str>>,
    ) -> IntCheck<F> {
        IntCheck::new(value, Some(name.into()), factory)
    }

    /// Opens a chain over the content of `value`, rejecting `None` at once.
    ///
    /// # Errors
    ///
    /// [`CheckError::Null`] (`"argument must not be null"`) if `value` is
    /// `None`. Unlike `Check::that(value).is(not_null())`, this does not use
    /// the illegal-argument kind.
    pub fn not_null<T>(value: Option<T>) -> Result<ObjectCheck<T>, CheckError> {
        require(value, None)
    }

    /// Named form of [`not_null`](Self::not_null).
    ///
    /// # Errors
    ///
    /// [`CheckError::Null`] (`"<name> must not be null"`) if `value` is
    /// `None`.
    pub fn not_null_named<T>(
        value: Option<T>,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ObjectCheck<T>, CheckError> {
        require(value, Some(name.into()))
    }
}

fn default_factory() -> DefaultFactory {
    factory::illegal_argument
}

fn require<T>(
    value: Option<T>,
    name: Option<Cow<'static, str>>,
) -> Result<ObjectCheck<T>, CheckError> {
    match value {
        Some(value) => Ok(ObjectCheck::new(value, name, default_factory())),
        None => {
            let ctx = ViolationContext::new(&Absent, type_name::<Option<T>>())
                .with_check(Some(CheckKey::NOT_NULL), "not_null()")
                .with_name(name.as_deref());
            Err(factory::null(message::prefab(&ctx)))
        }
    }
}

#[cfg(test)]
mod tests;
