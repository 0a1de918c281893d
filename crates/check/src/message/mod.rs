//! Violation messages
//!
//! A failing check produces one [`ViolationContext`], which is rendered by
//! exactly one of two renderers:
//!
//! - the **prefab** renderer ([`prefab`]), which resolves the check's
//!   formatter through the [registry](crate::registry) and falls back to a
//!   generic sentence for unregistered checks;
//! - the **template** renderer ([`template::render`]), which substitutes
//!   placeholders in a caller-supplied pattern and never consults the
//!   registry.

pub(crate) mod prefab;
pub mod render;
pub mod template;

use std::fmt::{self, Debug};

use crate::foundation::{CheckKey, Operand};
use crate::registry::{Registry, registry};

pub use render::{ELLIPSIS, MAX_WIDTH, short_type_name, stringify};

/// Display name used when the value under test has none.
pub const DEFAULT_NAME: &str = "argument";

/// Rendering of an absent value or object operand.
pub const ABSENT: &str = "null";

/// Stand-in value for an absent `Option`, rendered as [`ABSENT`].
pub(crate) struct Absent;

impl Debug for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ABSENT)
    }
}

// ============================================================================
// VIOLATION CONTEXT
// ============================================================================

/// Everything a formatter needs to describe one failed check.
///
/// Built at the moment a check fails, consumed by a single formatter call
/// and dropped.
#[derive(Clone, Copy)]
pub struct ViolationContext<'a> {
    key: Option<CheckKey>,
    check_type: &'static str,
    negated: bool,
    name: Option<&'a str>,
    value: &'a dyn Debug,
    value_type: &'static str,
    object: Option<Operand<'a>>,
}

impl<'a> ViolationContext<'a> {
    /// Creates a context for `value`, whose full type name is `value_type`.
    pub fn new(value: &'a dyn Debug, value_type: &'static str) -> Self {
        Self {
            key: None,
            check_type: "",
            negated: false,
            name: None,
            value,
            value_type,
            object: None,
        }
    }

    /// Sets the identity and type name of the failed check.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_check(mut self, key: Option<CheckKey>, check_type: &'static str) -> Self {
        self.key = key;
        self.check_type = check_type;
        self
    }

    /// Sets the display name of the value under test.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: Option<&'a str>) -> Self {
        self.name = name;
        self
    }

    /// Sets the object operand of a relation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_object(mut self, object: Option<Operand<'a>>) -> Self {
        self.object = object;
        self
    }

    /// Marks the check as invoked in "must not" form.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Identity of the failed check, if it is a built-in.
    pub fn key(&self) -> Option<CheckKey> {
        self.key
    }

    /// Full type name of the failed check.
    pub fn check_type(&self) -> &'static str {
        self.check_type
    }

    /// Whether the check was invoked in "must not" form.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Display name of the value, or [`DEFAULT_NAME`].
    pub fn name(&self) -> &str {
        self.name.unwrap_or(DEFAULT_NAME)
    }

    /// The value under test.
    pub fn value(&self) -> &dyn Debug {
        self.value
    }

    /// Full type name of the value under test.
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// The object operand, if the check is a relation.
    pub fn object(&self) -> Option<&dyn Debug> {
        self.object.map(|object| object.value)
    }

    /// Bounded rendering of the value.
    pub fn arg(&self) -> String {
        stringify(self.value, self.value_type)
    }

    /// Bounded rendering of the object operand, or [`ABSENT`].
    pub fn obj(&self) -> String {
        match self.object {
            Some(object) => stringify(object.value, object.type_name),
            None => ABSENT.to_owned(),
        }
    }

    /// `"must"` or `"must not"`.
    pub fn must(&self) -> &'static str {
        if self.negated { "must not" } else { "must" }
    }

    /// `"<name> must [not] <phrase> (was <value>)"`.
    pub fn predicate(&self, phrase: &str) -> String {
        format!("{} {} {phrase} (was {})", self.name(), self.must(), self.arg())
    }

    /// `"<name> must [not] <phrase> <object> (was <value>)"`.
    pub fn relation(&self, phrase: &str) -> String {
        format!(
            "{} {} {phrase} {} (was {})",
            self.name(),
            self.must(),
            self.obj(),
            self.arg()
        )
    }
}

impl Debug for ViolationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationContext")
            .field("key", &self.key)
            .field("negated", &self.negated)
            .field("name", &self.name())
            .field("value", &self.value)
            .field("object", &self.object())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// PREFAB RENDERING
// ============================================================================

/// Renders the message for a failed check through the global registry.
pub fn prefab(ctx: &ViolationContext<'_>) -> String {
    prefab_with(ctx, registry())
}

/// Renders the message for a failed check through `registry`.
///
/// Unregistered checks get one of two generic sentences, depending on
/// whether the check was a relation.
pub fn prefab_with(ctx: &ViolationContext<'_>, registry: &Registry) -> String {
    if let Some(format) = ctx.key.and_then(|key| registry.formatter(key)) {
        return format(ctx);
    }
    tracing::trace!(check = ctx.check_type, "no registered formatter, using generic message");
    fallback(ctx)
}

fn fallback(ctx: &ViolationContext<'_>) -> String {
    match ctx.object {
        None => format!("invalid value for {}: {}", ctx.name(), ctx.arg()),
        Some(_) => format!("no such relation between {} and {}", ctx.arg(), ctx.obj()),
    }
}
