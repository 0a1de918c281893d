//! Metadata registry for the built-in catalog.
//!
//! Maps each [`CheckKey`] to a display name, its [`Shape`] and a prefab
//! [`Formatter`], and each [`PropertyKey`] to the name used when a derived
//! value is reported (`items.len()`).
//!
//! The registry is built exactly once, on first use, by consuming a
//! [`RegistryBuilder`]. Nothing can observe the builder's intermediate state
//! and nothing can mutate the frozen [`Registry`], so concurrent readers need
//! no locking.
//!
//! Lookups never fail: an unregistered key yields `None` and the caller falls
//! back to a generic message.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::foundation::{CheckKey, PropertyKey, Shape};
use crate::message::ViolationContext;
use crate::message::prefab;

/// Renders the message of a failed built-in check.
pub type Formatter = fn(&ViolationContext<'_>) -> String;

#[derive(Debug, Clone, Copy)]
struct Entry {
    name: &'static str,
    shape: Shape,
    formatter: Formatter,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// The frozen, read-only registry.
#[derive(Debug)]
pub struct Registry {
    checks: HashMap<CheckKey, Entry>,
    properties: HashMap<PropertyKey, &'static str>,
}

impl Registry {
    /// Display name of a built-in check, e.g. `"positive()"`.
    #[must_use]
    pub fn name(&self, key: CheckKey) -> Option<&'static str> {
        self.checks.get(&key).map(|entry| entry.name)
    }

    /// Prefab formatter of a built-in check.
    #[must_use]
    pub fn formatter(&self, key: CheckKey) -> Option<Formatter> {
        #[cfg(test)]
        lookups::record();
        self.checks.get(&key).map(|entry| entry.formatter)
    }

    /// Shape of a built-in check.
    #[must_use]
    pub fn shape(&self, key: CheckKey) -> Option<Shape> {
        self.checks.get(&key).map(|entry| entry.shape)
    }

    /// Name of a built-in property, e.g. `"len()"`.
    #[must_use]
    pub fn property_name(&self, key: PropertyKey) -> Option<&'static str> {
        self.properties.get(&key).copied()
    }

    /// Number of registered checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects entries before the registry is frozen.
#[derive(Debug, Default)]
pub(crate) struct RegistryBuilder {
    checks: HashMap<CheckKey, Entry>,
    properties: HashMap<PropertyKey, &'static str>,
}

impl RegistryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub(crate) fn check(
        mut self,
        key: CheckKey,
        name: &'static str,
        shape: Shape,
        formatter: Formatter,
    ) -> Self {
        let previous = self.checks.insert(
            key,
            Entry {
                name,
                shape,
                formatter,
            },
        );
        debug_assert!(previous.is_none(), "{key:?} registered twice");
        self
    }

    /// Registers `key` under `name`, reusing the shape and formatter of the
    /// already registered `from`.
    #[must_use = "builder methods must be chained or built"]
    pub(crate) fn recycle(self, key: CheckKey, name: &'static str, from: CheckKey) -> Self {
        debug_assert!(
            self.checks.contains_key(&from),
            "{from:?} must be registered before {key:?}"
        );
        match self.checks.get(&from).copied() {
            Some(entry) => self.check(key, name, entry.shape, entry.formatter),
            None => self,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub(crate) fn property(mut self, key: PropertyKey, name: &'static str) -> Self {
        self.properties.insert(key, name);
        self
    }

    pub(crate) fn freeze(self) -> Registry {
        debug_assert!(
            CheckKey::ALL.iter().all(|key| self.checks.contains_key(key)),
            "every built-in check must be registered"
        );
        debug_assert!(
            PropertyKey::ALL
                .iter()
                .all(|key| self.properties.contains_key(key)),
            "every built-in property must be registered"
        );
        tracing::debug!(
            checks = self.checks.len(),
            properties = self.properties.len(),
            "Check registry frozen"
        );
        Registry {
            checks: self.checks,
            properties: self.properties,
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

static REGISTRY: LazyLock<Registry> = LazyLock::new(catalog);

/// The process-wide registry of built-in checks.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

fn catalog() -> Registry {
    use CheckKey as K;
    use Shape::{IntObjRelation, IntPredicate, IntRelation, ObjIntRelation, Predicate, Relation};

    RegistryBuilder::new()
        .check(K::NULL, "null()", Predicate, prefab::null)
        .check(K::NOT_NULL, "not_null()", Predicate, prefab::not_null)
        .check(K::EMPTY, "empty()", Predicate, prefab::empty)
        .check(K::NOT_EMPTY, "not_empty()", Predicate, prefab::not_empty)
        .check(K::BLANK, "blank()", Predicate, prefab::blank)
        .check(K::NOT_BLANK, "not_blank()", Predicate, prefab::not_blank)
        .check(K::POSITIVE, "positive()", Predicate, prefab::positive)
        .check(K::NEGATIVE, "negative()", Predicate, prefab::negative)
        .check(K::ZERO, "zero()", Predicate, prefab::zero)
        .check(K::EVEN, "even()", IntPredicate, prefab::even)
        .check(K::ODD, "odd()", IntPredicate, prefab::odd)
        .check(K::EXISTS, "exists()", Predicate, prefab::exists)
        .check(K::FILE, "file()", Predicate, prefab::file)
        .check(K::DIRECTORY, "directory()", Predicate, prefab::directory)
        .check(K::READABLE, "readable()", Predicate, prefab::readable)
        .check(K::WRITABLE, "writable()", Predicate, prefab::writable)
        .check(K::EQ, "eq()", Relation, prefab::eq)
        .recycle(K::EQUAL_TO, "equal_to()", K::EQ)
        .check(K::NE, "ne()", Relation, prefab::ne)
        .check(K::GT, "gt()", Relation, prefab::gt)
        .check(K::GTE, "gte()", Relation, prefab::gte)
        .recycle(K::AT_LEAST, "at_least()", K::GTE)
        .check(K::LT, "lt()", Relation, prefab::lt)
        .check(K::LTE, "lte()", Relation, prefab::lte)
        .recycle(K::AT_MOST, "at_most()", K::LTE)
        .check(K::SAME_AS, "same_as()", Relation, prefab::same_as)
        .check(K::MULTIPLE_OF, "multiple_of()", IntRelation, prefab::multiple_of)
        .check(K::CONTAINS, "contains()", Relation, prefab::contains)
        .check(K::CONTAINS_KEY, "contains_key()", Relation, prefab::contains_key)
        .check(K::ELEMENT_OF, "element_of()", Relation, prefab::element_of)
        .recycle(K::HAS_SUBSTR, "has_substr()", K::CONTAINS)
        .check(K::STARTS_WITH, "starts_with()", Relation, prefab::starts_with)
        .check(K::ENDS_WITH, "ends_with()", Relation, prefab::ends_with)
        .check(K::INDEX_OF, "index_of()", IntObjRelation, prefab::index_of)
        .check(K::LEN_EQ, "len_eq()", ObjIntRelation, prefab::len_eq)
        .check(K::LEN_GTE, "len_gte()", ObjIntRelation, prefab::len_gte)
        .check(K::LEN_LTE, "len_lte()", ObjIntRelation, prefab::len_lte)
        .check(K::JSON_HAS_KEY, "json_has_key()", Relation, prefab::json_has_key)
        .recycle(K::JSON_INDEX, "json_index()", K::INDEX_OF)
        .property(PropertyKey::LEN, "len()")
        .property(PropertyKey::CHAR_COUNT, "chars().count()")
        .property(PropertyKey::ABS, "abs()")
        .property(PropertyKey::TRIM, "trim()")
        .freeze()
}


// ============================================================================
// TESTS
// ============================================================================
