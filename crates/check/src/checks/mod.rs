//! Built-in checks
//!
//! The closed catalog of checks the registry knows by identity. Every
//! factory returns a [`Builtin`](crate::foundation::Builtin) stamped with its
//! own key, so `positive()` called twice yields two values that the registry
//! treats as the same check.
//!
//! # Categories
//!
//! - **Nullable**: `null`, `not_null`
//! - **Collection**: emptiness, membership, map keys
//! - **Identity**: `same_as`
//! - **Numeric**: sign, parity, divisibility, ordering
//! - **String**: blankness, substrings
//! - **Path**: file-system state
//! - **Index**: index validity and length bounds against an `i32`
//! - **JSON** (feature `json`): key presence, index validity
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_check::prelude::*;
//!
//! Check::that_int_named(age, "age").is(positive())?;
//! Check::that_named(&name, "name").is(not_blank())?;
//! Check::that_named(items, "items").has(len(), gte().to(3))?;
//! ```

pub mod collection;
pub mod identity;
pub mod index;
#[cfg(feature = "json")]
pub mod json;
pub mod nullable;
pub mod numeric;
pub mod path;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use collection::{
    Contains, HasKey, Len, contains, contains_key, element_of, empty, not_empty,
};
pub use identity::same_as;
pub use index::{index_of, len_eq, len_gte, len_lte};
#[cfg(feature = "json")]
pub use json::{json_has_key, json_index};
pub use nullable::{not_null, null};
pub use numeric::{
    Integer, Number, Signed, at_least, at_most, eq, equal_to, even, gt, gte, lt, lte, multiple_of,
    ne, negative, odd, positive, zero,
};
pub use path::{directory, exists, file, readable, writable};
pub use string::{blank, ends_with, has_substr, not_blank, starts_with};
