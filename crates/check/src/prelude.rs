//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_check::prelude::*;` import that brings in
//! the entry points, the shape traits, every catalog check and property, and
//! the built-in exception factories.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_check::prelude::*;
//!
//! let age = Check::that_int_named(42, "age").is(positive())?.ok();
//! let items = Check::that_named(vec![1, 2, 3], "items")
//!     .has(len(), gte().to(3))?
//!     .ok();
//! ```

// ============================================================================
// CHAINS: Entry points and terminal operations
// ============================================================================

pub use crate::chain::{Chain, Check, IntCheck, ObjectCheck};

// ============================================================================
// FOUNDATION: Shapes, identity, errors
// ============================================================================

pub use crate::error::{CheckError, CorruptCheck};
pub use crate::factory::{self, DefaultFactory, ExceptionFactory};
pub use crate::foundation::{
    Builtin, IntObjRelation, IntPredicate, IntRelation, ObjIntRelation, Operand, Predicate,
    Property, Relation,
};

// ============================================================================
// CATALOG: Built-in checks and properties
// ============================================================================

pub use crate::checks::*;
pub use crate::properties::*;

// ============================================================================
// COMBINATORS AND MESSAGES
// ============================================================================

pub use crate::combinators::{And, Bound, Converse, Not, Or, and, not, or};
pub use crate::message::template::VERBATIM;
pub use crate::range::{from_to, offset_length};
