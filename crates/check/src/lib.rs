//! # nebula-check
//!
//! Fluent argument checks for defensive programming. A chain opened over a
//! value runs checks in order and stops at the first failure, returning an
//! error whose message is generated from the failing check.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_check::prelude::*;
//!
//! let err = Check::that_int_named(-5, "age").is(positive()).unwrap_err();
//! assert_eq!(err.to_string(), "age must be positive (was -5)");
//!
//! let err = Check::that_named(vec![1], "items")
//!     .has(len(), gte().to(3))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "items.len() must be >= 3 (was 1)");
//! ```
//!
//! ## Messages
//!
//! Built-in checks are recognised by identity through the
//! [`registry`](registry::registry), which maps each of them to a message
//! formatter. Any other check, including a closure that behaves exactly like
//! a built-in one, gets a generic message. Every chain step has a `_msg`
//! variant taking a custom [template](message::template).
//!
//! ## Checks
//!
//! - **Nullable**: [`null`](checks::null), [`not_null`](checks::not_null)
//! - **Collection**: [`empty`](checks::empty), [`contains`](checks::contains),
//!   [`contains_key`](checks::contains_key), [`element_of`](checks::element_of)
//! - **Numeric**: [`positive`](checks::positive), [`even`](checks::even),
//!   [`multiple_of`](checks::multiple_of), [`gte`](checks::gte), ...
//! - **String**: [`blank`](checks::blank), [`starts_with`](checks::starts_with), ...
//! - **Path**: [`file`](checks::file), [`writable`](checks::writable), ...
//! - **Properties**: [`len`](properties::len), [`abs`](properties::abs), ...

pub mod chain;
pub mod checks;
pub mod combinators;
pub mod error;
pub mod factory;
pub mod foundation;
pub mod message;
pub mod prelude;
pub mod properties;
pub mod range;
pub mod registry;

pub use chain::{Chain, Check, IntCheck, ObjectCheck};
pub use error::{CheckError, CorruptCheck};
pub use factory::{DefaultFactory, ExceptionFactory};
