//! Combinators over check shapes.
//!
//! Composite checks are built fresh and never carry a [`CheckKey`]; a failing
//! composite therefore reports the generic fallback message. [`Bound`] is the
//! one exception: binding an object does not change which check runs, so its
//! key is the relation's own.
//!
//! [`CheckKey`]: crate::foundation::CheckKey

mod and;
mod bound;
mod converse;
mod not;
mod or;

pub use and::{And, and};
pub use bound::Bound;
pub use converse::Converse;
pub use not::{Not, not};
pub use or::{Or, or};
