//! Foundation of the check system.
//!
//! The shape traits every check implements, the identity keys that let the
//! registry recognise built-in checks, and the wrappers that attach those
//! keys to the catalog's functions.

mod builtin;
mod key;
pub mod traits;

pub use builtin::{Builtin, Extractor};
pub use key::{CheckKey, PropertyKey, Shape};
pub use traits::{
    IntObjRelation, IntPredicate, IntRelation, ObjIntRelation, Operand, Predicate, Property,
    Relation,
};
