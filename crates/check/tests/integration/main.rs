//! End-to-end tests of the public API.

mod chain;
mod messages;
mod range;
mod registry;
