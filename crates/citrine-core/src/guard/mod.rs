//! Runtime type assertions over parsed option values.
//!
//! Exposes the `is(candidate).instance_of(tag)` chain used wherever input
//! validation is needed.

pub mod is;

pub use is::{TypeAssertion, is};
