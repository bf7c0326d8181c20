//! Shared domain types for Citrine.
//!
//! This crate contains the error taxonomy and the runtime type tags used by
//! the helper utilities in `citrine-core`.
//!
//! Zero infrastructure dependencies -- only serde_json and thiserror.

pub mod error;
pub mod tag;
