//! Helper utilities for the Citrine CLI.
//!
//! Three independent building blocks consumed by the surrounding command
//! layer and test bootstrap:
//!
//! - [`crypto`]: SHA-256 hashing and passphrase-based AES-256-GCM encryption
//! - [`event`]: whitelist-gated publish/subscribe for lifecycle events
//! - [`guard`]: runtime type assertions over parsed option values
//!
//! No component depends on another, and every operation is synchronous.

pub mod crypto;
pub mod event;
pub mod guard;
