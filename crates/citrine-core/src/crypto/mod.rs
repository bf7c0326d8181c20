//! Cryptographic helpers for Citrine.
//!
//! - `hash`: SHA-256 content hashing
//! - `cipher`: AES-256-GCM passphrase encryption for opaque string payloads

pub mod cipher;
pub mod hash;

pub use cipher::{decrypt, encrypt};
pub use hash::hash;
