//! Whitelist-gated publish/subscribe for lifecycle events.
//!
//! Provides a [`Notifier`] that dispatches events synchronously to handlers
//! registered for a fixed vocabulary of event names.

pub mod notifier;

pub use notifier::Notifier;
