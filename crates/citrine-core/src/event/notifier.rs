//! Synchronous notifier restricted to a declared event vocabulary.
//!
//! The allowed event names are fixed at construction and never widened.
//! Subscribing to a name outside the vocabulary is a silent no-op, which
//! keeps subscription permissive for callers that don't know the full
//! vocabulary ahead of time. Dispatch is synchronous and single-threaded.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

/// A registered event handler.
pub type Handler<T> = Box<dyn FnMut(&T)>;

/// Publish/subscribe notifier limited to a whitelist of event names.
///
/// Generic over the payload forwarded to handlers; the bootstrap layer that
/// only signals lifecycle transitions uses the `()` default.
pub struct Notifier<T = ()> {
    allowed: HashSet<String>,
    hooks: HashMap<String, Vec<Handler<T>>>,
}

impl<T> Notifier<T> {
    /// Create a notifier whose vocabulary is the given event names.
    ///
    /// The subscription table starts empty.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            hooks: HashMap::new(),
        }
    }

    /// Register `handler` for `event`.
    ///
    /// Unknown events are ignored without error and leave no table entry.
    /// Multiple handlers for the same event are kept in registration order.
    pub fn on(&mut self, event: &str, handler: impl FnMut(&T) + 'static) {
        if !self.allowed.contains(event) {
            debug!(event, "ignoring subscription for unknown event");
            return;
        }
        self.hooks
            .entry(event.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    /// Invoke every handler registered for `event`, in registration order,
    /// forwarding `payload`.
    ///
    /// No-op when nothing is subscribed. Dispatch is not sandboxed: a
    /// handler panic propagates to the caller and aborts the remaining
    /// handlers, matching the synchronous fail-loud contract of this layer.
    pub fn emit(&mut self, event: &str, payload: &T) {
        let Some(handlers) = self.hooks.get_mut(event) else {
            return;
        };
        for handler in handlers.iter_mut() {
            handler(payload);
        }
    }

    /// Number of handlers registered for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.hooks.get(event).map_or(0, Vec::len)
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("allowed", &self.allowed)
            .field("subscribed_events", &self.hooks.len())
            .finish()
    }
}
