//! Listener registry and dispatch
//!
//! This module provides the `ListenerRegistry`, a map from event name to the
//! listeners registered for it. Registration is deduplicated by listener
//! identity, empty entries are dropped, and dispatch iterates over a snapshot
//! so listeners can mutate the registry while it is being dispatched.

use crate::listener::Listener;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// In-process registry of named-event listeners
///
/// All operations take `&self`. The registry can be shared through an `Rc`
/// and listeners may capture it to add or remove listeners, or dispatch
/// other events, from inside a dispatch.
///
/// Listeners for one event name are invoked in registration order.
///
/// # Example
/// ```
/// use listener_registry::{Listener, ListenerRegistry};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let registry = ListenerRegistry::new();
/// let hits = Rc::new(Cell::new(0));
///
/// let h = hits.clone();
/// let on_hello = Listener::new(move || h.set(h.get() + 1));
///
/// registry.add_listener("hello", &on_hello);
/// registry.add_listener("hello", &on_hello); // already registered
/// registry.dispatch("hello");
/// assert_eq!(hits.get(), 1);
///
/// registry.remove_listener("hello", &on_hello);
/// registry.dispatch("hello");
/// assert_eq!(hits.get(), 1);
/// assert!(registry.is_empty());
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    /// Event name -> listeners; entries are never empty
    listeners: RefCell<HashMap<String, Vec<Listener>>>,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event_name`
    ///
    /// Registering a listener that is already present for this event name
    /// does nothing.
    pub fn add_listener(&self, event_name: &str, listener: &Listener) {
        let mut listeners = self.listeners.borrow_mut();
        let entry = listeners.entry(event_name.to_string()).or_default();

        if entry.contains(listener) {
            log::trace!("{:?} already registered for '{}'", listener, event_name);
            return;
        }

        entry.push(listener.clone());
        log::debug!(
            "Registered {:?} for '{}' ({} listener(s))",
            listener,
            event_name,
            entry.len()
        );
    }

    /// Unregister `listener` from `event_name`
    ///
    /// Unknown event names and listeners that are not registered are ignored.
    /// The event entry is dropped once its last listener is removed.
    pub fn remove_listener(&self, event_name: &str, listener: &Listener) {
        let mut listeners = self.listeners.borrow_mut();

        let Some(entry) = listeners.get_mut(event_name) else {
            log::trace!("No listeners for '{}', nothing to remove", event_name);
            return;
        };

        let before = entry.len();
        entry.retain(|registered| registered != listener);
        if entry.len() == before {
            log::trace!("{:?} not registered for '{}'", listener, event_name);
            return;
        }

        log::debug!("Removed {:?} from '{}'", listener, event_name);

        if entry.is_empty() {
            listeners.remove(event_name);
            log::debug!("Dropped empty entry for '{}'", event_name);
        }
    }

    /// Invoke every listener registered for `event_name`
    ///
    /// The listeners are copied out before any of them runs, so the set that
    /// is invoked is exactly the one registered when the call began.
    /// Listeners added during this call are not invoked by it, and listeners
    /// removed during this call still are.
    ///
    /// A listener that panics unwinds through `dispatch` and the remaining
    /// listeners of this call are skipped. The registry stays usable.
    pub fn dispatch(&self, event_name: &str) {
        let snapshot = match self.listeners.borrow().get(event_name) {
            Some(entry) => entry.clone(),
            None => {
                log::trace!("No listeners for '{}'", event_name);
                return;
            }
        };

        log::debug!(
            "Dispatching '{}' to {} listener(s)",
            event_name,
            snapshot.len()
        );

        for listener in &snapshot {
            log::trace!("Invoking {:?} for '{}'", listener, event_name);
            listener.call();
        }
    }

    /// Number of listeners registered for `event_name`
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .borrow()
            .get(event_name)
            .map_or(0, |entry| entry.len())
    }

    /// Check whether any listener is registered for `event_name`
    pub fn has_listeners(&self, event_name: &str) -> bool {
        self.listeners.borrow().contains_key(event_name)
    }

    /// Event names with at least one listener, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.listeners.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check whether the registry holds no listeners at all
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut names: Vec<&String> = listeners.keys().collect();
        names.sort();

        let mut map = f.debug_map();
        for name in names {
            map.entry(name, &listeners[name].len());
        }
        map.finish()
    }
}
