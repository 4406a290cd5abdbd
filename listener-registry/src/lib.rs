//! Listener Registry Library
//!
//! A small in-process publish/subscribe registry: register listeners under an
//! event name, remove them, and synchronously invoke every listener for a name.
//!
//! # Architecture
//!
//! - `Listener` is an identity-comparable handle around a callback
//! - `ListenerRegistry` maps event names to the listeners registered for them
//! - A listener is registered at most once per event name
//! - Event names without listeners are removed from the registry
//! - Dispatch works on a snapshot, so listeners may add or remove listeners
//!   (or dispatch again) while being dispatched
//!
//! The library does NOT:
//! - Carry event payloads
//! - Order listeners by priority
//! - Defer or schedule dispatch
//! - Synchronise access across threads (the registry is `!Send` and `!Sync`)
//!
//! # Example Usage
//!
//! ```
//! use listener_registry::{Listener, ListenerRegistry};
//! use std::rc::Rc;
//!
//! let registry = Rc::new(ListenerRegistry::new());
//!
//! let log_hello = Listener::new(|| println!("Hello"));
//! registry.add_listener("hello", &log_hello);
//!
//! // A listener that registers another listener while being dispatched
//! let r = Rc::clone(&registry);
//! let late = Listener::new(|| println!("late"));
//! registry.add_listener("world", &Listener::new(move || r.add_listener("world", &late)));
//!
//! registry.dispatch("hello");
//! registry.dispatch("world"); // `late` is registered but not invoked yet
//! assert_eq!(registry.listener_count("world"), 2);
//! ```

// Public modules
pub mod listener;
pub mod registry;

// Re-export main types for convenience
pub use listener::Listener;
pub use registry::ListenerRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
