//! Listener handle type
//!
//! A `Listener` is a reference-counted handle around a callback. Handles are
//! compared by identity: a clone of a handle is the same listener, while two
//! handles built from identical closures are different listeners.

use std::fmt;
use std::rc::Rc;

/// Identity-comparable handle to a callback invoked with no arguments
#[derive(Clone)]
pub struct Listener {
    callback: Rc<dyn Fn()>,
}

impl Listener {
    /// Wrap a closure in a new listener handle
    ///
    /// # Example
    /// ```
    /// use listener_registry::Listener;
    ///
    /// let listener = Listener::new(|| println!("fired"));
    /// let same = listener.clone();
    /// assert_eq!(listener, same);
    /// assert_ne!(listener, Listener::new(|| println!("fired")));
    /// ```
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the underlying callback
    pub fn call(&self) {
        (self.callback)()
    }

    /// Address of the shared callback, used for log output
    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.callback) as *const ()
    }
}

impl From<Rc<dyn Fn()>> for Listener {
    fn from(callback: Rc<dyn Fn()>) -> Self {
        Self { callback }
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", self.addr())
    }
}
