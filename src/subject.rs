//! Subject: a shared, observable holder for one object's current value.
//!
//! A `Subject<T>` is the cell the object store hands out: many readers (views,
//! other domain objects holding a relation) share the same cell, and every
//! write through the store replaces the held value and wakes all subscribers.
//!
//! Backed by `tokio::sync::watch`: writes are synchronous and non-blocking, so
//! a merge can notify subscribers while the store's write lock is held without
//! risking deadlock. Notification is a waker rather than a callback, and subscribers
//! read the latest value on their own time.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::object::AppObject;

/// A shared observable cell holding one value.
///
/// `Clone` is shallow: clones observe and mutate the same cell. Use
/// [`Subject::ptr_eq`] to test cell identity.
pub struct Subject<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Subject {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Subject<T> {
    /// Create a new cell holding `value`.
    pub fn new(value: T) -> Self {
        Subject {
            tx: Arc::new(watch::Sender::new(value)),
        }
    }

    /// Replace the held value and notify subscribers.
    pub fn send(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the held value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Borrow the held value for the duration of `f`.
    ///
    /// Cheaper than [`Subject::value`] when a clone is not needed. The
    /// closure must not call back into this same cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Subscribe to value changes.
    ///
    /// The receiver observes the latest value at any time (ungated by any
    /// store lock) and is woken after each [`send`](Subject::send) or
    /// [`update`](Subject::update).
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Whether two subjects are the same cell.
    pub fn ptr_eq(a: &Subject<T>, b: &Subject<T>) -> bool {
        Arc::ptr_eq(&a.tx, &b.tx)
    }
}

impl<T: Clone> Subject<T> {
    /// A clone of the current value.
    pub fn value(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: AppObject> Subject<T> {
    /// The ID of the held object.
    pub fn id(&self) -> String {
        self.with(|value| value.id())
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject({:?})", &*self.tx.borrow())
    }
}
