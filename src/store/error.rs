use std::fmt;

/// Errors raised by the object store itself.
///
/// Lookup misses are not errors (they are `None`); the only failure the
/// store can produce on its own is a poisoned write lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store's write lock was poisoned by a panicking transaction.
    LockPoisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned => write!(f, "object store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}
