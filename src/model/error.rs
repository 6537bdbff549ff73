use std::fmt;

use crate::object::ProviderError;
use crate::store::StoreError;

/// Errors raised by [`AppModel`](super::AppModel) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A page that must receive an item has no default (first) collection.
    /// A structural invariant violation, fatal to the operation and never
    /// retried.
    PageDefaultCollectionNotFound,
    /// Relationship resolution failed while merging a response.
    Provider(ProviderError),
    /// The object store itself failed.
    Store(StoreError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::PageDefaultCollectionNotFound => {
                write!(f, "page has no default collection to receive the item")
            }
            ModelError::Provider(err) => write!(f, "{}", err),
            ModelError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<ProviderError> for ModelError {
    fn from(err: ProviderError) -> Self {
        ModelError::Provider(err)
    }
}

impl From<StoreError> for ModelError {
    fn from(err: StoreError) -> Self {
        ModelError::Store(err)
    }
}
