use std::fmt;

use super::key::ObjectKey;
use crate::domain::{ItemCollectionSubject, ItemSubject, UserProfileSubject};

/// Provides related app objects to [`AppObject::from_dto`] during response
/// processing.
///
/// The set of relatable types is closed, with one method per type that can appear
/// on the right-hand side of a relationship. This keeps the trait object
/// safe so constructors can take `&mut dyn RelatedObjectProvider`.
///
/// [`AppObject::from_dto`]: super::AppObject::from_dto
pub trait RelatedObjectProvider {
    /// Resolve a user profile by ID.
    fn user_profile(&mut self, object_id: &str) -> Result<UserProfileSubject, ProviderError>;

    /// Resolve an item by ID.
    fn item(&mut self, object_id: &str) -> Result<ItemSubject, ProviderError>;

    /// Resolve an item collection by ID.
    fn item_collection(&mut self, object_id: &str)
        -> Result<ItemCollectionSubject, ProviderError>;
}

/// Errors raised while resolving related objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// An object referenced in the API response was not present in the
    /// response's `included` side table. This indicates a server/client
    /// protocol mismatch; the operation is not retryable.
    ObjectNotIncluded(ObjectKey),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::ObjectNotIncluded(key) => {
                write!(f, "object {} referenced in response was not included", key)
            }
        }
    }
}

impl std::error::Error for ProviderError {}
