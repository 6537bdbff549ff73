use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

/// A named backend operation.
///
/// Operations are dispatched by name rather than by URL; the transport is
/// the [`ApiClient`]'s concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Returns the app spec.
    AppSpec,
    /// Returns the current user's profile, or no data if none exists.
    CurrentUserProfile,
    /// Creates a profile for the current user.
    UserProfileCreate,
    /// Updates the current user's profile.
    UserProfileUpdate,
    /// Returns the content of a page.
    PageContent,
    /// Creates an item collection.
    ItemCollectionCreate,
    /// Deletes an item collection.
    ItemCollectionDelete,
    /// Creates an item.
    ItemCreate,
    /// Deletes an item.
    ItemDelete,
    /// Likes an item.
    ItemLike,
    /// Unlikes an item.
    ItemUnlike,
    /// Saves an item.
    ItemSave,
    /// Unsaves an item.
    ItemUnsave,
}

impl ApiOperation {
    /// The operation's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::AppSpec => "appSpec",
            ApiOperation::CurrentUserProfile => "currentUserProfile",
            ApiOperation::UserProfileCreate => "userProfileCreate",
            ApiOperation::UserProfileUpdate => "userProfileUpdate",
            ApiOperation::PageContent => "pageContent",
            ApiOperation::ItemCollectionCreate => "itemCollectionCreate",
            ApiOperation::ItemCollectionDelete => "itemCollectionDelete",
            ApiOperation::ItemCreate => "itemCreate",
            ApiOperation::ItemDelete => "itemDelete",
            ApiOperation::ItemLike => "itemLike",
            ApiOperation::ItemUnlike => "itemUnlike",
            ApiOperation::ItemSave => "itemSave",
            ApiOperation::ItemUnsave => "itemUnsave",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The transport used to perform API operations.
///
/// Implementations own auth, routing, and retries; callers see one async
/// call from operation plus JSON params to a raw JSON response.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn perform(&self, operation: ApiOperation, params: Value) -> Result<Value, ApiError>;
}

/// An error from the API transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be performed.
    Request(String),
    /// The backend answered with something other than the expected shape.
    UnexpectedResponse,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(reason) => write!(f, "api request failed: {reason}"),
            ApiError::UnexpectedResponse => write!(f, "unexpected api response"),
        }
    }
}

impl Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_wire_names_are_camel_case() {
        assert_eq!(ApiOperation::AppSpec.as_str(), "appSpec");
        assert_eq!(ApiOperation::ItemCollectionCreate.as_str(), "itemCollectionCreate");
        assert_eq!(ApiOperation::ItemUnsave.to_string(), "itemUnsave");
    }
}
