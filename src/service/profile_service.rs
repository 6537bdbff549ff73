use std::sync::Arc;

use serde_json::json;

use super::api::{ApiClient, ApiOperation};
use super::error::ServiceError;
use crate::domain::{UserProfile, UserProfileSubject};
use crate::dto::{DtoRegistry, UserProfileDto};
use crate::model::AppModel;

/// Profile operations for the signed-in user.
pub struct ProfileService {
    api_client: Arc<dyn ApiClient>,
    app_model: Arc<AppModel>,
    registry: DtoRegistry,
}

impl ProfileService {
    pub fn new(api_client: Arc<dyn ApiClient>, app_model: Arc<AppModel>) -> Self {
        ProfileService {
            api_client,
            app_model,
            registry: DtoRegistry::default(),
        }
    }

    /// Change the current user's username.
    pub async fn update_username(
        &self,
        username: &str,
    ) -> Result<UserProfileSubject, ServiceError> {
        self.update_profile(json!({ "username": username })).await
    }

    /// Change the current user's display name.
    pub async fn update_display_name(
        &self,
        display_name: &str,
    ) -> Result<UserProfileSubject, ServiceError> {
        self.update_profile(json!({ "displayName": display_name })).await
    }

    async fn update_profile(
        &self,
        params: serde_json::Value,
    ) -> Result<UserProfileSubject, ServiceError> {
        let value = self
            .api_client
            .perform(ApiOperation::UserProfileUpdate, params)
            .await?;
        let response = self.registry.decode_response::<UserProfileDto>(value)?;
        Ok(self.app_model.upsert_profile(response)?)
    }
}

/// Pre-session profile bootstrap: fetch or create the current user's
/// profile before any model exists.
///
/// Returns plain values rather than cells; the profile is merged into a
/// store when the session is built around it.
pub struct ProfileInitializer {
    api_client: Arc<dyn ApiClient>,
    registry: DtoRegistry,
}

impl ProfileInitializer {
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        ProfileInitializer {
            api_client,
            registry: DtoRegistry::default(),
        }
    }

    /// Fetch the current user's profile.
    ///
    /// A response with no data means the user has not created a profile
    /// yet; that surfaces as [`ServiceError::ProfileNotFound`].
    pub async fn current_user_profile(&self) -> Result<UserProfile, ServiceError> {
        let value = self
            .api_client
            .perform(ApiOperation::CurrentUserProfile, json!({}))
            .await?;
        let response = self
            .registry
            .decode_response::<Option<UserProfileDto>>(value)?;
        match response.data {
            Some(dto) => Ok(UserProfile::from(dto)),
            None => Err(ServiceError::ProfileNotFound),
        }
    }

    /// Create a profile for the current user.
    pub async fn create_user_profile(
        &self,
        username: &str,
        display_name: &str,
    ) -> Result<UserProfile, ServiceError> {
        let value = self
            .api_client
            .perform(
                ApiOperation::UserProfileCreate,
                json!({ "username": username, "displayName": display_name }),
            )
            .await?;
        let response = self.registry.decode_response::<UserProfileDto>(value)?;
        Ok(UserProfile::from(response.data))
    }
}
