use std::sync::Arc;

use super::api::ApiClient;
use super::app_service::AppService;
use super::profile_service::ProfileService;
use crate::domain::{UserProfile, UserProfileSubject};
use crate::model::{AppModel, ModelError};
use crate::store::AppObjectStore;

/// An active user session.
#[derive(Clone)]
pub struct UserSession {
    /// The cell holding the current user's profile.
    pub user_profile: UserProfileSubject,
}

impl UserSession {
    pub fn new(user_profile: UserProfileSubject) -> Self {
        UserSession { user_profile }
    }

    /// The current user's ID.
    pub fn user_id(&self) -> String {
        self.user_profile.id()
    }
}

/// The services scoped to one user session. They share a model, so an
/// operation performed through one is visible through the other.
pub struct SessionServices {
    pub app_service: AppService,
    pub profile_service: ProfileService,
}

/// Build a session around an already-fetched profile: a fresh store and
/// model scoped to that user, the profile merged in as the first object,
/// and the services wired to the shared model.
pub fn session_scoped_services(
    app_id: impl Into<String>,
    current_user_profile: UserProfile,
    api_client: Arc<dyn ApiClient>,
) -> Result<(UserSession, SessionServices), ModelError> {
    let store = Arc::new(AppObjectStore::new());
    let app_model = Arc::new(AppModel::new(store, current_user_profile.id.clone()));
    let user_profile = app_model.insert_profile(current_user_profile)?;

    let session = UserSession::new(user_profile);
    let services = SessionServices {
        app_service: AppService::new(app_id, Arc::clone(&api_client), Arc::clone(&app_model)),
        profile_service: ProfileService::new(api_client, app_model),
    };
    Ok((session, services))
}
