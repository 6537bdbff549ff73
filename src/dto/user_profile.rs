use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnyObjectDto;
use crate::domain::UserProfile;
use crate::object::AppObjectDto;

/// The wire shape of a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub inserted_at: DateTime<Utc>,
}

impl AppObjectDto for UserProfileDto {
    type Object = UserProfile;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_any(any: &AnyObjectDto) -> Option<&Self> {
        match any {
            AnyObjectDto::UserProfile(dto) => Some(dto),
            _ => None,
        }
    }
}
