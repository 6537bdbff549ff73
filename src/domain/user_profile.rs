use chrono::{DateTime, Utc};

use crate::dto::UserProfileDto;
use crate::object::{AppObject, ObjectType, ProviderError, RelatedObjectProvider};

/// An app user's profile.
///
/// An immutable value: updates replace the whole cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub inserted_at: DateTime<Utc>,
}

impl AppObject for UserProfile {
    const OBJECT_TYPE: ObjectType = ObjectType::UserProfile;

    type Dto = UserProfileDto;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_dto(
        dto: &UserProfileDto,
        _provider: &mut dyn RelatedObjectProvider,
    ) -> Result<Self, ProviderError> {
        Ok(UserProfile::from(dto.clone()))
    }
}

impl From<UserProfileDto> for UserProfile {
    fn from(dto: UserProfileDto) -> Self {
        UserProfile {
            id: dto.id,
            username: dto.username,
            display_name: dto.display_name,
            avatar_url: dto.avatar_url,
            bio: dto.bio,
            inserted_at: dto.inserted_at,
        }
    }
}
