use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserProfileSubject;
use crate::dto::ItemDto;
use crate::object::{AppObject, ObjectType, ProviderError, RelatedObjectProvider};

/// An item created by an app user.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub item_type: ItemType,
    pub name: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub image_path: Option<String>,
    pub url: Option<String>,
    /// The creator's profile cell. A relation, not ownership.
    pub creator: Option<UserProfileSubject>,
    pub is_liked: bool,
    pub is_saved: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The kind of content an item carries.
///
/// Open vocabulary: unrecognized wire values decode to [`ItemType::Unknown`]
/// so that server-driven specs can introduce new kinds without breaking old
/// clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    SocialPost,
    Product,
    #[serde(other)]
    Unknown,
}

impl AppObject for Item {
    const OBJECT_TYPE: ObjectType = ObjectType::Item;

    type Dto = ItemDto;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_dto(
        dto: &ItemDto,
        provider: &mut dyn RelatedObjectProvider,
    ) -> Result<Self, ProviderError> {
        let creator = match &dto.creator_id {
            Some(creator_id) => Some(provider.user_profile(creator_id)?),
            None => None,
        };
        Ok(Item {
            id: dto.id.clone(),
            item_type: dto.item_type,
            name: dto.name.clone(),
            description: dto.description.clone(),
            body: dto.body.clone(),
            image_path: dto.image_path.clone(),
            url: dto.url.clone(),
            creator,
            is_liked: dto.is_liked,
            is_saved: dto.is_saved,
            inserted_at: dto.inserted_at,
            updated_at: dto.updated_at,
        })
    }
}
