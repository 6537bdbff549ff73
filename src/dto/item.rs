use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnyObjectDto;
use crate::domain::{Item, ItemType};
use crate::object::AppObjectDto;

/// The wire shape of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub item_type: ItemType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// The creator's profile ID, resolved against the response's `included`
    /// objects during processing.
    #[serde(default)]
    pub creator_id: Option<String>,
    pub is_liked: bool,
    pub is_saved: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppObjectDto for ItemDto {
    type Object = Item;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_any(any: &AnyObjectDto) -> Option<&Self> {
        match any {
            AnyObjectDto::Item(dto) => Some(dto),
            _ => None,
        }
    }
}
