use serde::{Deserialize, Serialize};

use super::AnyObjectDto;
use crate::domain::{ItemCollection, Layout};
use crate::object::AppObjectDto;

/// The wire shape of an item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCollectionDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub layout: Layout,
    /// Item IDs in display order, resolved against `included`.
    pub item_ids: Vec<String>,
}

impl AppObjectDto for ItemCollectionDto {
    type Object = ItemCollection;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_any(any: &AnyObjectDto) -> Option<&Self> {
        match any {
            AnyObjectDto::ItemCollection(dto) => Some(dto),
            _ => None,
        }
    }
}
