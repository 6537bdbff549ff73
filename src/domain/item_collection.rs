use serde::{Deserialize, Serialize};

use super::ItemSubject;
use crate::dto::ItemCollectionDto;
use crate::object::{AppObject, ObjectType, ProviderError, RelatedObjectProvider};

/// An ordered collection of items.
///
/// Order is significant and caller-controlled: chronological feeds insert at
/// the front, explicit user collections append.
#[derive(Debug, Clone)]
pub struct ItemCollection {
    pub id: String,
    pub name: Option<String>,
    pub layout: Layout,
    pub items: Vec<ItemSubject>,
}

/// How a collection lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// A vertical list layout.
    VerticalList,
    /// A horizontal list layout.
    HorizontalList,
    /// An unknown layout type.
    #[serde(other)]
    Unknown,
}

impl AppObject for ItemCollection {
    const OBJECT_TYPE: ObjectType = ObjectType::ItemCollection;

    type Dto = ItemCollectionDto;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_dto(
        dto: &ItemCollectionDto,
        provider: &mut dyn RelatedObjectProvider,
    ) -> Result<Self, ProviderError> {
        let items = dto
            .item_ids
            .iter()
            .map(|item_id| provider.item(item_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ItemCollection {
            id: dto.id.clone(),
            name: dto.name.clone(),
            layout: dto.layout,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_layout_decodes() {
        let layout: Layout = serde_json::from_str("\"mosaicGridV3\"").unwrap();
        assert_eq!(layout, Layout::Unknown);
    }
}
