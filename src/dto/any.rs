use serde_json::Value;

use super::registry::DecodeError;
use super::{ItemCollectionDto, ItemDto, PageContentDto, UserProfileDto};
use crate::object::{AppObjectDto, ObjectKey, ObjectType};

/// A type-erased app object DTO, as it appears in a response's `included`
/// array.
///
/// One variant per object type; the variant is picked by the `type`
/// discriminator field through a [`DtoRegistry`](super::DtoRegistry).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyObjectDto {
    PageContent(PageContentDto),
    ItemCollection(ItemCollectionDto),
    Item(ItemDto),
    UserProfile(UserProfileDto),
}

impl AnyObjectDto {
    /// The object type tag of the wrapped DTO.
    pub fn object_type(&self) -> ObjectType {
        match self {
            AnyObjectDto::PageContent(_) => ObjectType::PageContent,
            AnyObjectDto::ItemCollection(_) => ObjectType::ItemCollection,
            AnyObjectDto::Item(_) => ObjectType::Item,
            AnyObjectDto::UserProfile(_) => ObjectType::UserProfile,
        }
    }

    /// The store key of the wrapped DTO's object.
    pub fn key(&self) -> ObjectKey {
        match self {
            AnyObjectDto::PageContent(dto) => dto.key(),
            AnyObjectDto::ItemCollection(dto) => dto.key(),
            AnyObjectDto::Item(dto) => dto.key(),
            AnyObjectDto::UserProfile(dto) => dto.key(),
        }
    }

    /// Serialize the wrapped DTO back to its wire form, with the `type`
    /// discriminator injected. Used by test fixtures and mocks.
    pub fn to_value(&self) -> Result<Value, DecodeError> {
        let mut value = match self {
            AnyObjectDto::PageContent(dto) => serde_json::to_value(dto),
            AnyObjectDto::ItemCollection(dto) => serde_json::to_value(dto),
            AnyObjectDto::Item(dto) => serde_json::to_value(dto),
            AnyObjectDto::UserProfile(dto) => serde_json::to_value(dto),
        }
        .map_err(|err| DecodeError::Json(err.to_string()))?;
        value["type"] = Value::String(self.object_type().as_str().to_string());
        Ok(value)
    }
}

impl From<PageContentDto> for AnyObjectDto {
    fn from(dto: PageContentDto) -> Self {
        AnyObjectDto::PageContent(dto)
    }
}

impl From<ItemCollectionDto> for AnyObjectDto {
    fn from(dto: ItemCollectionDto) -> Self {
        AnyObjectDto::ItemCollection(dto)
    }
}

impl From<ItemDto> for AnyObjectDto {
    fn from(dto: ItemDto) -> Self {
        AnyObjectDto::Item(dto)
    }
}

impl From<UserProfileDto> for AnyObjectDto {
    fn from(dto: UserProfileDto) -> Self {
        AnyObjectDto::UserProfile(dto)
    }
}
