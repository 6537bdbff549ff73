use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{AnyObjectDto, ItemCollectionDto, ItemDto, PageContentDto, UserProfileDto};
use crate::object::ObjectType;
use crate::response::ApiResponse;

type DecodeFn = Arc<dyn Fn(&Value) -> Result<AnyObjectDto, DecodeError> + Send + Sync>;

/// A dispatch table from [`ObjectType`] to the decode function for that
/// type's DTO.
///
/// Production code constructs one fixed registry at startup
/// ([`DtoRegistry::default`]); tests that need to substitute a decoder build
/// their own instance and install an override with
/// [`DtoRegistry::set_override`]. Registries are independent; an override in
/// one never affects another.
///
/// ## Example
///
/// ```ignore
/// let registry = DtoRegistry::default();
/// let response: ApiResponse<ItemDto> = registry.decode_response(raw_json)?;
/// ```
#[derive(Clone)]
pub struct DtoRegistry {
    decoders: HashMap<ObjectType, DecodeFn>,
}

impl Default for DtoRegistry {
    fn default() -> Self {
        let mut decoders: HashMap<ObjectType, DecodeFn> = HashMap::new();
        decoders.insert(
            ObjectType::PageContent,
            Arc::new(|value| decode_dto::<PageContentDto>(value).map(AnyObjectDto::PageContent)),
        );
        decoders.insert(
            ObjectType::ItemCollection,
            Arc::new(|value| {
                decode_dto::<ItemCollectionDto>(value).map(AnyObjectDto::ItemCollection)
            }),
        );
        decoders.insert(
            ObjectType::Item,
            Arc::new(|value| decode_dto::<ItemDto>(value).map(AnyObjectDto::Item)),
        );
        decoders.insert(
            ObjectType::UserProfile,
            Arc::new(|value| decode_dto::<UserProfileDto>(value).map(AnyObjectDto::UserProfile)),
        );
        DtoRegistry { decoders }
    }
}

impl DtoRegistry {
    /// Replace the decoder for one object type on this registry instance.
    pub fn set_override<F>(&mut self, object_type: ObjectType, decoder: F)
    where
        F: Fn(&Value) -> Result<AnyObjectDto, DecodeError> + Send + Sync + 'static,
    {
        self.decoders.insert(object_type, Arc::new(decoder));
    }

    /// Decode one type-discriminated object by looking up its `type` field.
    pub fn decode_any(&self, value: &Value) -> Result<AnyObjectDto, DecodeError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingTypeTag)?;
        let object_type = ObjectType::parse(tag)
            .ok_or_else(|| DecodeError::UnknownObjectType(tag.to_string()))?;
        let decoder = self
            .decoders
            .get(&object_type)
            .ok_or_else(|| DecodeError::UnknownObjectType(tag.to_string()))?;
        decoder(value)
    }

    /// Decode a full response envelope (`{ data, included? }`) from its raw
    /// JSON form.
    ///
    /// `data` may be `null` when `T` is an `Option`; every element of
    /// `included` is resolved through this registry by its `type`
    /// discriminator.
    pub fn decode_response<T: DeserializeOwned>(
        &self,
        value: Value,
    ) -> Result<ApiResponse<T>, DecodeError> {
        #[derive(Deserialize)]
        struct RawEnvelope {
            data: Value,
            #[serde(default)]
            included: Option<Vec<Value>>,
        }

        let raw: RawEnvelope =
            serde_json::from_value(value).map_err(|err| DecodeError::Json(err.to_string()))?;
        let data =
            serde_json::from_value(raw.data).map_err(|err| DecodeError::Json(err.to_string()))?;
        let included = raw
            .included
            .map(|values| {
                values
                    .iter()
                    .map(|value| self.decode_any(value))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(ApiResponse { data, included })
    }
}

impl fmt::Debug for DtoRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DtoRegistry")
            .field("decoders", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn decode_dto<T: DeserializeOwned>(value: &Value) -> Result<T, DecodeError> {
    serde_json::from_value(value.clone()).map_err(|err| DecodeError::Json(err.to_string()))
}

/// Errors raised while decoding a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An `included` element carried no `type` discriminator.
    MissingTypeTag,
    /// The `type` discriminator named a type outside the closed registry.
    UnknownObjectType(String),
    /// Malformed JSON for the expected shape.
    Json(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingTypeTag => {
                write!(f, "included object is missing its type discriminator")
            }
            DecodeError::UnknownObjectType(tag) => write!(f, "unknown object type: {}", tag),
            DecodeError::Json(message) => write!(f, "response decoding error: {}", message),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}
