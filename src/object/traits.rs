use super::key::{ObjectKey, ObjectType};
use super::provider::{ProviderError, RelatedObjectProvider};
use crate::dto::AnyObjectDto;

/// A domain object that can live in the object store.
///
/// Each implementor is tied to exactly one wire shape through the `Dto`
/// associated type, and carries its [`ObjectType`] tag as a constant so the
/// store can key cells by `(type, id)` without reflection.
pub trait AppObject: Clone + Send + Sync + 'static {
    /// The object type tag for this shape.
    const OBJECT_TYPE: ObjectType;

    /// The DTO shape this object is constructed from.
    type Dto: AppObjectDto<Object = Self>;

    /// The object's ID. Some implementors derive it from other fields.
    fn id(&self) -> String;

    /// Construct the object from its DTO, resolving each relationship ID
    /// through the provider.
    fn from_dto(
        dto: &Self::Dto,
        provider: &mut dyn RelatedObjectProvider,
    ) -> Result<Self, ProviderError>;
}

/// A wire shape paired with an [`AppObject`].
pub trait AppObjectDto: Clone + Send + Sync + 'static {
    /// The domain shape this DTO decodes into.
    type Object: AppObject<Dto = Self>;

    /// The object ID carried (or derived) by the DTO.
    fn id(&self) -> String;

    /// The store key this DTO's object will live under.
    fn key(&self) -> ObjectKey {
        ObjectKey::new(Self::Object::OBJECT_TYPE, self.id())
    }

    /// Narrow a type-erased DTO back to this concrete shape.
    fn from_any(any: &AnyObjectDto) -> Option<&Self>;
}
