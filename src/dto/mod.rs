//! Wire shapes and the response decode registry.
//!
//! Each DTO mirrors one API object shape one-to-one with its domain type.
//! Heterogeneous `included` objects are decoded through a [`DtoRegistry`],
//! an explicit, instance-scoped dispatch table from [`ObjectType`] to a
//! decode function, so tests can substitute a decoder without touching
//! process-wide state.
//!
//! [`ObjectType`]: crate::object::ObjectType

mod any;
mod item;
mod item_collection;
mod page_content;
mod registry;
mod user_profile;

pub use any::AnyObjectDto;
pub use item::ItemDto;
pub use item_collection::ItemCollectionDto;
pub use page_content::PageContentDto;
pub use registry::{DecodeError, DtoRegistry};
pub use user_profile::UserProfileDto;
