//! Server-delivered app specification.
//!
//! The shape of the app (its pages, subpages, and the controls each one
//! shows) is described by the backend rather than hard-coded in the client.
//! These types decode that description. Every closed set of choices carries
//! an `Unknown` fallback so an older client keeps working when the backend
//! introduces a new variant.

mod card;
mod form;
mod page;

pub use card::{
    CollectionMenuAction, FabAction, FloatingActionButton, ItemCardIconButton,
    ItemCardIconButtonAction, ItemCardMenuAction, ItemCardMenuItem, ItemCardSpec,
    ItemCollectionMenuItem, ItemCollectionSpec, MenuItemVisibilityRule,
};
pub use form::{FormFieldContentType, FormFieldSpec, ItemFormSpec};
pub use page::{
    AppSpec, DestinationPageSpec, DestinationType, PageSpec, PageType, SubpageSpec,
};
