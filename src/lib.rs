//! appgraph: a client-side normalized object graph.
//!
//! The crate keeps a local, identity-mapped cache of domain objects (profiles,
//! items, collections, page contents) in sync with a remote API. Objects are
//! shared by identity: every view that displays an item holds the same
//! observable [`Subject`] cell, so merging a fresh API response updates all
//! of them at once. API responses arrive in a flattened, JSON:API-like shape
//! (primary `data` plus an `included` side table), and merging one response is
//! a single store transaction, so the primary object, its relationship graph,
//! and any cross-object side effect (e.g. liking an item updates every feed
//! that shows it) become visible atomically.
//!
//! Layering, bottom up:
//!
//! - [`Subject`]: a shared observable cell holding one object's latest value.
//! - [`AppObjectStore`]: the identity map; all mutation happens inside a
//!   serialized [`AppObjectStore::transaction`].
//! - [`ResponseProcessor`]: materializes one response's object graph into
//!   the store, resolving relationships through the `included` side table.
//! - [`AppModel`]: one method per API operation: merge the primary object,
//!   then apply the operation's structural side effect to cached pages.
//! - [`AppService`] / [`ProfileService`]: thin async surface that calls the
//!   API client, decodes the envelope through a [`DtoRegistry`], and
//!   delegates to the model.

mod appspec;
mod domain;
mod dto;
mod model;
mod object;
mod response;
mod service;
mod store;
mod subject;

pub use appspec::{
    AppSpec, CollectionMenuAction, DestinationPageSpec, DestinationType, FabAction,
    FloatingActionButton, FormFieldContentType, FormFieldSpec, ItemCardIconButton,
    ItemCardIconButtonAction, ItemCardMenuAction, ItemCardMenuItem, ItemCardSpec,
    ItemCollectionMenuItem, ItemCollectionSpec, ItemFormSpec, MenuItemVisibilityRule, PageSpec,
    PageType, SubpageSpec,
};
pub use domain::{
    Item, ItemCollection, ItemCollectionSubject, ItemSubject, ItemType, Layout, PageContent,
    PageContentQuery, PageContentSubject, PageContext, UserProfile, UserProfileSubject,
};
pub use dto::{
    AnyObjectDto, DecodeError, DtoRegistry, ItemCollectionDto, ItemDto, PageContentDto,
    UserProfileDto,
};
pub use model::{AppModel, ModelError};
pub use object::{AppObject, AppObjectDto, ObjectKey, ObjectType, ProviderError,
    RelatedObjectProvider};
pub use response::{ApiResponse, ResponseProcessor};
pub use service::{
    session_scoped_services, ApiClient, ApiError, ApiOperation, AppService, ProfileInitializer,
    ProfileService, ServiceError, SessionServices, UserSession,
};
pub use store::{AppObjectStore, StoreError, StoreProxy};
pub use subject::Subject;
