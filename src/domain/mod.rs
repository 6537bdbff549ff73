//! Domain objects: the runtime shapes held in the object store.
//!
//! Relations between objects are `Subject` references, never owned values:
//! an [`Item`]'s `creator` points at the same cell every other view of that
//! profile observes. The store alone governs cell lifetime.

mod item;
mod item_collection;
mod page_content;
mod user_profile;

pub(crate) use page_content::derive_page_content_id;

pub use item::{Item, ItemType};
pub use item_collection::{ItemCollection, Layout};
pub use page_content::{PageContent, PageContentQuery, PageContext};
pub use user_profile::UserProfile;

use crate::subject::Subject;

/// A shared cell holding a [`UserProfile`].
pub type UserProfileSubject = Subject<UserProfile>;
/// A shared cell holding an [`Item`].
pub type ItemSubject = Subject<Item>;
/// A shared cell holding an [`ItemCollection`].
pub type ItemCollectionSubject = Subject<ItemCollection>;
/// A shared cell holding a [`PageContent`].
pub type PageContentSubject = Subject<PageContent>;
