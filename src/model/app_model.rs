//! The domain-specific orchestration layer over the object store.
//!
//! For each API operation the model merges the response's primary object
//! (through [`ResponseProcessor`]) and then applies that operation's merge
//! side effect, a targeted structural update against the cached page
//! contents, inside the same transaction. No observer ever sees the primary
//! merged without its side effect, or vice versa.

use std::sync::Arc;

use super::error::ModelError;
use crate::domain::{
    Item, ItemCollectionSubject, ItemSubject, PageContent, PageContentQuery, PageContentSubject,
    UserProfile, UserProfileSubject,
};
use crate::dto::{ItemCollectionDto, ItemDto, PageContentDto, UserProfileDto};
use crate::object::AppObject;
use crate::response::{ApiResponse, ResponseProcessor};
use crate::store::AppObjectStore;
use crate::subject::Subject;

/// A side effect to perform after merging a response's objects, applied to
/// every cached page content within the same transaction.
type MergeSideEffect<'a, T> =
    Box<dyn FnOnce(&Subject<T>, &[PageContentSubject]) -> Result<(), ModelError> + 'a>;

/// The top-level interface to an app's model layer.
///
/// Insertions follow a deliberate asymmetry: chronological feeds are
/// newest-first (insert at the front of the page's default collection),
/// while explicitly-targeted collections are user-ordered (append at the
/// end).
pub struct AppModel {
    object_store: Arc<AppObjectStore>,
    current_user_id: String,
}

impl AppModel {
    /// Create a model over the given store, scoped to the user whose session
    /// is active.
    pub fn new(object_store: Arc<AppObjectStore>, current_user_id: impl Into<String>) -> Self {
        AppModel {
            object_store,
            current_user_id: current_user_id.into(),
        }
    }

    /// The store this model merges into.
    pub fn object_store(&self) -> &Arc<AppObjectStore> {
        &self.object_store
    }

    /// Insert an already-decoded user profile (session bootstrap).
    pub fn insert_profile(&self, profile: UserProfile) -> Result<UserProfileSubject, ModelError> {
        self.object_store.transaction(|proxy| {
            let id = profile.id.clone();
            Ok(proxy.merge(&id, profile))
        })
    }

    /// Insert or update a user profile from a response. Pure merge.
    pub fn upsert_profile(
        &self,
        response: ApiResponse<UserProfileDto>,
    ) -> Result<UserProfileSubject, ModelError> {
        self.merge(response)
    }

    /// Insert or update a page content object from a response. Pure merge.
    pub fn upsert_page_content(
        &self,
        response: ApiResponse<PageContentDto>,
    ) -> Result<PageContentSubject, ModelError> {
        self.merge(response)
    }

    /// Add an item: merge it, then insert it at the front of the default
    /// collection of every page showing all items, and of every page showing
    /// the creator's items.
    ///
    /// Fails with [`ModelError::PageDefaultCollectionNotFound`] if a matching
    /// page has no collections; in that case no page is mutated.
    pub fn add_item(&self, response: ApiResponse<ItemDto>) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|new_item, target_pages| {
                let new_value = new_item.value();
                // Collect every receiving collection before mutating any, so
                // a missing default collection aborts with the pages as they
                // were.
                let mut feeds = Vec::new();
                for page in target_pages {
                    let page_value = page.value();
                    if page_value.query == PageContentQuery::AllItems
                        || Self::is_creator_item(&page_value, &new_value)
                    {
                        let first = page_value
                            .collections
                            .first()
                            .cloned()
                            .ok_or(ModelError::PageDefaultCollectionNotFound)?;
                        feeds.push(first);
                    }
                }
                for collection in feeds {
                    collection.update(|value| value.items.insert(0, new_item.clone()));
                }
                Ok(())
            })),
        )
    }

    /// Remove an item by ID from every collection of every cached page.
    pub fn remove_item(&self, item_id: &str) -> Result<(), ModelError> {
        self.object_store.transaction(|proxy| {
            proxy.update_all(|page_contents: &[PageContentSubject]| {
                for page in page_contents {
                    for collection in page.value().collections {
                        collection.update(|value| {
                            value.items.retain(|item| item.id() != item_id)
                        });
                    }
                }
                Ok(())
            })
        })
    }

    /// Add a collection: merge it, then append it to the first cached page
    /// whose query is "collections".
    pub fn add_collection(
        &self,
        response: ApiResponse<ItemCollectionDto>,
    ) -> Result<ItemCollectionSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|new_collection, target_pages| {
                if let Some(page) = target_pages
                    .iter()
                    .find(|page| page.with(|value| value.query == PageContentQuery::Collections))
                {
                    page.update(|value| value.collections.push(new_collection.clone()));
                }
                Ok(())
            })),
        )
    }

    /// Remove a collection by ID from every cached page.
    pub fn remove_collection(&self, collection_id: &str) -> Result<(), ModelError> {
        self.object_store.transaction(|proxy| {
            proxy.update_all(|page_contents: &[PageContentSubject]| {
                for page in page_contents {
                    page.update(|value| {
                        value
                            .collections
                            .retain(|collection| collection.id() != collection_id)
                    });
                }
                Ok(())
            })
        })
    }

    /// Add an item to a specific collection: merge it, then append it to
    /// that collection on every "collections" page, and insert it at the
    /// front of the default collection of any page showing the creator's
    /// items.
    pub fn add_collection_item(
        &self,
        response: ApiResponse<ItemDto>,
        collection_id: &str,
    ) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(move |new_item, target_pages| {
                let new_value = new_item.value();
                let mut append_targets = Vec::new();
                let mut front_targets = Vec::new();
                for page in target_pages {
                    let page_value = page.value();
                    if page_value.query == PageContentQuery::Collections {
                        if let Some(collection) = page_value
                            .collections
                            .iter()
                            .find(|collection| collection.id() == collection_id)
                        {
                            append_targets.push(collection.clone());
                        }
                    } else if Self::is_creator_item(&page_value, &new_value) {
                        let first = page_value
                            .collections
                            .first()
                            .cloned()
                            .ok_or(ModelError::PageDefaultCollectionNotFound)?;
                        front_targets.push(first);
                    }
                }
                for collection in append_targets {
                    collection.update(|value| value.items.push(new_item.clone()));
                }
                for collection in front_targets {
                    collection.update(|value| value.items.insert(0, new_item.clone()));
                }
                Ok(())
            })),
        )
    }

    /// Add a liked item: merge it, then insert it at the front of the current
    /// user's likes feed, if one is cached.
    pub fn add_liked_item(&self, response: ApiResponse<ItemDto>) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|liked_item, target_pages| {
                if let Some(collection) =
                    self.user_feed_collection(PageContentQuery::Likes, target_pages)
                {
                    collection.update(|value| value.items.insert(0, liked_item.clone()));
                }
                Ok(())
            })),
        )
    }

    /// Remove an unliked item: merge the post-unlike item, then remove it by
    /// its own ID from the current user's likes feed.
    pub fn remove_unliked_item(
        &self,
        response: ApiResponse<ItemDto>,
    ) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|unliked_item, target_pages| {
                self.remove_from_user_feed(PageContentQuery::Likes, unliked_item, target_pages);
                Ok(())
            })),
        )
    }

    /// Add a saved item: merge it, then insert it at the front of the current
    /// user's saves feed, if one is cached.
    pub fn add_saved_item(&self, response: ApiResponse<ItemDto>) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|saved_item, target_pages| {
                if let Some(collection) =
                    self.user_feed_collection(PageContentQuery::Saves, target_pages)
                {
                    collection.update(|value| value.items.insert(0, saved_item.clone()));
                }
                Ok(())
            })),
        )
    }

    /// Remove an unsaved item: merge the post-unsave item, then remove it by
    /// its own ID from the current user's saves feed.
    pub fn remove_unsaved_item(
        &self,
        response: ApiResponse<ItemDto>,
    ) -> Result<ItemSubject, ModelError> {
        self.merge_objects(
            response,
            Some(Box::new(|unsaved_item, target_pages| {
                self.remove_from_user_feed(PageContentQuery::Saves, unsaved_item, target_pages);
                Ok(())
            })),
        )
    }

    /// The first collection of the first cached page matching `query` and
    /// belonging to the current user.
    fn user_feed_collection(
        &self,
        query: PageContentQuery,
        target_pages: &[PageContentSubject],
    ) -> Option<ItemCollectionSubject> {
        target_pages
            .iter()
            .find(|page| {
                page.with(|value| {
                    value.query == query && value.page_context.belongs_to(&self.current_user_id)
                })
            })
            .and_then(|page| page.with(|value| value.collections.first().cloned()))
    }

    fn remove_from_user_feed(
        &self,
        query: PageContentQuery,
        item: &ItemSubject,
        target_pages: &[PageContentSubject],
    ) {
        if let Some(collection) = self.user_feed_collection(query, target_pages) {
            let item_id = item.id();
            collection.update(|value| value.items.retain(|item| item.id() != item_id));
        }
    }

    fn is_creator_item(page_content: &PageContent, item: &Item) -> bool {
        page_content.query == PageContentQuery::CreatorItems
            && item.creator.as_ref().map(|creator| creator.id())
                == page_content.page_context.object_id
    }

    /// Merge a response's objects into the store and apply the side effect,
    /// returning the cell for the response's primary object.
    fn merge_objects<'a, T: AppObject>(
        &self,
        response: ApiResponse<T::Dto>,
        side_effect: Option<MergeSideEffect<'a, T>>,
    ) -> Result<Subject<T>, ModelError> {
        self.object_store.transaction(|proxy| {
            // 1. Process data and included objects.
            let response_object = ResponseProcessor::new(response, proxy).data_object()?;

            // 2. Perform any side effect.
            if let Some(side_effect) = side_effect {
                proxy.update_all(|target_pages: &[PageContentSubject]| {
                    side_effect(&response_object, target_pages)
                })?;
            }

            Ok(response_object)
        })
    }

    fn merge<T: AppObject>(&self, response: ApiResponse<T::Dto>) -> Result<Subject<T>, ModelError> {
        self.merge_objects::<T>(response, None)
    }
}
