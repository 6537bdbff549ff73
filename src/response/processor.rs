//! ResponseProcessor: merges one response's object graph into the store.
//!
//! Given a primary DTO plus the unordered `included` side table, the
//! processor materializes a fully-linked object graph: every relationship ID
//! is resolved through the processor itself (acting as the
//! [`RelatedObjectProvider`]), and every newly seen or freshly-decoded object
//! is merged into the store exactly once per ID. The whole pass runs inside
//! one store transaction, so the graph becomes visible atomically.

use std::collections::{HashMap, HashSet};

use super::envelope::ApiResponse;
use crate::domain::{ItemCollectionSubject, ItemSubject, UserProfileSubject};
use crate::dto::AnyObjectDto;
use crate::object::{
    AppObject, AppObjectDto, ObjectKey, ProviderError, RelatedObjectProvider,
};
use crate::store::StoreProxy;
use crate::subject::Subject;

/// Converts the DTOs of one API response into app objects holding the
/// response's latest values.
///
/// A related ID resolves to the existing cell as-is only when the store has
/// it *and* this processor already resolved that ID during this response;
/// otherwise the DTO is looked up in `included` (an absence there is a
/// protocol error), decoded while recursively resolving its own relationships,
/// and merged. A consequence worth knowing: mutually-referencing objects in
/// one response resolve only when one participant's DTO is reachable through
/// `included`; the resolved set guards against re-decoding, not against a
/// first decode.
pub struct ResponseProcessor<'a, 'p, T: AppObject> {
    data: T::Dto,
    included: HashMap<ObjectKey, AnyObjectDto>,
    proxy: &'a mut StoreProxy<'p>,
    resolved: HashSet<ObjectKey>,
}

impl<'a, 'p, T: AppObject> ResponseProcessor<'a, 'p, T> {
    /// Create a processor for one response within an active transaction.
    pub fn new(response: ApiResponse<T::Dto>, proxy: &'a mut StoreProxy<'p>) -> Self {
        let included = response
            .included
            .unwrap_or_default()
            .into_iter()
            .map(|dto| (dto.key(), dto))
            .collect();
        ResponseProcessor {
            data: response.data,
            included,
            proxy,
            resolved: HashSet::new(),
        }
    }

    /// Materialize and merge the primary data object, returning its cell.
    pub fn data_object(&mut self) -> Result<Subject<T>, ProviderError> {
        let id = self.data.id();
        let dto = self.data.clone();
        let new_value = T::from_dto(&dto, self)?;
        Ok(self.proxy.merge(&id, new_value))
    }

    fn resolve<U: AppObject>(&mut self, object_id: &str) -> Result<Subject<U>, ProviderError> {
        let key = ObjectKey::new(U::OBJECT_TYPE, object_id);
        match self.proxy.get::<U>(object_id) {
            Some(existing) if self.resolved.contains(&key) => Ok(existing),
            _ => self.merge_included(key),
        }
    }

    fn merge_included<U: AppObject>(&mut self, key: ObjectKey) -> Result<Subject<U>, ProviderError> {
        self.resolved.insert(key.clone());

        // Find the DTO for the key.
        let dto = self
            .included
            .get(&key)
            .and_then(U::Dto::from_any)
            .cloned()
            .ok_or_else(|| ProviderError::ObjectNotIncluded(key.clone()))?;

        // Create the object, then merge it into the store.
        let new_value = U::from_dto(&dto, self)?;
        Ok(self.proxy.merge(&key.object_id, new_value))
    }
}

impl<T: AppObject> RelatedObjectProvider for ResponseProcessor<'_, '_, T> {
    fn user_profile(&mut self, object_id: &str) -> Result<UserProfileSubject, ProviderError> {
        self.resolve(object_id)
    }

    fn item(&mut self, object_id: &str) -> Result<ItemSubject, ProviderError> {
        self.resolve(object_id)
    }

    fn item_collection(
        &mut self,
        object_id: &str,
    ) -> Result<ItemCollectionSubject, ProviderError> {
        self.resolve(object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::{Item, ItemCollection, Layout, PageContent, PageContentQuery, UserProfile};
    use crate::dto::{ItemCollectionDto, ItemDto, PageContentDto, UserProfileDto};
    use crate::object::ObjectType;
    use crate::store::{AppObjectStore, StoreError};

    fn profile_dto(id: &str) -> UserProfileDto {
        UserProfileDto {
            id: id.to_string(),
            username: "johndoe".into(),
            display_name: "John Doe".into(),
            avatar_url: None,
            bio: None,
            inserted_at: Utc::now(),
        }
    }

    fn item_dto(id: &str, creator_id: Option<&str>) -> ItemDto {
        ItemDto {
            id: id.to_string(),
            item_type: crate::domain::ItemType::SocialPost,
            name: Some("Hello, World!".into()),
            description: None,
            body: Some("Lorem ipsum dolor sit amet.".into()),
            image_path: None,
            url: None,
            creator_id: creator_id.map(str::to_string),
            is_liked: false,
            is_saved: false,
            inserted_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn collection_dto(id: &str, item_ids: &[&str]) -> ItemCollectionDto {
        ItemCollectionDto {
            id: id.to_string(),
            name: None,
            layout: Layout::VerticalList,
            item_ids: item_ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn process<T: AppObject>(
        store: &AppObjectStore,
        response: ApiResponse<T::Dto>,
    ) -> Result<Subject<T>, ProviderError> {
        store.transaction(|proxy| {
            ResponseProcessor::new(response, proxy)
                .data_object()
                .map_err(ProcessAbort::Provider)
        })
        .map_err(|abort| match abort {
            ProcessAbort::Provider(err) => err,
            ProcessAbort::Store(err) => panic!("store failure: {}", err),
        })
    }

    enum ProcessAbort {
        Provider(ProviderError),
        Store(StoreError),
    }

    impl From<StoreError> for ProcessAbort {
        fn from(err: StoreError) -> Self {
            ProcessAbort::Store(err)
        }
    }

    #[test]
    fn materializes_linked_graph() {
        let store = AppObjectStore::new();
        let response = ApiResponse::new(
            PageContentDto {
                query: PageContentQuery::AllItems,
                page_id: Some("1".into()),
                object_id: None,
                collection_ids: vec!["c1".into()],
            },
            Some(vec![
                collection_dto("c1", &["i1"]).into(),
                item_dto("i1", Some("u1")).into(),
                profile_dto("u1").into(),
            ]),
        );

        let page = process::<PageContent>(&store, response).unwrap();
        let page_value = page.value();
        assert_eq!(page_value.id(), "allItems_1");
        assert_eq!(page_value.collections.len(), 1);

        let collection = page_value.collections[0].value();
        assert_eq!(collection.items.len(), 1);
        let item = collection.items[0].value();
        assert_eq!(item.id, "i1");
        let creator = item.creator.expect("creator resolved");
        assert_eq!(creator.value().id, "u1");

        // Every object in the graph was written into the store under its key.
        store
            .transaction(|proxy| {
                assert!(proxy.get::<ItemCollection>("c1").is_some());
                assert!(proxy.get::<Item>("i1").is_some());
                assert!(proxy.get::<UserProfile>("u1").is_some());
                Ok::<_, StoreError>(())
            })
            .unwrap();
    }

    #[test]
    fn duplicate_references_resolve_to_one_cell() {
        let store = AppObjectStore::new();
        let response = ApiResponse::new(
            collection_dto("c1", &["i1", "i1"]),
            Some(vec![
                item_dto("i1", Some("u1")).into(),
                profile_dto("u1").into(),
            ]),
        );

        let collection = process::<ItemCollection>(&store, response).unwrap();
        let items = collection.value().items;
        assert_eq!(items.len(), 2);
        assert!(Subject::ptr_eq(&items[0], &items[1]));
        // The shared creator cell is also materialized exactly once.
        let first_creator = items[0].value().creator.unwrap();
        let second_creator = items[1].value().creator.unwrap();
        assert!(Subject::ptr_eq(&first_creator, &second_creator));
    }

    #[test]
    fn missing_inclusion_fails_without_writing_the_object() {
        let store = AppObjectStore::new();
        let response = ApiResponse::new(item_dto("i1", Some("u1")), None);

        let err = process::<Item>(&store, response).unwrap_err();
        assert_eq!(
            err,
            ProviderError::ObjectNotIncluded(ObjectKey::new(ObjectType::UserProfile, "u1"))
        );

        // Neither the missing relation nor the primary was merged.
        store
            .transaction(|proxy| {
                assert!(proxy.get::<UserProfile>("u1").is_none());
                assert!(proxy.get::<Item>("i1").is_none());
                Ok::<_, StoreError>(())
            })
            .unwrap();
    }

    #[test]
    fn included_payload_refreshes_cached_cell() {
        let store = AppObjectStore::new();

        // First response caches the creator.
        process::<UserProfile>(&store, ApiResponse::new(profile_dto("u1"), None)).unwrap();
        let cached = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.get::<UserProfile>("u1")))
            .unwrap()
            .unwrap();
        let mut rx = cached.subscribe();

        // Second response includes a newer payload for the same profile.
        let mut updated = profile_dto("u1");
        updated.display_name = "John A. Doe".into();
        let item = process::<Item>(
            &store,
            ApiResponse::new(item_dto("i1", Some("u1")), Some(vec![updated.into()])),
        )
        .unwrap();

        // Same cell, fresh value, observed by the old reference.
        assert!(Subject::ptr_eq(&cached, &item.value().creator.unwrap()));
        assert!(rx.has_changed().unwrap());
        assert_eq!(cached.value().display_name, "John A. Doe");
    }

    #[test]
    fn cached_relation_still_requires_inclusion() {
        let store = AppObjectStore::new();
        process::<UserProfile>(&store, ApiResponse::new(profile_dto("u1"), None)).unwrap();

        // The relation is cached but this response neither included it nor
        // resolved it yet: a protocol mismatch, not a cache hit.
        let err = process::<Item>(&store, ApiResponse::new(item_dto("i1", Some("u1")), None))
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::ObjectNotIncluded(ObjectKey::new(ObjectType::UserProfile, "u1"))
        );
    }
}
