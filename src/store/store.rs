//! AppObjectStore: the identity map for app objects.
//!
//! One live cell exists per [`ObjectKey`] at any time. Merging a key that is
//! already present mutates the existing cell in place (preserving identity)
//! rather than allocating a new one; views hold long-lived references to
//! cells, not values, so identity is what keeps them in sync.
//!
//! All reads and writes of the backing table happen inside a transaction,
//! a serialized, exclusive-access window. Reads of individual cells' current
//! values by outside observers go through the cells themselves and are not
//! gated by the store lock.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Mutex;

use super::error::StoreError;
use crate::object::{AppObject, ObjectKey};
use crate::subject::Subject;

type AnyCell = Box<dyn Any + Send + Sync>;

/// A centralized store for objects shared throughout an app.
///
/// ## Example
///
/// ```ignore
/// let store = AppObjectStore::new();
/// let subject = store.transaction(|proxy| {
///     Ok::<_, StoreError>(proxy.merge("1", profile))
/// })?;
/// ```
pub struct AppObjectStore {
    objects: Mutex<HashMap<ObjectKey, AnyCell>>,
}

impl AppObjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        AppObjectStore {
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Run a store operation within a transaction.
    ///
    /// Transactions are serialized: at most one body executes at a time, so
    /// the body has exclusive access to the table through the [`StoreProxy`].
    /// Bodies must be synchronous and fast: fetch and decode before entering
    /// the transaction, merge inside it. Async callers sequence naturally by
    /// calling this between awaits; the lock is never held across an await
    /// point.
    ///
    /// An error returned by the body aborts the transaction and propagates
    /// unchanged.
    pub fn transaction<R, E>(
        &self,
        body: impl FnOnce(&mut StoreProxy<'_>) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut objects = self.objects.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut proxy = StoreProxy {
            objects: &mut objects,
        };
        body(&mut proxy)
    }

    /// Number of objects currently cached, across all types.
    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been merged yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AppObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

/// Exclusive access to the store's table for the duration of one
/// transaction.
pub struct StoreProxy<'a> {
    objects: &'a mut HashMap<ObjectKey, AnyCell>,
}

impl StoreProxy<'_> {
    /// Look up the cell for `(T, id)`, if it exists.
    ///
    /// The type is part of the identity: an ID cached under a different
    /// object type is a miss, never a wrong-typed value.
    pub fn get<T: AppObject>(&self, id: &str) -> Option<Subject<T>> {
        let key = ObjectKey::new(T::OBJECT_TYPE, id);
        self.objects
            .get(&key)?
            .downcast_ref::<Subject<T>>()
            .cloned()
    }

    /// Merge `new_value` into the store.
    ///
    /// If the key is absent a new cell is allocated; otherwise the existing
    /// cell's value is replaced and its subscribers notified. Either way the
    /// returned cell identity is stable for the lifetime of the store.
    pub fn merge<T: AppObject>(&mut self, id: &str, new_value: T) -> Subject<T> {
        if let Some(existing) = self.get::<T>(id) {
            existing.send(new_value);
            return existing;
        }
        let subject = Subject::new(new_value);
        self.objects.insert(
            ObjectKey::new(T::OBJECT_TYPE, id),
            Box::new(subject.clone()),
        );
        subject
    }

    /// Apply `updates` to every currently-cached cell of type `T`.
    ///
    /// Used for cross-cutting side effects ("remove this item from every
    /// collection that holds it"). The slice order is unspecified.
    pub fn update_all<T: AppObject, E>(
        &mut self,
        updates: impl FnOnce(&[Subject<T>]) -> Result<(), E>,
    ) -> Result<(), E> {
        let targets: Vec<Subject<T>> = self
            .objects
            .iter()
            .filter(|(key, _)| key.object_type == T::OBJECT_TYPE)
            .filter_map(|(_, cell)| cell.downcast_ref::<Subject<T>>().cloned())
            .collect();
        updates(&targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::{Item, ItemType, UserProfile};

    fn profile(id: &str, username: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            username: username.to_string(),
            display_name: username.to_string(),
            avatar_url: None,
            bio: None,
            inserted_at: Utc::now(),
        }
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            item_type: ItemType::SocialPost,
            name: None,
            description: None,
            body: None,
            image_path: None,
            url: None,
            creator: None,
            is_liked: false,
            is_saved: false,
            inserted_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_store_returns_no_cell() {
        let store = AppObjectStore::new();
        let missing = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.get::<Item>("1")))
            .unwrap();
        assert!(missing.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn merge_inserts_then_finds() {
        let store = AppObjectStore::new();
        let merged = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.merge("1", item("1"))))
            .unwrap();
        assert_eq!(merged.value().id, "1");

        let found = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.get::<Item>("1")))
            .unwrap()
            .expect("cell should exist");
        assert!(Subject::ptr_eq(&merged, &found));
    }

    #[test]
    fn lookup_is_type_scoped() {
        let store = AppObjectStore::new();
        store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.merge("1", item("1"))))
            .unwrap();

        // Same ID, different type: a miss, never a wrong-typed value.
        let wrong_type = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.get::<UserProfile>("1")))
            .unwrap();
        assert!(wrong_type.is_none());

        let wrong_id = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.get::<Item>("2")))
            .unwrap();
        assert!(wrong_id.is_none());
    }

    #[test]
    fn merge_existing_preserves_identity_and_updates_value() {
        let store = AppObjectStore::new();
        let first = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.merge("1", profile("1", "johndoe"))))
            .unwrap();
        let mut rx = first.subscribe();

        let second = store
            .transaction(|proxy| Ok::<_, StoreError>(proxy.merge("1", profile("1", "janedoe"))))
            .unwrap();

        assert!(Subject::ptr_eq(&first, &second));
        // The previously-held reference observes the update.
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().username, "janedoe");
        assert_eq!(first.value().username, "janedoe");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_all_sees_only_cells_of_the_requested_type() {
        let store = AppObjectStore::new();
        store
            .transaction(|proxy| {
                proxy.merge("1", item("1"));
                proxy.merge("2", item("2"));
                proxy.merge("1", profile("1", "johndoe"));
                Ok::<_, StoreError>(())
            })
            .unwrap();

        store
            .transaction(|proxy| {
                proxy.update_all(|items: &[Subject<Item>]| {
                    assert_eq!(items.len(), 2);
                    Ok::<_, StoreError>(())
                })
            })
            .unwrap();

        store
            .transaction(|proxy| {
                proxy.update_all(|profiles: &[Subject<UserProfile>]| {
                    assert_eq!(profiles.len(), 1);
                    Ok::<_, StoreError>(())
                })
            })
            .unwrap();
    }

    #[test]
    fn update_all_with_no_matching_cells_sees_empty_slice() {
        let store = AppObjectStore::new();
        store
            .transaction(|proxy| {
                proxy.update_all(|items: &[Subject<Item>]| {
                    assert!(items.is_empty());
                    Ok::<_, StoreError>(())
                })
            })
            .unwrap();
    }

    #[test]
    fn body_errors_abort_and_propagate() {
        let store = AppObjectStore::new();
        let err = store
            .transaction(|_proxy| Err::<(), StoreError>(StoreError::LockPoisoned))
            .unwrap_err();
        assert_eq!(err, StoreError::LockPoisoned);
    }

    #[test]
    fn concurrent_merges_of_one_key_share_a_cell() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(AppObjectStore::new());
        let handles: Vec<_> = (0..100)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .transaction(|proxy| {
                            Ok::<_, StoreError>(proxy.merge("1", item("1")))
                        })
                        .unwrap()
                })
            })
            .collect();

        let subjects: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("merge thread panicked"))
            .collect();

        // No duplicate allocation races: every transaction saw the same cell.
        for subject in &subjects[1..] {
            assert!(Subject::ptr_eq(&subjects[0], subject));
        }
        assert_eq!(store.len(), 1);
    }
}
