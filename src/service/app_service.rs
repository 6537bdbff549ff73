use std::sync::Arc;

use serde_json::{json, Value};

use super::api::{ApiClient, ApiOperation};
use super::error::ServiceError;
use crate::appspec::AppSpec;
use crate::domain::{
    ItemCollectionSubject, ItemSubject, ItemType, PageContentQuery, PageContentSubject,
    PageContext,
};
use crate::dto::{DecodeError, DtoRegistry, ItemCollectionDto, ItemDto, PageContentDto};
use crate::model::AppModel;
use crate::response::ApiResponse;

/// Content and item operations for one app.
///
/// Each method performs one API operation and routes the response through
/// the model, so the store reflects the backend's answer before the call
/// returns.
pub struct AppService {
    app_id: String,
    api_client: Arc<dyn ApiClient>,
    app_model: Arc<AppModel>,
    registry: DtoRegistry,
}

impl AppService {
    pub fn new(
        app_id: impl Into<String>,
        api_client: Arc<dyn ApiClient>,
        app_model: Arc<AppModel>,
    ) -> Self {
        Self::with_registry(app_id, api_client, app_model, DtoRegistry::default())
    }

    /// Like [`AppService::new`], with a registry carrying decode overrides.
    pub fn with_registry(
        app_id: impl Into<String>,
        api_client: Arc<dyn ApiClient>,
        app_model: Arc<AppModel>,
        registry: DtoRegistry,
    ) -> Self {
        AppService {
            app_id: app_id.into(),
            api_client,
            app_model,
            registry,
        }
    }

    /// Fetch the app spec.
    pub async fn app_spec(&self) -> Result<AppSpec, ServiceError> {
        let value = self
            .api_client
            .perform(ApiOperation::AppSpec, json!({ "appId": self.app_id }))
            .await?;
        let spec: AppSpec = serde_json::from_value(value).map_err(DecodeError::from)?;
        Ok(spec)
    }

    /// Fetch the content of a page and upsert it into the store.
    pub async fn page_content(
        &self,
        query: PageContentQuery,
        page_context: &PageContext,
    ) -> Result<PageContentSubject, ServiceError> {
        let value = self
            .api_client
            .perform(
                ApiOperation::PageContent,
                json!({
                    "appId": self.app_id,
                    "query": query,
                    "pageId": page_context.page_id,
                    "objectId": page_context.object_id,
                }),
            )
            .await?;
        let response = self.registry.decode_response::<PageContentDto>(value)?;
        Ok(self.app_model.upsert_page_content(response)?)
    }

    /// Create an item from form fields.
    ///
    /// With a collection ID the item lands in that collection; without one
    /// it lands in the page default collections.
    pub async fn create_item(
        &self,
        fields: Value,
        item_type: ItemType,
        collection_id: Option<&str>,
    ) -> Result<ItemSubject, ServiceError> {
        let mut params = match fields {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        params.insert("itemType".into(), json!(item_type));
        params.insert("appId".into(), Value::String(self.app_id.clone()));
        if let Some(collection_id) = collection_id {
            params.insert("collectionId".into(), Value::String(collection_id.to_string()));
        }

        let value = self
            .api_client
            .perform(ApiOperation::ItemCreate, Value::Object(params))
            .await?;
        let response = self.registry.decode_response::<ItemDto>(value)?;
        let subject = match collection_id {
            Some(collection_id) => self.app_model.add_collection_item(response, collection_id)?,
            None => self.app_model.add_item(response)?,
        };
        Ok(subject)
    }

    /// Delete an item and remove it from every cached page.
    pub async fn delete_item(&self, item_id: &str) -> Result<(), ServiceError> {
        self.api_client
            .perform(ApiOperation::ItemDelete, json!({ "itemId": item_id }))
            .await?;
        Ok(self.app_model.remove_item(item_id)?)
    }

    /// Create a named item collection.
    pub async fn create_collection(
        &self,
        name: &str,
    ) -> Result<ItemCollectionSubject, ServiceError> {
        let value = self
            .api_client
            .perform(
                ApiOperation::ItemCollectionCreate,
                json!({ "appId": self.app_id, "name": name }),
            )
            .await?;
        let response = self.registry.decode_response::<ItemCollectionDto>(value)?;
        Ok(self.app_model.add_collection(response)?)
    }

    /// Delete a collection and remove it from every cached page.
    pub async fn delete_collection(&self, collection_id: &str) -> Result<(), ServiceError> {
        self.api_client
            .perform(
                ApiOperation::ItemCollectionDelete,
                json!({ "collectionId": collection_id }),
            )
            .await?;
        Ok(self.app_model.remove_collection(collection_id)?)
    }

    /// Like an item.
    pub async fn like_item(&self, item_id: &str) -> Result<ItemSubject, ServiceError> {
        let response = self.item_operation(ApiOperation::ItemLike, item_id).await?;
        Ok(self.app_model.add_liked_item(response)?)
    }

    /// Unlike an item.
    pub async fn unlike_item(&self, item_id: &str) -> Result<ItemSubject, ServiceError> {
        let response = self.item_operation(ApiOperation::ItemUnlike, item_id).await?;
        Ok(self.app_model.remove_unliked_item(response)?)
    }

    /// Save an item.
    pub async fn save_item(&self, item_id: &str) -> Result<ItemSubject, ServiceError> {
        let response = self.item_operation(ApiOperation::ItemSave, item_id).await?;
        Ok(self.app_model.add_saved_item(response)?)
    }

    /// Unsave an item.
    pub async fn unsave_item(&self, item_id: &str) -> Result<ItemSubject, ServiceError> {
        let response = self.item_operation(ApiOperation::ItemUnsave, item_id).await?;
        Ok(self.app_model.remove_unsaved_item(response)?)
    }

    async fn item_operation(
        &self,
        operation: ApiOperation,
        item_id: &str,
    ) -> Result<ApiResponse<ItemDto>, ServiceError> {
        let value = self
            .api_client
            .perform(operation, json!({ "itemId": item_id }))
            .await?;
        Ok(self.registry.decode_response::<ItemDto>(value)?)
    }
}
