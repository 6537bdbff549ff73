#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use appgraph::{
    AnyObjectDto, ApiClient, ApiError, ApiOperation, ApiResponse, ItemCollectionDto, ItemDto,
    ItemType, Layout, PageContentDto, PageContentQuery, UserProfileDto,
};

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn profile_dto(id: &str, username: &str) -> UserProfileDto {
    UserProfileDto {
        id: id.to_string(),
        username: username.to_string(),
        display_name: username.to_string(),
        avatar_url: None,
        bio: None,
        inserted_at: timestamp(),
    }
}

pub fn item_dto(id: &str, creator_id: Option<&str>) -> ItemDto {
    ItemDto {
        id: id.to_string(),
        item_type: ItemType::SocialPost,
        name: None,
        description: None,
        body: Some(format!("body of {id}")),
        image_path: None,
        url: None,
        creator_id: creator_id.map(str::to_string),
        is_liked: false,
        is_saved: false,
        inserted_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn collection_dto(id: &str, item_ids: &[&str]) -> ItemCollectionDto {
    ItemCollectionDto {
        id: id.to_string(),
        name: Some(format!("collection {id}")),
        layout: Layout::VerticalList,
        item_ids: item_ids.iter().map(|id| id.to_string()).collect(),
    }
}

pub fn page_content_dto(
    query: PageContentQuery,
    page_id: Option<&str>,
    object_id: Option<&str>,
    collection_ids: &[&str],
) -> PageContentDto {
    PageContentDto {
        query,
        page_id: page_id.map(str::to_string),
        object_id: object_id.map(str::to_string),
        collection_ids: collection_ids.iter().map(|id| id.to_string()).collect(),
    }
}

/// An in-memory response envelope.
pub fn response<T>(data: T, included: Vec<AnyObjectDto>) -> ApiResponse<T> {
    let included = if included.is_empty() {
        None
    } else {
        Some(included)
    };
    ApiResponse::new(data, included)
}

/// A response envelope in its raw wire shape, for feeding a mock transport.
pub fn wire_response(data: &AnyObjectDto, included: &[AnyObjectDto]) -> Value {
    let mut value = json!({ "data": data.to_value().unwrap() });
    if !included.is_empty() {
        let included: Vec<Value> = included
            .iter()
            .map(|dto| dto.to_value().unwrap())
            .collect();
        value["included"] = Value::Array(included);
    }
    value
}

/// A transport double that replays queued responses and records every call.
pub struct MockApiClient {
    responses: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<(ApiOperation, Value)>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        MockApiClient {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn enqueue(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Every `(operation, params)` performed so far, in order.
    pub fn calls(&self) -> Vec<(ApiOperation, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn perform(&self, operation: ApiOperation, params: Value) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push((operation, params));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ApiError::UnexpectedResponse)
    }
}
