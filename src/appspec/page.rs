use serde::{Deserialize, Serialize};

use super::card::{FloatingActionButton, ItemCardSpec, ItemCollectionSpec};
use super::form::ItemFormSpec;
use crate::domain::PageContentQuery;

/// The full specification of an app: its top-level pages plus the pages
/// reachable by navigating to an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    pub pages: Vec<PageSpec>,
    pub destination_pages: Vec<DestinationPageSpec>,
}

/// A top-level app page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub id: String,
    pub page_type: PageType,
    /// An object ID if the page belongs to an object (e.g. a user profile
    /// ID).
    #[serde(rename = "objectID", default)]
    pub object_id: Option<String>,
    pub title: String,
    pub icon: String,
    pub subpages: Vec<SubpageSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageType {
    Content,
    UserProfile,
    #[serde(other)]
    Unknown,
}

/// A page reached by navigating to an object rather than from the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPageSpec {
    pub destination_type: DestinationType,
    pub subpages: Vec<SubpageSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationType {
    UserProfile,
    #[serde(other)]
    Unknown,
}

/// One content section of a page. The `content_query` names the page content
/// object the section renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubpageSpec {
    pub id: String,
    pub title: String,
    pub content_query: PageContentQuery,
    pub empty_state_message: String,
    #[serde(default)]
    pub floating_action_button: Option<FloatingActionButton>,
    #[serde(default)]
    pub item_collection_spec: Option<ItemCollectionSpec>,
    #[serde(default)]
    pub item_card_spec: Option<ItemCardSpec>,
    /// If absent, the new-item form is not shown.
    #[serde(default)]
    pub item_form_spec: Option<ItemFormSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_minimal_app_spec() {
        let spec: AppSpec = serde_json::from_value(json!({
            "pages": [{
                "id": "home",
                "pageType": "content",
                "title": "Home",
                "icon": "house",
                "subpages": [{
                    "id": "feed",
                    "title": "Feed",
                    "contentQuery": "allItems",
                    "emptyStateMessage": "Nothing here yet."
                }]
            }],
            "destinationPages": [{
                "destinationType": "userProfile",
                "subpages": []
            }]
        }))
        .unwrap();

        assert_eq!(spec.pages.len(), 1);
        assert_eq!(spec.pages[0].page_type, PageType::Content);
        assert_eq!(spec.pages[0].object_id, None);
        assert_eq!(
            spec.pages[0].subpages[0].content_query,
            PageContentQuery::AllItems
        );
        assert_eq!(
            spec.destination_pages[0].destination_type,
            DestinationType::UserProfile
        );
    }

    #[test]
    fn object_id_uses_the_wire_casing() {
        let page: PageSpec = serde_json::from_value(json!({
            "id": "profile",
            "pageType": "userProfile",
            "objectID": "user-1",
            "title": "Profile",
            "icon": "person",
            "subpages": []
        }))
        .unwrap();
        assert_eq!(page.object_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn unrecognized_page_type_decodes_as_unknown() {
        let page_type: PageType = serde_json::from_value(json!("holographic")).unwrap();
        assert_eq!(page_type, PageType::Unknown);

        let destination: DestinationType = serde_json::from_value(json!("galaxy")).unwrap();
        assert_eq!(destination, DestinationType::Unknown);
    }
}
