use serde::{Deserialize, Serialize};

use super::ItemCollectionSubject;
use crate::dto::PageContentDto;
use crate::object::{AppObject, ObjectType, ProviderError, RelatedObjectProvider};

/// The materialized result of one content query, scoped to a page context.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// The content query this page shows.
    pub query: PageContentQuery,
    /// Whose / which page the query is scoped to.
    pub page_context: PageContext,
    /// Item collections, in display order.
    pub collections: Vec<ItemCollectionSubject>,
}

impl PageContent {
    /// The derived ID: the non-empty parts of (query, page ID, object ID)
    /// joined with `_`. Stable and recomputable, so repeated fetches of the
    /// same page content always coalesce to one cell.
    pub fn id(&self) -> String {
        derive_page_content_id(
            self.query,
            self.page_context.page_id.as_deref(),
            self.page_context.object_id.as_deref(),
        )
    }
}

/// Join the defined parts of a page-content identity with `_`.
pub(crate) fn derive_page_content_id(
    query: PageContentQuery,
    page_id: Option<&str>,
    object_id: Option<&str>,
) -> String {
    [Some(query.as_str()), page_id, object_id]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("_")
}

/// Contextual information about a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageContext {
    /// A page ID.
    pub page_id: Option<String>,
    /// An object ID, if the page belongs to an object (e.g. a user profile).
    pub object_id: Option<String>,
}

impl PageContext {
    pub fn new(page_id: Option<String>, object_id: Option<String>) -> Self {
        PageContext { page_id, object_id }
    }

    /// Whether the page belongs to the given user: a page with no object ID
    /// is the current user's own page.
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.object_id.is_none() || self.object_id.as_deref() == Some(user_id)
    }
}

/// A page content query type.
///
/// Open vocabulary: unrecognized wire values decode to
/// [`PageContentQuery::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageContentQuery {
    /// All items.
    AllItems,
    /// Item collections.
    Collections,
    /// Items created by the owner of the page.
    CreatorItems,
    /// Items saved by the owner of the page.
    Saves,
    /// Items liked by the owner of the page.
    Likes,
    /// An unknown query.
    #[serde(other)]
    Unknown,
}

impl PageContentQuery {
    /// The wire name of the query.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContentQuery::AllItems => "allItems",
            PageContentQuery::Collections => "collections",
            PageContentQuery::CreatorItems => "creatorItems",
            PageContentQuery::Saves => "saves",
            PageContentQuery::Likes => "likes",
            PageContentQuery::Unknown => "unknown",
        }
    }
}

impl AppObject for PageContent {
    const OBJECT_TYPE: ObjectType = ObjectType::PageContent;

    type Dto = PageContentDto;

    fn id(&self) -> String {
        derive_page_content_id(
            self.query,
            self.page_context.page_id.as_deref(),
            self.page_context.object_id.as_deref(),
        )
    }

    fn from_dto(
        dto: &PageContentDto,
        provider: &mut dyn RelatedObjectProvider,
    ) -> Result<Self, ProviderError> {
        let collections = dto
            .collection_ids
            .iter()
            .map(|collection_id| provider.item_collection(collection_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PageContent {
            query: dto.query,
            page_context: PageContext::new(dto.page_id.clone(), dto.object_id.clone()),
            collections,
        })
    }
}
