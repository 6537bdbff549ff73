use serde::{Deserialize, Serialize};

use super::AnyObjectDto;
use crate::domain::{derive_page_content_id, PageContent, PageContentQuery};
use crate::object::AppObjectDto;

/// The wire shape of a page's content.
///
/// Carries no explicit ID: the identity is derived from the query and the
/// page context, so repeated fetches of the same page coalesce to one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContentDto {
    pub query: PageContentQuery,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub object_id: Option<String>,
    /// Collection IDs in display order, resolved against `included`.
    pub collection_ids: Vec<String>,
}

impl AppObjectDto for PageContentDto {
    type Object = PageContent;

    fn id(&self) -> String {
        derive_page_content_id(self.query, self.page_id.as_deref(), self.object_id.as_deref())
    }

    fn from_any(any: &AnyObjectDto) -> Option<&Self> {
        match any {
            AnyObjectDto::PageContent(dto) => Some(dto),
            _ => None,
        }
    }
}
