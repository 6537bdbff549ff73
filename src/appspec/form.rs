use serde::{Deserialize, Serialize};

use crate::domain::ItemType;

/// The form used to create a new item on a subpage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFormSpec {
    pub item_type: ItemType,
    pub title: String,
    pub fields: Vec<FormFieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldSpec {
    pub content_type: FormFieldContentType,
    pub name: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldContentType {
    Text,
    Image,
    Url,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_an_item_form() {
        let form: ItemFormSpec = serde_json::from_value(json!({
            "itemType": "socialPost",
            "title": "New post",
            "fields": [
                { "contentType": "text", "name": "body", "placeholder": "Say something", "required": true },
                { "contentType": "image", "name": "photo", "required": false }
            ]
        }))
        .unwrap();

        assert_eq!(form.item_type, ItemType::SocialPost);
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[0].content_type, FormFieldContentType::Text);
        assert_eq!(form.fields[1].placeholder, None);
    }

    #[test]
    fn unrecognized_content_type_decodes_as_unknown() {
        let content_type: FormFieldContentType =
            serde_json::from_value(json!("hologram")).unwrap();
        assert_eq!(content_type, FormFieldContentType::Unknown);
    }
}
