use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of app object types.
///
/// Each type is associated with exactly one DTO (wire) shape and one domain
/// (runtime) shape. The set is closed on purpose: an unrecognized `type`
/// discriminator in a response is a protocol error, not a forward-compatible
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    /// A page's content.
    PageContent,
    /// An item collection.
    ItemCollection,
    /// An item created by an app user.
    Item,
    /// A user profile.
    UserProfile,
}

impl ObjectType {
    /// The wire name of the type, as used in the `type` discriminator field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::PageContent => "pageContent",
            ObjectType::ItemCollection => "itemCollection",
            ObjectType::Item => "item",
            ObjectType::UserProfile => "userProfile",
        }
    }

    /// Parse a wire name back into an `ObjectType`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pageContent" => Some(ObjectType::PageContent),
            "itemCollection" => Some(ObjectType::ItemCollection),
            "item" => Some(ObjectType::Item),
            "userProfile" => Some(ObjectType::UserProfile),
            _ => None,
        }
    }

    /// All object types, in declaration order.
    pub fn all() -> [ObjectType; 4] {
        [
            ObjectType::PageContent,
            ObjectType::ItemCollection,
            ObjectType::Item,
            ObjectType::UserProfile,
        ]
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A composite key that uniquely identifies an app object by type and ID.
///
/// The type is part of the identity: an `Item` with ID `"1"` and a
/// `UserProfile` with ID `"1"` are distinct objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    /// An app object type.
    pub object_type: ObjectType,
    /// An app object ID.
    pub object_id: String,
}

impl ObjectKey {
    /// Create a key for the given type and ID.
    pub fn new(object_type: ObjectType, object_id: impl Into<String>) -> Self {
        ObjectKey {
            object_type,
            object_id: object_id.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object_type, self.object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for object_type in ObjectType::all() {
            assert_eq!(ObjectType::parse(object_type.as_str()), Some(object_type));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ObjectType::parse("somethingNewV7"), None);
        assert_eq!(ObjectType::parse(""), None);
    }

    #[test]
    fn keys_differ_by_type() {
        let item_key = ObjectKey::new(ObjectType::Item, "1");
        let profile_key = ObjectKey::new(ObjectType::UserProfile, "1");
        assert_ne!(item_key, profile_key);
        assert_eq!(item_key, ObjectKey::new(ObjectType::Item, "1"));
    }

    #[test]
    fn display_includes_type_and_id() {
        let key = ObjectKey::new(ObjectType::UserProfile, "42");
        assert_eq!(key.to_string(), "userProfile:42");
    }
}
