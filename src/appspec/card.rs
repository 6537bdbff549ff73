use serde::{Deserialize, Serialize};

/// A floating action button shown on a subpage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingActionButton {
    pub icon: String,
    pub action: FabAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FabAction {
    AddItem,
    AddCollection,
    #[serde(other)]
    Unknown,
}

/// The controls shown on each item card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCardSpec {
    #[serde(default)]
    pub icon_buttons: Option<Vec<ItemCardIconButton>>,
    #[serde(default)]
    pub menu_items: Option<Vec<ItemCardMenuItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCardIconButton {
    pub icon: String,
    pub action: ItemCardIconButtonAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCardIconButtonAction {
    Like,
    Save,
    #[serde(other)]
    Unknown,
}

/// An entry in an item card's overflow menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCardMenuItem {
    pub action: ItemCardMenuAction,
    pub visibility_rule: MenuItemVisibilityRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCardMenuAction {
    Delete,
    #[serde(other)]
    Unknown,
}

/// When a menu item is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuItemVisibilityRule {
    /// The menu item is always shown.
    Always,
    /// The menu item is shown on the current user's items only.
    Own,
    #[serde(other)]
    Unknown,
}

/// How collections behave on a subpage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCollectionSpec {
    pub new_item_button_enabled: bool,
    #[serde(default)]
    pub menu_items: Option<Vec<ItemCollectionMenuItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCollectionMenuItem {
    pub action: CollectionMenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionMenuAction {
    Delete,
    #[serde(other)]
    Unknown,
}
