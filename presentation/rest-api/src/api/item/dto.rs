use poem_openapi::Object;

use business::domain::item::model::Item;

/// Body of item creation and full replacement.
#[derive(Debug, Clone, Object)]
pub struct ItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.value(),
            name: item.name,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
