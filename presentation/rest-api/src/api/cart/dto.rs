use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Referenced item identifier
    pub item_id: u64,
    /// Item name when it was last added
    pub name: String,
    /// Item unit price when it was last added
    pub price: f64,
    /// Units of this item in the cart
    pub quantity: u32,
    /// Whether the item was live when it was last added
    pub available: bool,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id.value(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            available: line.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart identifier
    pub id: u64,
    /// Lines in the order the items were first added
    pub items: Vec<CartLineResponse>,
    /// Sum of price times quantity over all lines
    pub price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.value(),
            items: cart.lines().iter().map(CartLineResponse::from).collect(),
            price: cart.total_price(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreatedCartResponse {
    /// Identifier of the new cart
    pub id: u64,
}
