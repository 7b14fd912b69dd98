use chrono::{DateTime, Utc};

use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{CartId, ItemId};

/// Snapshot of an item held by a cart, plus the accumulated quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub available: bool,
}

impl CartLine {
    fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
            available: item.is_visible(),
        }
    }

    fn refresh(&mut self, item: &Item) {
        self.name = item.name.clone();
        self.price = item.price;
        self.available = item.is_visible();
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A customer cart. Totals are always derived from `lines`, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    lines: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        let now = Utc::now();
        Self {
            id,
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Lines in insertion order, at most one per item.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of `item`.
    ///
    /// An existing line for the same item gets its quantity bumped and its
    /// snapshot refreshed; otherwise a new line is appended.
    pub fn add_item(&mut self, item: &Item) {
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.refresh(item);
            }
            None => self.lines.push(CartLine::from_item(item)),
        }
        self.updated_at = Utc::now();
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}
