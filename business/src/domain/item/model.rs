use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::errors::ItemError;
use crate::domain::shared::value_objects::ItemId;

const PATCHABLE_FIELDS: [&str; 2] = ["name", "price"];

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated attributes of an item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    price: f64,
}

impl NewItem {
    pub fn new(name: String, price: f64) -> Result<Self, ItemError> {
        validate_name(&name)?;
        validate_price(price)?;
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Partial update with one optional slot per mutable attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    /// Builds a patch from a raw JSON object.
    ///
    /// Any key other than `name` or `price` is rejected before anything is built.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ItemError> {
        if let Some(unknown) = fields
            .keys()
            .find(|key| !PATCHABLE_FIELDS.contains(&key.as_str()))
        {
            return Err(ItemError::UnknownField(unknown.clone()));
        }

        let name = match fields.get("name") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(ItemError::InvalidPatch),
        };
        let price = match fields.get("price") {
            None => None,
            Some(value) => Some(value.as_f64().ok_or(ItemError::InvalidPatch)?),
        };

        Ok(Self { name, price })
    }

    fn validate(&self) -> Result<(), ItemError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

/// A mutation applied atomically to a stored item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemChange {
    Replace(NewItem),
    Patch(ItemPatch),
    MarkDeleted,
}

impl ItemChange {
    pub fn replace(name: String, price: f64) -> Result<Self, ItemError> {
        Ok(ItemChange::Replace(NewItem::new(name, price)?))
    }

    pub fn patch(patch: ItemPatch) -> Result<Self, ItemError> {
        patch.validate()?;
        Ok(ItemChange::Patch(patch))
    }
}

impl Item {
    pub fn create(id: ItemId, draft: NewItem) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            price: draft.price,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.deleted
    }

    /// Applies `change` in place. Only a patch can fail, and only on a deleted item.
    ///
    /// Replace keeps the `deleted` flag as it is; deletion never reverts.
    pub fn apply(&mut self, change: ItemChange) -> Result<(), ItemError> {
        match change {
            ItemChange::Replace(draft) => {
                self.name = draft.name;
                self.price = draft.price;
            }
            ItemChange::Patch(patch) => {
                if self.deleted {
                    return Err(ItemError::Deleted);
                }
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(price) = patch.price {
                    self.price = price;
                }
            }
            ItemChange::MarkDeleted => self.deleted = true,
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ItemError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ItemError::InvalidPrice);
    }
    Ok(())
}
