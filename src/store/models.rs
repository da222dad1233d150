//! Shopping-list item models.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single shopping-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier. Never reused within a process lifetime.
    pub id: u64,
    pub name: String,
    /// Kept as a JSON number so `2` is echoed back as `2`, not `2.0`.
    pub quantity: Number,
    pub purchased_status: bool,
}

/// Partial update for an existing item.
///
/// Only fields that are `Some` overwrite the stored value. An update with
/// every field `None` is a no-op that still resolves the item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<Number>,
    pub purchased_status: Option<bool>,
}

impl ItemUpdate {
    /// True when no field would be touched.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.purchased_status.is_none()
    }

    fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(purchased_status) = self.purchased_status {
            item.purchased_status = purchased_status;
        }
    }
}

impl Item {
    pub(crate) fn merge(&mut self, update: ItemUpdate) {
        update.apply(self);
    }
}
