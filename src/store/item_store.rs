// In-memory item store - owns the item collection and the id counter
// Author: kelexine (https://github.com/kelexine)

use crate::metrics;
use crate::store::models::{Item, ItemUpdate};
use parking_lot::RwLock;
use serde_json::Number;
use std::sync::Arc;
use tracing::debug;

/// Store handle shared between request handlers.
///
/// Every handler takes the lock for a single store call and releases it
/// before touching the response, so no guard is ever held across an await.
pub type SharedStore = Arc<RwLock<ItemStore>>;

/// Owner of all item state.
///
/// Items are kept in insertion order. Ids come from a monotonic counter that
/// starts at zero and is never rewound, so deleted ids are never handed out again.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing across handlers
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// All items in insertion order
    pub fn list_items(&self) -> &[Item] {
        metrics::record_store_operation("list");
        &self.items
    }

    /// Look up an item by id. Absence is not an error.
    pub fn get_item(&self, id: u64) -> Option<&Item> {
        metrics::record_store_operation("get");
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item and return it.
    ///
    /// Inputs are taken as-is; rejecting empty names is the caller's job.
    pub fn create_item(&mut self, name: String, quantity: Number, purchased_status: bool) -> Item {
        let id = self.next_id;
        self.next_id += 1;

        let item = Item {
            id,
            name,
            quantity,
            purchased_status,
        };
        self.items.push(item.clone());

        debug!("Created item {} ({} items stored)", id, self.items.len());
        metrics::record_store_operation("create");
        metrics::update_item_count(self.items.len());
        item
    }

    /// Overwrite the supplied fields of an existing item in place
    pub fn update_item(&mut self, id: u64, update: ItemUpdate) -> Option<Item> {
        metrics::record_store_operation("update");
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.merge(update);
        debug!("Updated item {}", id);
        Some(item.clone())
    }

    /// Remove an item. Returns false when the id is unknown.
    pub fn delete_item(&mut self, id: u64) -> bool {
        metrics::record_store_operation("delete");
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        self.items.remove(pos);
        debug!("Deleted item {} ({} items remain)", id, self.items.len());
        metrics::update_item_count(self.items.len());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
