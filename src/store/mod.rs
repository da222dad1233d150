// Item store module
// Author: kelexine (https://github.com/kelexine)

pub mod item_store;
pub mod models;

pub use item_store::{ItemStore, SharedStore};
pub use models::{Item, ItemUpdate};
