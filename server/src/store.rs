//! In-memory item store.
//!
//! # Design
//! `ItemStore` is an explicitly owned value, constructed once at process
//! start and handed to the router as shared state — never a module-level
//! global. Tests build as many isolated instances as they need. Items live
//! in a `Vec` so the collection keeps insertion order, and ids come from a
//! counter that only moves forward, so an id is never reused even after the
//! item it belonged to is deleted.

use serde::{Deserialize, Serialize};

/// A single item as stored and as returned by the API.
///
/// `description` is omitted from the JSON representation when absent, so the
/// wire shape is `{id, name}` or `{id, name, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for creating or updating an item.
///
/// Update semantics are whole-fields replacement: both `name` and
/// `description` are written as given, so an omitted `description` clears
/// any existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Owner of the item collection and of id allocation.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    /// An empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// The fixed seed the server boots with: two items, counter at 3.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Item {
                    id: 1,
                    name: "First Item".to_string(),
                    description: Some("This is the first item.".to_string()),
                },
                Item {
                    id: 2,
                    name: "Second Item".to_string(),
                    description: None,
                },
            ],
            next_id: 3,
        }
    }

    /// All items in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Allocate the next id, append a new item, and return it.
    pub fn create(&mut self, input: ItemInput) -> Item {
        let item = Item {
            id: self.next_id,
            name: input.name,
            description: input.description,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Replace the name and description of the item with `id` in place.
    /// The id and the item's position in the collection are unchanged.
    pub fn update(&mut self, id: u64, input: ItemInput) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.name = input.name;
        item.description = input.description;
        Some(item.clone())
    }

    /// Remove the item with `id`. Returns whether a removal occurred.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
