//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate stands on its own without linking against axum. The
//! end-to-end tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for creating or updating an item. The server replaces
/// both fields on update, so omitting `description` clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}
