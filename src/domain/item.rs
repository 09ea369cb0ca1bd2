//! Todo item model
//!
//! An item is the unit of the list: an id, a title, and a completion flag.
//! Exactly these three fields are persisted.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// Normalizes a title for uniqueness comparison: trims surrounding
/// whitespace and case-folds. Two titles that normalize equal are
/// considered the same item title.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation and immutable
    pub id: ItemId,

    /// Human-readable title, non-empty after trimming
    pub title: String,

    /// Completion flag
    pub completed: bool,
}

impl Item {
    /// Creates a new, not-yet-completed item
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Returns the normalized form of this item's title
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }
}
