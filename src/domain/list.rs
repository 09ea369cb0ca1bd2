//! The item store
//!
//! `TodoList` owns the ordered collection of items and every mutation on it.
//! Order is significant: it is the display and persistence order, and the
//! only ordering signal there is. Failed operations leave the collection
//! unchanged.
//!
//! Invariants upheld by every operation:
//! - no two items share a case-insensitive-normalized title
//! - every item has a non-empty trimmed title
//! - item ids are unique

use chrono::Utc;
use thiserror::Error;

use super::id::ItemId;
use super::item::{normalize_title, Item};
use super::reorder::reconcile;

#[derive(Debug, Error, PartialEq)]
pub enum ListError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("An item titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("No item with ID {0}")]
    NotFound(ItemId),
}

/// The full, order-significant collection of items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-validated item sequence (see `SnapshotStore::load`)
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Returns the items in collection order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the list, returning the items in collection order
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Returns all items whose id starts with `prefix` (with or without the
    /// `i-` prefix). Used for short-id addressing in the CLI.
    pub fn matching_prefix(&self, prefix: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.id.matches_prefix(prefix))
            .collect()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Checks whether `normalized` collides with an existing title.
    /// `exclude` skips the item being edited so it can keep its own title.
    fn has_title(&self, normalized: &str, exclude: Option<&ItemId>) -> bool {
        self.items
            .iter()
            .filter(|item| exclude != Some(&item.id))
            .any(|item| item.normalized_title() == normalized)
    }

    /// Adds a new item at the front of the list (newest-first)
    pub fn add(&mut self, title: &str) -> Result<&Item, ListError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyTitle);
        }

        let normalized = normalize_title(trimmed);
        if self.has_title(&normalized, None) {
            return Err(ListError::DuplicateTitle(trimmed.to_string()));
        }

        let item = Item::new(ItemId::new(trimmed, Utc::now()), trimmed);
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Retitles an item in place without changing its position.
    /// The uniqueness check excludes the item itself, so editing an item
    /// to its current title succeeds.
    pub fn edit(&mut self, id: &ItemId, new_title: &str) -> Result<(), ListError> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyTitle);
        }

        let normalized = normalize_title(trimmed);
        if self.has_title(&normalized, Some(id)) {
            return Err(ListError::DuplicateTitle(trimmed.to_string()));
        }

        let index = self.position(id).ok_or_else(|| ListError::NotFound(id.clone()))?;
        self.items[index].title = trimmed.to_string();
        Ok(())
    }

    /// Flips an item's completion flag, returning the new value
    pub fn toggle(&mut self, id: &ItemId) -> Result<bool, ListError> {
        let index = self.position(id).ok_or_else(|| ListError::NotFound(id.clone()))?;
        let item = &mut self.items[index];
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Deletes an item, preserving the relative order of the remainder
    pub fn remove(&mut self, id: &ItemId) -> Result<Item, ListError> {
        let index = self.position(id).ok_or_else(|| ListError::NotFound(id.clone()))?;
        Ok(self.items.remove(index))
    }

    /// Empties the list unconditionally, returning the removed count
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Applies a new order for the visible subsequence, merging it back into
    /// the full collection (see [`reconcile`])
    pub fn reorder(&mut self, visible_order: &[ItemId]) {
        self.items = reconcile(std::mem::take(&mut self.items), visible_order);
    }
}
