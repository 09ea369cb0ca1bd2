//! Commands and their outcomes
//!
//! Every user gesture maps to one command value. Destructive clearing is
//! two-phase (`RequestClear` then `ConfirmClear`) so the decision point is
//! testable without a real prompt.

use crate::domain::{Item, ItemId, StatusFilter};

/// A discrete user gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new item at the front of the list
    Add { title: String },

    /// Retitle an item in place
    Edit { id: ItemId, title: String },

    /// Flip an item's completion flag
    Toggle { id: ItemId },

    /// Delete an item
    Remove { id: ItemId },

    /// First phase of clearing: arm the pending-clear gate
    RequestClear,

    /// Second phase of clearing: empty the list (requires a pending request)
    ConfirmClear,

    /// Abandon a pending clear request
    CancelClear,

    /// Change the status filter
    SetFilter(StatusFilter),

    /// Change the search query
    SetQuery(String),

    /// Mark an item as the editing target
    BeginEdit { id: ItemId },

    /// Drop the editing target without changing anything
    CancelEdit,

    /// Apply a new order for the visible subsequence
    Reorder { visible_order: Vec<ItemId> },
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Item),
    Edited(Item),
    Toggled(Item),
    Removed(Item),
    ClearRequested { pending: usize },
    Cleared { removed: usize },
    ClearCancelled,
    ViewChanged,
    EditStarted(ItemId),
    EditCancelled,
    Reordered,
}
