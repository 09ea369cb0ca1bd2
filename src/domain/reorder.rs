//! Reorder reconciliation
//!
//! A reorder gesture only ever supplies a new order for the currently
//! visible subsequence; the filter and search may be hiding arbitrary items.
//! `reconcile` merges the permuted visible order back into the full
//! collection: visible items come first, in their new order, followed by
//! every hidden item in its original relative order.
//!
//! Hidden-item placement is a policy choice: after any reorder, hidden
//! items end up below the visible ones, keeping their mutual order.

use super::id::ItemId;
use super::item::Item;

/// Merges a new visible-order id sequence into the full collection.
///
/// Ids in `visible_order` that don't exist in `items` are ignored, and a
/// repeated id moves an item only once; the result always holds exactly the
/// items that went in, each exactly once.
pub fn reconcile(items: Vec<Item>, visible_order: &[ItemId]) -> Vec<Item> {
    let mut remaining: Vec<Option<Item>> = items.into_iter().map(Some).collect();
    let mut merged = Vec::with_capacity(remaining.len());

    for id in visible_order {
        for slot in remaining.iter_mut() {
            if slot.as_ref().is_some_and(|item| &item.id == id) {
                if let Some(item) = slot.take() {
                    merged.push(item);
                }
                break;
            }
        }
    }

    // Hidden items keep their mutual order
    merged.extend(remaining.into_iter().flatten());
    merged
}
