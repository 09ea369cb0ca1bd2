//! Reordering within the visible list
//!
//! `move` acts on the same projection `list` shows: the filter and search
//! flags define the visible list, the target position is 1-based within it,
//! and the reconciler merges the new visible order back into the full
//! collection.

use anyhow::{bail, Result};

use crate::app::Command;
use crate::domain::{ItemId, StatusFilter};

use super::item::{open_session, resolve_id};
use super::output::Output;

pub fn move_item(
    output: &Output,
    pattern: &str,
    position: usize,
    filter: Option<StatusFilter>,
    search: Option<&str>,
) -> Result<()> {
    let (workspace, mut session) = open_session()?;

    let filter = filter.unwrap_or(workspace.config().workspace.default_filter);
    session.apply(Command::SetFilter(filter))?;
    if let Some(query) = search {
        session.apply(Command::SetQuery(query.to_string()))?;
    }

    let id = resolve_id(&session, pattern)?;
    let mut order: Vec<ItemId> = session.visible().iter().map(|item| item.id.clone()).collect();

    let from = match order.iter().position(|candidate| candidate == &id) {
        Some(index) => index,
        None => bail!(
            "Item {} is not in the current view (check --filter and --search)",
            id
        ),
    };

    if position == 0 || position > order.len() {
        bail!("Position must be between 1 and {}", order.len());
    }

    let moved = order.remove(from);
    order.insert(position - 1, moved);

    output.verbose_ctx(
        "move",
        &format!(
            "New visible order: {:?}",
            order.iter().map(ToString::to_string).collect::<Vec<_>>()
        ),
    );

    session.apply(Command::Reorder {
        visible_order: order,
    })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.to_string(),
            "position": position,
        }));
    } else {
        output.success(&format!("Moved {} to position {}", id, position));
    }

    Ok(())
}
