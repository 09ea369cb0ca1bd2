//! Item lifecycle commands: add, edit, toggle, rm, clear

use std::io::{self, Write};

use anyhow::{bail, Result};

use crate::app::{Command, Outcome, Session};
use crate::domain::{Item, ItemId};
use crate::storage::Workspace;

use super::output::Output;

/// Opens the current workspace and a session over its store
pub(super) fn open_session() -> Result<(Workspace, Session)> {
    let workspace = Workspace::open_current()?;
    let session = Session::open(workspace.snapshot_store())?;
    Ok((workspace, session))
}

/// Resolves a full item id or a unique id prefix against the collection
pub(super) fn resolve_id(session: &Session, pattern: &str) -> Result<ItemId> {
    let matches = session.list().matching_prefix(pattern);
    match matches.len() {
        0 => bail!("No item matches '{}'", pattern),
        1 => Ok(matches[0].id.clone()),
        n => bail!(
            "'{}' is ambiguous ({} items match; use a longer prefix)",
            pattern,
            n
        ),
    }
}

fn item_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.to_string(),
        "title": item.title,
        "completed": item.completed,
    })
}

pub fn add(output: &Output, title: &str) -> Result<()> {
    let (_workspace, mut session) = open_session()?;
    output.verbose_ctx("add", &format!("Adding item: {}", title));

    if let Outcome::Added(item) = session.apply(Command::Add {
        title: title.to_string(),
    })? {
        if output.is_json() {
            output.data(&item_json(&item));
        } else {
            output.success(&format!("Added {} - {}", item.id, item.title));
        }
    }

    Ok(())
}

pub fn edit(output: &Output, pattern: &str, title: &str) -> Result<()> {
    let (_workspace, mut session) = open_session()?;
    let id = resolve_id(&session, pattern)?;

    session.apply(Command::BeginEdit { id: id.clone() })?;
    if let Outcome::Edited(item) = session.apply(Command::Edit {
        id,
        title: title.to_string(),
    })? {
        if output.is_json() {
            output.data(&item_json(&item));
        } else {
            output.success(&format!("Updated {} - {}", item.id, item.title));
        }
    }

    Ok(())
}

pub fn toggle(output: &Output, pattern: &str) -> Result<()> {
    let (_workspace, mut session) = open_session()?;
    let id = resolve_id(&session, pattern)?;

    if let Outcome::Toggled(item) = session.apply(Command::Toggle { id })? {
        if output.is_json() {
            output.data(&item_json(&item));
        } else if item.completed {
            output.success(&format!("Completed: {}", item.title));
        } else {
            output.success(&format!("Reopened: {}", item.title));
        }
    }

    Ok(())
}

pub fn remove(output: &Output, pattern: &str) -> Result<()> {
    let (_workspace, mut session) = open_session()?;
    let id = resolve_id(&session, pattern)?;

    if let Outcome::Removed(item) = session.apply(Command::Remove { id })? {
        if output.is_json() {
            output.data(&item_json(&item));
        } else {
            output.success(&format!("Removed {} - {}", item.id, item.title));
        }
    }

    Ok(())
}

pub fn clear(output: &Output, yes: bool) -> Result<()> {
    let (workspace, mut session) = open_session()?;

    let pending = session.list().len();
    session.apply(Command::RequestClear)?;

    if pending == 0 {
        session.apply(Command::CancelClear)?;
        output.success("Nothing to clear");
        return Ok(());
    }

    let confirmed = yes
        || !workspace.config().workspace.confirm_clear
        || confirm(&format!("Remove all {} item(s)? [y/N] ", pending))?;

    if confirmed {
        if let Outcome::Cleared { removed } = session.apply(Command::ConfirmClear)? {
            if output.is_json() {
                output.data(&serde_json::json!({ "cleared": removed }));
            } else {
                output.success(&format!("Removed {} item(s)", removed));
            }
        }
    } else {
        session.apply(Command::CancelClear)?;
        output.success("Clear cancelled");
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
