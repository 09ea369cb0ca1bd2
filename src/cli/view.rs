//! View commands: list and status

use anyhow::Result;

use crate::app::Command;
use crate::domain::StatusFilter;

use super::item::open_session;
use super::output::Output;

pub fn list(output: &Output, filter: Option<StatusFilter>, search: Option<&str>) -> Result<()> {
    let (workspace, mut session) = open_session()?;

    let filter = filter.unwrap_or(workspace.config().workspace.default_filter);
    session.apply(Command::SetFilter(filter))?;
    if let Some(query) = search {
        session.apply(Command::SetQuery(query.to_string()))?;
    }

    output.verbose_ctx(
        "list",
        &format!("Projecting with filter={}, search={:?}", filter, search),
    );

    let visible = session.visible();
    let summary = session.summary();

    if output.is_json() {
        let items: Vec<_> = visible
            .iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::json!({
                    "position": index + 1,
                    "id": item.id.to_string(),
                    "title": item.title,
                    "completed": item.completed,
                })
            })
            .collect();

        output.data(&serde_json::json!({
            "items": items,
            "summary": summary,
        }));
    } else if visible.is_empty() {
        if session.list().is_empty() {
            println!("No items yet. Add one with 'tick add <title>'");
        } else {
            println!("No items match the current view");
            output.blank();
            println!("{} of {} done", summary.completed, summary.total);
        }
    } else {
        println!("{:<5} {:<11} {:<5} TITLE", "POS", "ID", "DONE");
        println!("{}", "-".repeat(60));

        for (index, item) in visible.iter().enumerate() {
            let mark = if item.completed { "[x]" } else { "[ ]" };
            println!("{:<5} {:<11} {:<5} {}", index + 1, item.id, mark, item.title);
        }

        output.blank();
        println!("{} of {} done", summary.completed, summary.total);
    }

    Ok(())
}

pub fn status(output: &Output) -> Result<()> {
    let (_workspace, session) = open_session()?;
    let summary = session.summary();

    if output.is_json() {
        output.data(&summary);
    } else if summary.total == 0 {
        println!("No items");
    } else {
        println!(
            "{} of {} done ({} active)",
            summary.completed,
            summary.total,
            summary.active()
        );
    }

    Ok(())
}
