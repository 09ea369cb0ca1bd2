//! The session: one explicit value owning all application state
//!
//! A `Session` pairs the persistent collection with the transient view
//! state (filter, query, editing target, pending-clear gate). Transient
//! state starts from defaults on every open and is never serialized.
//!
//! Every successful collection mutation writes the full snapshot before
//! `apply` returns, so no mutation is lost if the process terminates right
//! after a call. Failed commands leave both the collection and the view
//! state unchanged.

use anyhow::{bail, Result};

use crate::domain::{project, summarize, Item, ItemId, ListError, StatusFilter, Summary, TodoList};
use crate::storage::SnapshotStore;

use super::command::{Command, Outcome};

/// Transient UI state, reset on every process start
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Active status filter
    pub filter: StatusFilter,

    /// Current search text
    pub query: String,

    /// Item currently being edited, if any
    pub editing: Option<ItemId>,

    /// Armed by `RequestClear`, consumed by `ConfirmClear`/`CancelClear`
    pub pending_clear: bool,
}

/// Application state: the collection, the view state, and the store
pub struct Session {
    list: TodoList,
    view: ViewState,
    store: SnapshotStore,
}

impl Session {
    /// Opens a session over the given store, loading the persisted
    /// collection (tolerantly, see `SnapshotStore::load`)
    pub fn open(store: SnapshotStore) -> Result<Self> {
        let items = store.load()?;

        Ok(Self {
            list: TodoList::from_items(items),
            view: ViewState::default(),
            store,
        })
    }

    /// Returns the collection
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Returns the transient view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Projects the currently visible subsequence
    pub fn visible(&self) -> Vec<&Item> {
        project(self.list.items(), self.view.filter, &self.view.query)
    }

    /// Completion summary over the unfiltered collection
    pub fn summary(&self) -> Summary {
        summarize(self.list.items())
    }

    /// Applies a command: the single update function every gesture goes
    /// through. Collection mutations persist before returning.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { title } => {
                let item = self.list.add(&title)?.clone();
                self.persist()?;
                Ok(Outcome::Added(item))
            }

            Command::Edit { id, title } => {
                self.list.edit(&id, &title)?;
                self.view.editing = None;
                self.persist()?;
                let item = self.cloned(&id)?;
                Ok(Outcome::Edited(item))
            }

            Command::Toggle { id } => {
                self.list.toggle(&id)?;
                self.persist()?;
                let item = self.cloned(&id)?;
                Ok(Outcome::Toggled(item))
            }

            Command::Remove { id } => {
                let item = self.list.remove(&id)?;
                self.persist()?;
                Ok(Outcome::Removed(item))
            }

            Command::RequestClear => {
                self.view.pending_clear = true;
                Ok(Outcome::ClearRequested {
                    pending: self.list.len(),
                })
            }

            Command::ConfirmClear => {
                if !self.view.pending_clear {
                    bail!("No pending clear to confirm");
                }
                self.view.pending_clear = false;
                let removed = self.list.clear();
                self.persist()?;
                Ok(Outcome::Cleared { removed })
            }

            Command::CancelClear => {
                self.view.pending_clear = false;
                Ok(Outcome::ClearCancelled)
            }

            Command::SetFilter(filter) => {
                self.view.filter = filter;
                Ok(Outcome::ViewChanged)
            }

            Command::SetQuery(query) => {
                self.view.query = query;
                Ok(Outcome::ViewChanged)
            }

            Command::BeginEdit { id } => {
                if self.list.get(&id).is_none() {
                    return Err(ListError::NotFound(id).into());
                }
                self.view.editing = Some(id.clone());
                Ok(Outcome::EditStarted(id))
            }

            Command::CancelEdit => {
                self.view.editing = None;
                Ok(Outcome::EditCancelled)
            }

            Command::Reorder { visible_order } => {
                self.list.reorder(&visible_order);
                self.persist()?;
                Ok(Outcome::Reordered)
            }
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.save(self.list.items())
    }

    fn cloned(&self, id: &ItemId) -> Result<Item> {
        self.list
            .get(id)
            .cloned()
            .ok_or_else(|| ListError::NotFound(id.clone()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("todos.jsonl"))
    }

    fn session_in(dir: &TempDir) -> Session {
        Session::open(store_in(dir)).unwrap()
    }

    fn add(session: &mut Session, title: &str) -> Item {
        match session
            .apply(Command::Add {
                title: title.to_string(),
            })
            .unwrap()
        {
            Outcome::Added(item) => item,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn mutations_persist_across_sessions() {
        let dir = TempDir::new().unwrap();

        let mut session = session_in(&dir);
        let item = add(&mut session, "Buy milk");
        session.apply(Command::Toggle { id: item.id.clone() }).unwrap();

        let reopened = session_in(&dir);
        assert_eq!(reopened.list().len(), 1);
        assert!(reopened.list().get(&item.id).unwrap().completed);
    }

    #[test]
    fn view_state_resets_on_open() {
        let dir = TempDir::new().unwrap();

        let mut session = session_in(&dir);
        add(&mut session, "a");
        session
            .apply(Command::SetFilter(StatusFilter::Done))
            .unwrap();
        session
            .apply(Command::SetQuery("x".to_string()))
            .unwrap();

        let reopened = session_in(&dir);
        assert_eq!(reopened.view(), &ViewState::default());
    }

    #[test]
    fn failed_add_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        add(&mut session, "Buy milk");

        let err = session
            .apply(Command::Add {
                title: "BUY MILK".to_string(),
            })
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ListError>(),
            Some(&ListError::DuplicateTitle("BUY MILK".to_string()))
        );
        assert_eq!(session.list().len(), 1);

        let reopened = session_in(&dir);
        assert_eq!(reopened.list().len(), 1);
    }

    #[test]
    fn empty_title_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        let err = session
            .apply(Command::Add {
                title: "   ".to_string(),
            })
            .unwrap_err();

        assert_eq!(err.downcast_ref::<ListError>(), Some(&ListError::EmptyTitle));
        assert!(session.list().is_empty());
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let ghost = ItemId::new("ghost", Utc::now());

        let err = session
            .apply(Command::Toggle { id: ghost.clone() })
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ListError>(),
            Some(&ListError::NotFound(ghost))
        );
    }

    #[test]
    fn clear_requires_a_pending_request() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        add(&mut session, "a");

        assert!(session.apply(Command::ConfirmClear).is_err());
        assert_eq!(session.list().len(), 1);
    }

    #[test]
    fn two_phase_clear_empties_the_list() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        add(&mut session, "a");
        add(&mut session, "b");

        let outcome = session.apply(Command::RequestClear).unwrap();
        assert_eq!(outcome, Outcome::ClearRequested { pending: 2 });
        assert!(session.view().pending_clear);

        let outcome = session.apply(Command::ConfirmClear).unwrap();
        assert_eq!(outcome, Outcome::Cleared { removed: 2 });
        assert!(session.list().is_empty());
        assert!(!session.view().pending_clear);

        let reopened = session_in(&dir);
        assert!(reopened.list().is_empty());
    }

    #[test]
    fn cancelled_clear_keeps_the_list() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        add(&mut session, "a");

        session.apply(Command::RequestClear).unwrap();
        session.apply(Command::CancelClear).unwrap();

        assert!(!session.view().pending_clear);
        assert_eq!(session.list().len(), 1);
        assert!(session.apply(Command::ConfirmClear).is_err());
    }

    #[test]
    fn begin_edit_tracks_target_and_edit_clears_it() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let item = add(&mut session, "a");

        session
            .apply(Command::BeginEdit { id: item.id.clone() })
            .unwrap();
        assert_eq!(session.view().editing, Some(item.id.clone()));

        session
            .apply(Command::Edit {
                id: item.id.clone(),
                title: "renamed".to_string(),
            })
            .unwrap();
        assert_eq!(session.view().editing, None);
        assert_eq!(session.list().get(&item.id).unwrap().title, "renamed");
    }

    #[test]
    fn begin_edit_unknown_id_fails() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let ghost = ItemId::new("ghost", Utc::now());

        assert!(session.apply(Command::BeginEdit { id: ghost }).is_err());
        assert_eq!(session.view().editing, None);
    }

    #[test]
    fn filter_and_query_shape_the_visible_list() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        add(&mut session, "Buy milk");
        let bread = add(&mut session, "Buy bread");
        add(&mut session, "Call mom");
        session.apply(Command::Toggle { id: bread.id }).unwrap();

        session
            .apply(Command::SetFilter(StatusFilter::Active))
            .unwrap();
        session
            .apply(Command::SetQuery("buy".to_string()))
            .unwrap();

        let titles: Vec<_> = session.visible().iter().map(|i| i.title.clone()).collect();
        assert_eq!(titles, vec!["Buy milk"]);

        // Summary stays unfiltered
        assert_eq!(session.summary().total, 3);
        assert_eq!(session.summary().completed, 1);
    }

    #[test]
    fn reorder_merges_visible_order_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        // add() prepends: collection order is [d, c, b, a]
        let a = add(&mut session, "a");
        let b = add(&mut session, "b");
        let c = add(&mut session, "c");
        let d = add(&mut session, "d");

        // Complete b and d so the active filter hides them
        session.apply(Command::Toggle { id: b.id.clone() }).unwrap();
        session.apply(Command::Toggle { id: d.id.clone() }).unwrap();
        session
            .apply(Command::SetFilter(StatusFilter::Active))
            .unwrap();

        let visible: Vec<_> = session.visible().iter().map(|i| i.id.clone()).collect();
        assert_eq!(visible, vec![c.id.clone(), a.id.clone()]);

        session
            .apply(Command::Reorder {
                visible_order: vec![a.id.clone(), c.id.clone()],
            })
            .unwrap();

        let order: Vec<_> = session
            .list()
            .items()
            .iter()
            .map(|i| i.title.clone())
            .collect();
        assert_eq!(order, vec!["a", "c", "d", "b"]);

        let reopened = session_in(&dir);
        let persisted: Vec<_> = reopened
            .list()
            .items()
            .iter()
            .map(|i| i.title.clone())
            .collect();
        assert_eq!(persisted, vec!["a", "c", "d", "b"]);
    }
}
