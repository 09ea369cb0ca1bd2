//! Tick - A local-first todo list manager for the command line
//!
//! Tick keeps an ordered list of short text items with completion flags in a
//! per-workspace `.tick/` directory. The list can be filtered by status,
//! searched by substring, reordered, and edited in place; every mutation is
//! persisted as a full snapshot before the command returns.

pub mod domain;
pub mod storage;
pub mod app;
pub mod cli;

pub use domain::{Item, ItemId, ListError, StatusFilter, Summary, TodoList};
