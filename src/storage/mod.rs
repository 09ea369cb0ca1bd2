//! # Storage Layer
//!
//! Persistence layer for Tick with git-friendly file formats.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Items | JSONL (one JSON per line, line order = list order) | `.tick/todos.jsonl` |
//! | Config | TOML | `.tick/config.toml`, `~/.config/tick/config.toml` |
//!
//! The snapshot file is the single durable key: every write replaces the
//! whole collection (temp file + atomic rename, `fs2` file locking), and a
//! snapshot that fails to parse degrades to an empty list rather than an
//! error.
//!
//! Key types:
//! - [`Workspace`] - entry point for accessing a Tick workspace
//! - [`SnapshotStore`] - read/write the item collection
//! - [`Config`] - workspace and global configuration

mod snapshot;
mod config;
mod workspace;

pub use snapshot::SnapshotStore;
pub use config::{Config, ConfigError, GlobalConfig, OutputPreference, WorkspaceConfig};
pub use workspace::{Workspace, WorkspaceError};
