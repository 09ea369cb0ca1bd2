//! JSONL snapshot storage for the todo list
//!
//! The whole collection lives in `.tick/todos.jsonl`, one JSON object per
//! line; line order is the collection order. Every save replaces the full
//! snapshot. Uses file locking for concurrent access safety.
//!
//! Loading is corruption-tolerant: a snapshot that fails to parse, or that
//! parses into a collection violating the id/title invariants, is treated as
//! absent and the list starts empty. Only genuine I/O failures propagate.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Item;

/// Store for the item collection in JSONL format
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a new store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a workspace
    pub fn for_workspace(root: &Path) -> Self {
        Self::new(root.join(".tick").join("todos.jsonl"))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection from the store.
    ///
    /// An absent file yields an empty list. So does a malformed one: any
    /// unparseable line, duplicate id, duplicate normalized title, or blank
    /// title discards the whole snapshot. Data corruption degrades to
    /// "start fresh", never to a crash.
    pub fn load(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open todo store: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on todo store")?;

        let reader = BufReader::new(&file);
        let mut items = Vec::new();

        for line in reader.lines() {
            let line = line.context("Failed to read todo store")?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Item>(&line) {
                Ok(item) => items.push(item),
                Err(_) => return Ok(Vec::new()),
            }
        }

        if !well_formed(&items) {
            return Ok(Vec::new());
        }

        // Lock is released when file is dropped
        Ok(items)
    }

    /// Writes the full collection to the store, replacing prior contents
    pub fn save(&self, items: &[Item]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            // Acquire exclusive lock
            file.lock_exclusive()
                .context("Failed to acquire write lock on todo store")?;

            let mut writer = BufWriter::new(&file);

            for item in items {
                let line = serde_json::to_string(item).context("Failed to serialize item")?;
                writeln!(writer, "{}", line).context("Failed to write item")?;
            }

            writer.flush().context("Failed to flush todo store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

/// Checks the collection invariants on loaded data: unique ids, unique
/// normalized titles, no blank titles.
fn well_formed(items: &[Item]) -> bool {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();

    for item in items {
        let normalized = item.normalized_title();
        if normalized.is_empty() {
            return false;
        }
        if !ids.insert(item.id.clone()) {
            return false;
        }
        if !titles.insert(normalized) {
            return false;
        }
    }

    true
}
