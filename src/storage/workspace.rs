//! Workspace management
//!
//! Handles workspace initialization and provides access to the store and
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, SnapshotStore};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not in a tick workspace. Run 'tick init' first.")]
    NotInWorkspace,
}

/// A Tick workspace
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens an existing workspace at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let tick_dir = root.join(".tick");

        if !tick_dir.is_dir() {
            return Err(WorkspaceError::NotInWorkspace.into());
        }

        let config = Config::for_workspace(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the workspace at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_workspace_root().ok_or(WorkspaceError::NotInWorkspace)?;

        Self::open(root)
    }

    /// Initializes a new workspace at the given path (idempotent)
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let tick_dir = root.join(".tick");

        fs::create_dir_all(&tick_dir)
            .with_context(|| format!("Failed to create .tick directory: {}", tick_dir.display()))?;

        // Create default config
        let config_path = tick_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Tick configuration

# Ask for confirmation before 'tick clear'
confirm_clear = true

# Default status filter for 'tick list' (all, active, done)
default_filter = "all"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the workspace root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .tick directory path
    pub fn tick_dir(&self) -> PathBuf {
        self.root.join(".tick")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the snapshot store
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::for_workspace(&self.root)
    }
}
