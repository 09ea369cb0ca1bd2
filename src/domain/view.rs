//! View projection
//!
//! Derives the currently-visible subsequence of the list from a status
//! filter and a search query. Projection is a pure function of its inputs:
//! it never reorders, only subsets, and never touches the collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::item::Item;

#[derive(Debug, Error, PartialEq)]
#[error("Unknown filter '{0}' (expected all, active, or done)")]
pub struct FilterParseError(String);

/// Status filter for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep only not-yet-completed items
    Active,
    /// Keep only completed items
    Done,
}

impl StatusFilter {
    /// Returns true if `item` passes this filter
    pub fn keeps(&self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !item.completed,
            StatusFilter::Done => item.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Done => "done",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" | "open" => Ok(StatusFilter::Active),
            "done" | "completed" => Ok(StatusFilter::Done),
            other => Err(FilterParseError(other.to_string())),
        }
    }
}

/// Projects the visible subsequence: status filter first, then a
/// case-insensitive substring search on the trimmed query. Collection
/// order is preserved.
pub fn project<'a>(items: &'a [Item], filter: StatusFilter, query: &str) -> Vec<&'a Item> {
    let query = query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| filter.keeps(item))
        .filter(|item| query.is_empty() || item.title.to_lowercase().contains(&query))
        .collect()
}

/// Completion summary over the unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

impl Summary {
    /// Returns the number of not-yet-completed items
    pub fn active(&self) -> usize {
        self.total - self.completed
    }
}

/// Computes the summary. Filter and search never affect it.
pub fn summarize(items: &[Item]) -> Summary {
    Summary {
        completed: items.iter().filter(|item| item.completed).count(),
        total: items.len(),
    }
}
