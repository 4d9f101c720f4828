//! Completion-status filtering and the derived list view

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::todo::Todo;

/// Predicate selecting which items appear in the derived view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => todo.completed,
            StatusFilter::Pending => !todo.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter '{0}' (expected all, completed or pending)")]
pub struct ParseFilterError(pub String);

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" | "done" => Ok(StatusFilter::Completed),
            "pending" | "open" => Ok(StatusFilter::Pending),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Derive the visible sequence from a list: status filter first, then an
/// optional descending sort by priority rank.
///
/// The sort is stable, so items of equal priority keep their filtered
/// order; with `All` and sorting off the input order comes through
/// unchanged.
pub fn apply_view(todos: &[Todo], filter: StatusFilter, sort_by_priority: bool) -> Vec<Todo> {
    let mut view: Vec<Todo> = todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect();
    if sort_by_priority {
        view.sort_by_key(|todo| std::cmp::Reverse(todo.priority.rank()));
    }
    view
}
