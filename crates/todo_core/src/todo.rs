//! To-do item model
//!
//! The remote collection only stores `{id, title, completed, userId}`.
//! `priority` exists purely on the client: it is merged into every item
//! when it enters the list (randomly on load, explicitly on create/edit)
//! and is lost again once the session ends.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Client-side priority of a to-do item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for descending sort: high=3, medium=2, low=1
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown priority '{0}' (expected low, medium or high)")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "high" | "h" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

// Uniform sampling; load fabricates a fresh priority per fetched item
// because the server never stores one.
impl Distribution<Priority> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Priority {
        match rng.gen_range(0..3u8) {
            0 => Priority::Low,
            1 => Priority::Medium,
            _ => Priority::High,
        }
    }
}

/// A to-do item as held in the client's in-memory list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier, unique within the list
    pub id: u64,

    /// Title text
    pub title: String,

    /// Completion flag, kept in sync with the server per operation
    pub completed: bool,

    /// Client-only; the remote resource does not store it
    pub priority: Priority,

    /// Owner of the item on the remote collection
    pub user_id: u64,
}

impl Todo {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        completed: bool,
        priority: Priority,
        user_id: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            priority,
            user_id,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}
