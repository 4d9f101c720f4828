//! Wire types for the `/todos` collection.
//!
//! Priority is a client-side concept: the server never stores it, so reads
//! come back as [`RemoteTodo`] and the caller attaches a priority to get a
//! full [`Todo`].

use serde::{Deserialize, Serialize};
use todo_core::{Priority, Todo};

/// Item shape the server stores and returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTodo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl RemoteTodo {
    /// Attach a client-side priority, producing the full local item.
    pub fn with_priority(self, priority: Priority) -> Todo {
        Todo::new(self.id, self.title, self.completed, priority, self.user_id)
    }
}

/// Body for `POST /todos`. New items always start pending. The priority
/// rides along even though the server drops it; the caller keeps its own
/// copy to merge into the created item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub user_id: u64,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>, priority: Priority, user_id: u64) -> Self {
        Self {
            title: title.into(),
            completed: false,
            priority,
            user_id,
        }
    }
}

/// Partial body for `PATCH /todos/{id}`. Fields left as `None` are not
/// serialized, so the server keeps its current values for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl UpdateTodo {
    /// Patch that flips only the completed flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// Patch carrying an edited title and priority.
    pub fn edit(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: Some(title.into()),
            priority: Some(priority),
            ..Default::default()
        }
    }
}
