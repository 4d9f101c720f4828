//! List state structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_core::{Priority, Todo};

/// Staged, unsaved values for the one item under edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    /// Id of the item being edited
    pub id: u64,

    /// Staged title, not yet sent
    pub title: String,

    /// Staged priority, not yet sent
    pub priority: Priority,
}

impl EditDraft {
    /// Stage an item's current values.
    pub fn for_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            priority: todo.priority,
        }
    }
}

/// Everything a view renders from, owned by the manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListState {
    /// Items in arrival order: load order first, creations appended
    pub todos: Vec<Todo>,

    /// True while a load round-trip is in flight
    pub loading: bool,

    /// Most recent user-visible failure; cleared when the next
    /// load/create starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The edit in progress, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<EditDraft>,

    /// When the list was last replaced by a successful load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_loaded: Option<DateTime<Utc>>,
}

impl ListState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item by id.
    pub fn get_todo(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Number of items not yet completed.
    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Replace the whole list after a successful load.
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.last_loaded = Some(Utc::now());
    }

    /// Set an item's completed flag. Returns false for unknown ids.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns false for unknown ids.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Merge an edited title and priority into an item. Returns false for
    /// unknown ids.
    pub fn apply_edit(&mut self, id: u64, title: String, priority: Priority) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.title = title;
                todo.priority = priority;
                true
            }
            None => false,
        }
    }
}
