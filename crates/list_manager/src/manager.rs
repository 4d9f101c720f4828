//! Todo list controller service

use std::sync::Arc;

use log::{error, info, warn};
use rand::Rng;
use tokio::sync::RwLock;

use todo_api::{CreateTodo, TodoApi, UpdateTodo};
use todo_core::{apply_view, Config, Priority, StatusFilter, Todo};

use crate::state::{EditDraft, ListState};

/// Owns the in-memory list and runs every operation against the remote
/// collection through the `TodoApi` seam.
///
/// The lock is never held across a network await: operations snapshot what
/// they need, release, await the round-trip, then reacquire a write lock to
/// apply the outcome. Concurrent operations therefore race, and the last
/// response to resolve wins.
pub struct TodoListManager<A: TodoApi> {
    api: Arc<A>,
    state: Arc<RwLock<ListState>>,
    user_id: u64,
    page_limit: usize,
}

impl<A: TodoApi> TodoListManager<A> {
    /// Create a manager with default settings (user 1, pages of 10).
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(ListState::new())),
            user_id: 1,
            page_limit: 10,
        }
    }

    /// Create a manager that takes its user id and page limit from config.
    pub fn with_config(api: A, config: &Config) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(ListState::new())),
            user_id: config.user_id,
            page_limit: config.page_limit,
        }
    }

    /// Fetch up to `page_limit` items and replace the list with them, each
    /// assigned a fresh uniformly random priority (the server does not store
    /// priorities). On failure the previous list stays untouched and the
    /// visible error is set. Returns true iff the list was replaced.
    pub async fn load(&self) -> bool {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.api.fetch_todos(self.page_limit).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(items) => {
                let mut rng = rand::thread_rng();
                let todos: Vec<Todo> = items
                    .into_iter()
                    .map(|item| {
                        let priority: Priority = rng.gen();
                        item.with_priority(priority)
                    })
                    .collect();
                info!("loaded {} todos", todos.len());
                state.replace(todos);
                true
            }
            Err(err) => {
                error!("load failed: {err}");
                state.error = Some("Failed to load todos".to_string());
                false
            }
        }
    }

    /// Create an item from the trimmed title and chosen priority, then
    /// append the server-returned item merged with that priority. A blank
    /// title makes no network call. On failure the visible error is set.
    /// Returns the appended item on success.
    pub async fn create(&self, title: &str, priority: Priority) -> Option<Todo> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }

        {
            let mut state = self.state.write().await;
            state.error = None;
        }

        let body = CreateTodo::new(trimmed, priority, self.user_id);
        let result = self.api.create_todo(&body).await;

        let mut state = self.state.write().await;
        match result {
            Ok(remote) => {
                let todo = remote.with_priority(priority);
                info!("created todo {}", todo.id);
                state.todos.push(todo.clone());
                Some(todo)
            }
            Err(err) => {
                error!("create failed: {err}");
                state.error = Some("Failed to add todo".to_string());
                None
            }
        }
    }

    /// Send the inverse of an item's completed flag, then apply the sent
    /// value locally on success. Failures are logged only; the local flag is
    /// left as it was (silently stale). Returns true iff the flag flipped.
    pub async fn toggle(&self, id: u64) -> bool {
        let target = {
            let state = self.state.read().await;
            state.get_todo(id).map(|todo| !todo.completed)
        };
        let completed = match target {
            Some(completed) => completed,
            None => {
                warn!("toggle: no todo with id {id}");
                return false;
            }
        };

        match self.api.update_todo(id, &UpdateTodo::completed(completed)).await {
            Ok(_) => {
                let mut state = self.state.write().await;
                state.set_completed(id, completed);
                true
            }
            Err(err) => {
                warn!("toggle {id} failed, keeping local state: {err}");
                false
            }
        }
    }

    /// Delete an item remotely, then drop it from the list on success. The
    /// DELETE goes out even for ids absent locally; the server is the
    /// authority. Failures are logged only. Returns true iff the server
    /// accepted the delete.
    pub async fn remove(&self, id: u64) -> bool {
        match self.api.delete_todo(id).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                if state.remove(id) {
                    info!("removed todo {id}");
                }
                true
            }
            Err(err) => {
                warn!("delete {id} failed, keeping local state: {err}");
                false
            }
        }
    }

    /// Stage an item's current title and priority for editing. Purely
    /// local. Returns false for unknown ids.
    pub async fn begin_edit(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let draft = state.get_todo(id).map(EditDraft::for_todo);
        match draft {
            Some(draft) => {
                state.edit = Some(draft);
                true
            }
            None => false,
        }
    }

    /// Overwrite the staged title. No-op without an active draft.
    pub async fn set_draft_title(&self, title: impl Into<String> + Send) {
        let mut state = self.state.write().await;
        if let Some(draft) = state.edit.as_mut() {
            draft.title = title.into();
        }
    }

    /// Overwrite the staged priority. No-op without an active draft.
    pub async fn set_draft_priority(&self, priority: Priority) {
        let mut state = self.state.write().await;
        if let Some(draft) = state.edit.as_mut() {
            draft.priority = priority;
        }
    }

    /// Drop the staged edit without sending anything.
    pub async fn cancel_edit(&self) {
        self.state.write().await.edit = None;
    }

    /// Send the staged title and priority for the item under edit, merge
    /// them into the local item on success and clear the draft. Without an
    /// active draft this makes no network call. On failure the draft is
    /// kept so the user can retry; logged only. Returns true iff saved.
    pub async fn save_edit(&self) -> bool {
        let draft = {
            let state = self.state.read().await;
            state.edit.clone()
        };
        let draft = match draft {
            Some(draft) => draft,
            None => return false,
        };

        let patch = UpdateTodo::edit(draft.title.clone(), draft.priority);
        match self.api.update_todo(draft.id, &patch).await {
            Ok(_) => {
                let mut state = self.state.write().await;
                state.apply_edit(draft.id, draft.title, draft.priority);
                state.edit = None;
                true
            }
            Err(err) => {
                warn!("edit {} failed, keeping draft: {err}", draft.id);
                false
            }
        }
    }

    /// Derive the visible sequence: completion filter plus optional stable
    /// descending priority sort.
    pub async fn visible_todos(&self, filter: StatusFilter, sort_by_priority: bool) -> Vec<Todo> {
        let state = self.state.read().await;
        apply_view(&state.todos, filter, sort_by_priority)
    }

    /// Clone the full state for rendering.
    pub async fn snapshot(&self) -> ListState {
        self.state.read().await.clone()
    }

    /// Items in arrival order.
    pub async fn todos(&self) -> Vec<Todo> {
        self.state.read().await.todos.clone()
    }

    /// The current visible error, if any.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// True while a load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The staged edit, if any.
    pub async fn editing(&self) -> Option<EditDraft> {
        self.state.read().await.edit.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.todos.is_empty()
    }

    pub async fn pending_count(&self) -> usize {
        self.state.read().await.pending_count()
    }

    pub async fn completed_count(&self) -> usize {
        self.state.read().await.completed_count()
    }
}
