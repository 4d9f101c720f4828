use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreateTodo, RemoteTodo, UpdateTodo};

/// Remote `/todos` collection operations.
///
/// Implemented by [`crate::TodoApiClient`] for real traffic; tests swap in
/// their own implementations.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch at most `limit` items.
    async fn fetch_todos(&self, limit: usize) -> Result<Vec<RemoteTodo>>;

    /// Create an item and return it as stored by the server.
    async fn create_todo(&self, new_todo: &CreateTodo) -> Result<RemoteTodo>;

    /// Apply a partial update and return the merged item.
    async fn update_todo(&self, id: u64, patch: &UpdateTodo) -> Result<RemoteTodo>;

    /// Delete an item.
    async fn delete_todo(&self, id: u64) -> Result<()>;
}
