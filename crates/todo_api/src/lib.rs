//! todo_api - REST client for the remote to-do collection
//!
//! Speaks the JSONPlaceholder `/todos` dialect:
//! - `GET /todos?_limit=N` to list
//! - `POST /todos` to create
//! - `PATCH /todos/{id}` for partial updates
//! - `DELETE /todos/{id}` to remove
//!
//! The [`TodoApi`] trait is the seam callers program against;
//! [`TodoApiClient`] is the reqwest-backed implementation.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod models;

pub use client::TodoApiClient;
pub use client_trait::TodoApi;
pub use error::{ApiError, Result};
pub use models::{CreateTodo, RemoteTodo, UpdateTodo};
