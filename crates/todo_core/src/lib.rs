//! todo_core - Core types for the to-do client
//!
//! This crate provides the foundational pieces shared by the API client,
//! the list manager and the CLI:
//! - `todo` - the `Todo` item and its client-side `Priority`
//! - `filter` - status filtering and the derived, optionally sorted view
//! - `config` - remote endpoint and session configuration

pub mod config;
pub mod filter;
pub mod todo;

// Re-export commonly used types
pub use config::Config;
pub use filter::{apply_view, ParseFilterError, StatusFilter};
pub use todo::{ParsePriorityError, Priority, Todo};
