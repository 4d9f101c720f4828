//! # List Manager
//!
//! The to-do list controller: owns the observable in-memory list and
//! mediates every read and write against the remote collection.
//!
//! State lives behind a `tokio::sync::RwLock` and is only ever written as
//! the whole outcome of a finished network call, so views never observe a
//! half-applied mutation. There is deliberately no mutual exclusion across
//! operations: concurrent calls race and the last response to resolve wins.
//!
//! Note that priorities are fabricated client-side. The remote resource does
//! not store them, so every load assigns fresh random priorities to the
//! fetched items.

pub mod manager;
pub mod state;

// Re-exports
pub use manager::TodoListManager;
pub use state::{EditDraft, ListState};
