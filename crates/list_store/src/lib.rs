//! # List Store
//!
//! Session-scoped to-do list state for the web service: domain structs,
//! name validation, display ordering, session storage and the
//! multi-session manager.

pub mod display;
pub mod error;
pub mod manager;
pub mod storage;
pub mod structs;

// Re-exports
pub use display::{ordered_lists, ordered_todos};
pub use error::{Result, StoreError, ValidationError};
pub use manager::SessionManager;
pub use storage::{MemorySessionStorage, SessionStorage};
pub use structs::{Flash, FlashKind, SessionState, Todo, TodoList};
