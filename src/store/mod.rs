//! Todo list store module.
//!
//! This module contains the core state management for the todo list,
//! including:
//! - `TodoListStore` that owns the ordered item collection and edit cursor
//! - Item types (`TodoItem`, `TodoIcon`) and the random item generator
//! - Store error handling

mod error;
mod item;
mod store_impl;

pub use error::StoreError;
pub use item::{generate_random_todo_item, TodoIcon, TodoItem};
pub use store_impl::{StoreEvent, TodoListStore};
