//! Application state management module.
//!
//! This module contains the UI-level state for the application, including:
//! - Main `State` struct that owns the todo list store and all screen state
//! - Navigation types (Focus)
//!
//! The store itself lives in `crate::store`; everything here is the facade
//! the terminal event handler mutates and the renderer reads.

mod navigation;
mod state_impl;

pub use navigation::Focus;
pub use state_impl::State;
