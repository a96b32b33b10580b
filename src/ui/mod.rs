//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Styling utilities
//! - View rendering (entry input, todo list, log panel, footer)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub use render::render;
