//! Event handling module.
//!
//! This module contains the terminal event handler: a polling thread that
//! forwards key events and ticks over a channel to the main render loop.

pub mod terminal;
