mod all;
mod entry;
mod footer;
mod log;
mod todo_list;

use super::*;

pub use all::all as render;
