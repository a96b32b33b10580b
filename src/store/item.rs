//! Todo item data types.
//!
//! This module contains the value types held by the store: the todo item
//! itself, its closed set of category icons, and a generator for plausible
//! random items used by the "add random" action and tests.

use fake::{Dummy, Fake};
use rand::Rng;
use uuid::Uuid;

/// Defines todo item data structure.
///
/// Identity is carried by `id`, which is assigned at creation and never
/// changes. `task` and `icon` are mutable only by replacing the whole item.
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub task: String,
    pub icon: TodoIcon,
}

impl TodoItem {
    /// Return a new item with a fresh unique id and the default icon.
    ///
    pub fn new(task: impl Into<String>) -> Self {
        TodoItem {
            id: Uuid::new_v4(),
            task: task.into(),
            icon: TodoIcon::DEFAULT,
        }
    }

    /// Return a copy of this item carrying the given task text.
    ///
    pub fn with_task(&self, task: impl Into<String>) -> Self {
        TodoItem {
            id: self.id,
            task: task.into(),
            icon: self.icon,
        }
    }

    /// Return a copy of this item carrying the given icon.
    ///
    pub fn with_icon(&self, icon: TodoIcon) -> Self {
        TodoItem {
            id: self.id,
            task: self.task.clone(),
            icon,
        }
    }
}

/// Specifying the closed set of todo categories.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum TodoIcon {
    Square,
    Done,
    Event,
    Privacy,
    Trash,
}

impl TodoIcon {
    /// Icon assigned to items created without an explicit category.
    pub const DEFAULT: TodoIcon = TodoIcon::Square;

    /// All icons in cycling order.
    pub const ALL: [TodoIcon; 5] = [
        TodoIcon::Square,
        TodoIcon::Done,
        TodoIcon::Event,
        TodoIcon::Privacy,
        TodoIcon::Trash,
    ];

    /// Return the display glyph for this icon.
    ///
    pub fn glyph(&self) -> &'static str {
        match self {
            TodoIcon::Square => "□",
            TodoIcon::Done => "✓",
            TodoIcon::Event => "◷",
            TodoIcon::Privacy => "⚷",
            TodoIcon::Trash => "♻",
        }
    }

    /// Return the accessibility label for this icon.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            TodoIcon::Square => "Expand",
            TodoIcon::Done => "Done",
            TodoIcon::Event => "Event",
            TodoIcon::Privacy => "Privacy",
            TodoIcon::Trash => "Restore",
        }
    }

    /// Return the next icon in cycling order, wrapping around.
    ///
    pub fn next(&self) -> TodoIcon {
        let position = TodoIcon::ALL
            .iter()
            .position(|icon| icon == self)
            .unwrap_or(0);
        TodoIcon::ALL[(position + 1) % TodoIcon::ALL.len()]
    }

    /// Return the previous icon in cycling order, wrapping around.
    ///
    pub fn previous(&self) -> TodoIcon {
        let position = TodoIcon::ALL
            .iter()
            .position(|icon| icon == self)
            .unwrap_or(0);
        TodoIcon::ALL[(position + TodoIcon::ALL.len() - 1) % TodoIcon::ALL.len()]
    }
}

/// Task texts drawn from when generating a random item.
const TASK_POOL: &[&str] = &[
    "Water the plants",
    "Reply to unread emails",
    "Book a dentist appointment",
    "Take out the recycling",
    "Walk the dog",
    "Buy groceries for the week",
    "Pay the electric bill",
    "Call the landlord",
    "Back up the laptop",
    "Sharpen the kitchen knives",
];

/// Return a plausible random todo item with a fresh unique id, a non-empty
/// task text, and a random icon. Demo/test utility only; the store places
/// no constraints on items beyond id freshness.
///
pub fn generate_random_todo_item() -> TodoItem {
    let mut rng = rand::thread_rng();
    let task = TASK_POOL[rng.gen_range(0..TASK_POOL.len())];
    let icon = TodoIcon::ALL[rng.gen_range(0..TodoIcon::ALL.len())];
    TodoItem {
        id: Uuid::new_v4(),
        task: task.to_string(),
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_uses_default_icon() {
        let item = TodoItem::new("buy milk");
        assert_eq!(item.task, "buy milk");
        assert_eq!(item.icon, TodoIcon::DEFAULT);
    }

    #[test]
    fn new_items_have_unique_ids() {
        let first = TodoItem::new("buy milk");
        let second = TodoItem::new("buy milk");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn with_task_preserves_id_and_icon() {
        let item = TodoItem::new("buy milk").with_icon(TodoIcon::Event);
        let changed = item.with_task("buy oat milk");
        assert_eq!(changed.id, item.id);
        assert_eq!(changed.icon, TodoIcon::Event);
        assert_eq!(changed.task, "buy oat milk");
    }

    #[test]
    fn with_icon_preserves_id_and_task() {
        let item = TodoItem::new("walk dog");
        let changed = item.with_icon(TodoIcon::Done);
        assert_eq!(changed.id, item.id);
        assert_eq!(changed.task, "walk dog");
        assert_eq!(changed.icon, TodoIcon::Done);
    }

    #[test]
    fn icon_next_cycles_through_all() {
        let mut icon = TodoIcon::DEFAULT;
        for expected in TodoIcon::ALL.iter().skip(1) {
            icon = icon.next();
            assert_eq!(icon, *expected);
        }
        assert_eq!(icon.next(), TodoIcon::DEFAULT);
    }

    #[test]
    fn icon_previous_inverts_next() {
        for icon in TodoIcon::ALL {
            assert_eq!(icon.next().previous(), icon);
            assert_eq!(icon.previous().next(), icon);
        }
    }

    #[test]
    fn icon_glyphs_and_labels_are_non_empty() {
        for icon in TodoIcon::ALL {
            assert!(!icon.glyph().is_empty());
            assert!(!icon.label().is_empty());
        }
    }

    #[test]
    fn generated_items_have_fresh_ids_and_non_empty_tasks() {
        let first = generate_random_todo_item();
        let second = generate_random_todo_item();
        assert_ne!(first.id, second.id);
        assert!(!first.task.is_empty());
        assert!(!second.task.is_empty());
    }
}
