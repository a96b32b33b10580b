use crate::store::{
    generate_random_todo_item, StoreError, StoreEvent, TodoIcon, TodoItem, TodoListStore,
};
use log::*;
use ratatui::widgets::ListState;
use std::sync::mpsc;

use super::navigation::Focus;

/// Houses data representative of application state.
///
/// Owns the todo list store and the screen-level state around it: which
/// area has focus, the entry input buffer for new items, and the list
/// selection. All user intents funnel through the methods below, which in
/// turn call into the store's operations.
pub struct State {
    store: TodoListStore,
    current_focus: Focus,
    todos_list_state: ListState,
    entry_text: String,
    entry_icon: TodoIcon,
    log_panel_open: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            store: TodoListStore::new(),
            current_focus: Focus::Entry,
            todos_list_state: ListState::default(),
            entry_text: String::new(),
            entry_icon: TodoIcon::DEFAULT,
            log_panel_open: false,
        }
    }
}

impl State {
    pub fn new() -> Self {
        State::default()
    }

    /// Return the ordered todo collection.
    ///
    pub fn todos(&self) -> &[TodoItem] {
        self.store.items()
    }

    /// Register an observer on the underlying store.
    ///
    pub fn subscribe_store(&mut self) -> mpsc::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    /// Returns the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Move focus between the entry input and the todo list. The list can
    /// only take focus when it has rows to select.
    ///
    pub fn toggle_focus(&mut self) {
        self.current_focus = match self.current_focus {
            Focus::Entry if !self.store.is_empty() => {
                if self.todos_list_state.selected().is_none() {
                    self.todos_list_state.select(Some(0));
                }
                Focus::List
            }
            Focus::Entry => Focus::Entry,
            Focus::List => Focus::Entry,
        };
    }

    /// Return true if an item is currently open for inline editing.
    ///
    pub fn is_editing(&self) -> bool {
        self.store.current_edit_item().is_some()
    }

    /// Return the item currently under edit, if any.
    ///
    pub fn current_edit_item(&self) -> Option<&TodoItem> {
        self.store.current_edit_item()
    }

    /// Returns the entry input text.
    ///
    pub fn entry_text(&self) -> &str {
        &self.entry_text
    }

    /// Returns the icon the next submitted entry will carry.
    ///
    pub fn entry_icon(&self) -> TodoIcon {
        self.entry_icon
    }

    pub fn add_entry_char(&mut self, c: char) {
        self.entry_text.push(c);
    }

    pub fn remove_entry_char(&mut self) {
        self.entry_text.pop();
    }

    pub fn next_entry_icon(&mut self) {
        self.entry_icon = self.entry_icon.next();
    }

    pub fn previous_entry_icon(&mut self) {
        self.entry_icon = self.entry_icon.previous();
    }

    /// Submit the entry input as a new todo item. Blank input is ignored;
    /// the buffer and icon reset after a successful add.
    ///
    pub fn submit_entry(&mut self) {
        let task = self.entry_text.trim();
        if task.is_empty() {
            debug!("Ignoring empty entry submission");
            return;
        }
        let item = TodoItem::new(task).with_icon(self.entry_icon);
        self.store.add_item(item);
        self.entry_text.clear();
        self.entry_icon = TodoIcon::DEFAULT;
        if self.todos_list_state.selected().is_none() {
            self.todos_list_state.select(Some(0));
        }
    }

    /// Append a randomly generated todo item.
    ///
    pub fn add_random_todo(&mut self) {
        self.store.add_item(generate_random_todo_item());
        if self.todos_list_state.selected().is_none() {
            self.todos_list_state.select(Some(0));
        }
    }

    /// Returns the list selection state for stateful rendering.
    ///
    pub fn get_todos_list_state(&mut self) -> &mut ListState {
        &mut self.todos_list_state
    }

    /// Return the currently selected todo row, if any.
    ///
    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.todos_list_state
            .selected()
            .and_then(|index| self.store.items().get(index))
    }

    /// Move the list selection to the next row, wrapping around.
    ///
    pub fn next_todo(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.todos_list_state.select(None);
            return;
        }
        let next = match self.todos_list_state.selected() {
            Some(index) => (index + 1) % count,
            None => 0,
        };
        self.todos_list_state.select(Some(next));
    }

    /// Move the list selection to the previous row, wrapping around.
    ///
    pub fn previous_todo(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.todos_list_state.select(None);
            return;
        }
        let previous = match self.todos_list_state.selected() {
            Some(index) => (index + count - 1) % count,
            None => 0,
        };
        self.todos_list_state.select(Some(previous));
    }

    /// Open the selected row for inline editing.
    ///
    pub fn start_edit_selected(&mut self) {
        if let Some(item) = self.selected_todo().cloned() {
            self.store.select_for_edit(&item);
        }
    }

    /// Remove the selected row and clamp the selection to the remaining
    /// rows.
    ///
    pub fn remove_selected(&mut self) {
        if let Some(item) = self.selected_todo().cloned() {
            self.store.remove_item(&item);
            self.clamp_selection();
        }
    }

    /// Remove the item currently under edit.
    ///
    pub fn remove_editing_item(&mut self) {
        if let Some(item) = self.store.current_edit_item().cloned() {
            self.store.remove_item(&item);
            self.clamp_selection();
        }
    }

    /// Append a character to the task text of the item under edit. Writes
    /// through to the store so observers see every keystroke.
    ///
    pub fn edit_add_char(&mut self, c: char) -> Result<(), StoreError> {
        let item = self
            .store
            .current_edit_item()
            .ok_or(StoreError::NoItemUnderEdit)?;
        let mut task = item.task.clone();
        task.push(c);
        self.store.update_editing_item(item.with_task(task))
    }

    /// Remove the last character from the task text of the item under edit.
    ///
    pub fn edit_remove_char(&mut self) -> Result<(), StoreError> {
        let item = self
            .store
            .current_edit_item()
            .ok_or(StoreError::NoItemUnderEdit)?;
        let mut task = item.task.clone();
        task.pop();
        self.store.update_editing_item(item.with_task(task))
    }

    /// Cycle the icon of the item under edit forwards.
    ///
    pub fn edit_next_icon(&mut self) -> Result<(), StoreError> {
        let item = self
            .store
            .current_edit_item()
            .ok_or(StoreError::NoItemUnderEdit)?;
        let icon = item.icon.next();
        self.store.update_editing_item(item.with_icon(icon))
    }

    /// Cycle the icon of the item under edit backwards.
    ///
    pub fn edit_previous_icon(&mut self) -> Result<(), StoreError> {
        let item = self
            .store
            .current_edit_item()
            .ok_or(StoreError::NoItemUnderEdit)?;
        let icon = item.icon.previous();
        self.store.update_editing_item(item.with_icon(icon))
    }

    /// Close the inline editor.
    ///
    pub fn edit_done(&mut self) {
        self.store.edit_done();
    }

    /// Returns whether the log panel is visible.
    ///
    pub fn is_log_panel_open(&self) -> bool {
        self.log_panel_open
    }

    pub fn toggle_log_panel(&mut self) {
        self.log_panel_open = !self.log_panel_open;
    }

    /// Keep the list selection pointing at an existing row after removals.
    ///
    fn clamp_selection(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.todos_list_state.select(None);
            self.current_focus = Focus::Entry;
        } else if let Some(index) = self.todos_list_state.selected() {
            if index >= count {
                self.todos_list_state.select(Some(count - 1));
            }
        }
    }
}
