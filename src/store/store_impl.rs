use super::{StoreError, TodoItem};
use log::*;
use std::sync::mpsc;
use uuid::Uuid;

/// Notification pushed to subscribers after a successful mutation.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    ItemAdded(Uuid),
    ItemRemoved(Uuid),
    EditStarted(Uuid),
    EditUpdated(Uuid),
    EditDone,
}

/// Houses the ordered todo collection and the single-item edit cursor.
///
/// The store is the only legal mutation path for the collection. The cursor,
/// when set, always indexes an existing element: appends never shift existing
/// indices, in-place replacement keeps the cursor where it is, and every
/// removal clears the cursor. Items are matched for removal and selection by
/// `id`, so two items with identical text remain distinguishable.
///
/// All mutation must happen on a single owning thread; subscribers observe
/// changes through channels handed out by [`TodoListStore::subscribe`].
pub struct TodoListStore {
    items: Vec<TodoItem>,
    edit_cursor: Option<usize>,
    subscribers: Vec<mpsc::Sender<StoreEvent>>,
}

/// Defines default store state.
///
impl Default for TodoListStore {
    fn default() -> TodoListStore {
        TodoListStore {
            items: vec![],
            edit_cursor: None,
            subscribers: vec![],
        }
    }
}

impl TodoListStore {
    /// Return a new empty store with an idle edit cursor.
    ///
    pub fn new() -> Self {
        TodoListStore::default()
    }

    /// Return the ordered item collection.
    ///
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Return the number of items in the collection.
    ///
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return true if the collection is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the item currently under edit, or None when idle.
    ///
    pub fn current_edit_item(&self) -> Option<&TodoItem> {
        self.edit_cursor.and_then(|index| self.items.get(index))
    }

    /// Register a new observer. Every successful mutation is pushed to all
    /// live receivers; receivers that have been dropped are pruned on the
    /// next notification.
    ///
    pub fn subscribe(&mut self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Append the given item to the end of the collection. Always succeeds;
    /// the caller is responsible for supplying a fresh unique id.
    ///
    pub fn add_item(&mut self, item: TodoItem) {
        if self.position_of(item.id).is_some() {
            warn!(
                "Todo id {} is already present; matching by id is ambiguous",
                item.id
            );
        }
        debug!("Adding todo '{}' ({})...", item.task, item.id);
        let id = item.id;
        self.items.push(item);
        self.notify(StoreEvent::ItemAdded(id));
    }

    /// Remove the first item matching the given item's id, or do nothing if
    /// no such item exists. The edit cursor is cleared afterwards in either
    /// case, even when the removed item was not the one under edit.
    ///
    pub fn remove_item(&mut self, item: &TodoItem) {
        match self.position_of(item.id) {
            Some(index) => {
                let removed = self.items.remove(index);
                debug!("Removed todo '{}' ({})", removed.task, removed.id);
                self.notify(StoreEvent::ItemRemoved(removed.id));
            }
            None => {
                debug!("No todo with id {} to remove", item.id);
            }
        }
        self.edit_done();
    }

    /// Open the item matching the given item's id for editing. If no such
    /// item exists the cursor is cleared instead.
    ///
    pub fn select_for_edit(&mut self, item: &TodoItem) {
        match self.position_of(item.id) {
            Some(index) => {
                debug!("Editing todo '{}' ({})...", item.task, item.id);
                self.edit_cursor = Some(index);
                self.notify(StoreEvent::EditStarted(item.id));
            }
            None => {
                debug!("No todo with id {} to select for edit", item.id);
                self.edit_done();
            }
        }
    }

    /// Clear the edit cursor. Used both for explicit "done editing" and
    /// implicitly after removal. No-op when already idle.
    ///
    pub fn edit_done(&mut self) {
        if self.edit_cursor.take().is_some() {
            self.notify(StoreEvent::EditDone);
        }
    }

    /// Replace the item under edit with the given item, preserving position
    /// and cursor. Fails when no item is under edit or when the given item's
    /// id differs from the one under edit; the collection is left untouched
    /// in both cases.
    ///
    pub fn update_editing_item(&mut self, item: TodoItem) -> Result<(), StoreError> {
        let index = self.edit_cursor.ok_or(StoreError::NoItemUnderEdit)?;
        let current_id = self.items[index].id;
        if current_id != item.id {
            return Err(StoreError::EditTargetMismatch {
                expected: current_id,
                actual: item.id,
            });
        }
        self.items[index] = item;
        self.notify(StoreEvent::EditUpdated(current_id));
        Ok(())
    }

    /// Return the index of the item with the given id, if present.
    ///
    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Push the given event to all live subscribers, pruning any whose
    /// receiving end has been dropped.
    ///
    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TodoIcon;
    use fake::{Fake, Faker};

    #[test]
    fn add_items_preserves_call_order() {
        let mut store = TodoListStore::new();
        let items: Vec<TodoItem> = (0..5).map(|_| Faker.fake()).collect();
        for item in &items {
            store.add_item(item.to_owned());
        }
        assert_eq!(store.len(), items.len());
        assert_eq!(store.items(), items.as_slice());
    }

    #[test]
    fn remove_item_removes_matching_id() {
        let mut store = TodoListStore::new();
        let keep: TodoItem = Faker.fake();
        let gone: TodoItem = Faker.fake();
        store.add_item(keep.to_owned());
        store.add_item(gone.to_owned());
        store.remove_item(&gone);
        assert_eq!(store.items(), &[keep]);
    }

    #[test]
    fn remove_item_is_idempotent() {
        let mut store = TodoListStore::new();
        let item: TodoItem = Faker.fake();
        store.add_item(item.to_owned());
        store.remove_item(&item);
        store.remove_item(&item);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_item_clears_edit_cursor_unconditionally() {
        let mut store = TodoListStore::new();
        let edited: TodoItem = Faker.fake();
        let other: TodoItem = Faker.fake();
        store.add_item(edited.to_owned());
        store.add_item(other.to_owned());
        store.select_for_edit(&edited);

        // Removing an item other than the one under edit still clears the
        // cursor.
        store.remove_item(&other);
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn remove_item_without_match_clears_edit_cursor() {
        let mut store = TodoListStore::new();
        let present: TodoItem = Faker.fake();
        let absent: TodoItem = Faker.fake();
        store.add_item(present.to_owned());
        store.select_for_edit(&present);
        store.remove_item(&absent);
        assert_eq!(store.len(), 1);
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn select_for_edit_sets_cursor_by_id() {
        let mut store = TodoListStore::new();
        let item: TodoItem = Faker.fake();
        store.add_item(item.to_owned());
        store.select_for_edit(&item);
        assert_eq!(store.current_edit_item().map(|i| i.id), Some(item.id));
    }

    #[test]
    fn select_for_edit_moves_cursor_between_items() {
        let mut store = TodoListStore::new();
        let first: TodoItem = Faker.fake();
        let second: TodoItem = Faker.fake();
        store.add_item(first.to_owned());
        store.add_item(second.to_owned());
        store.select_for_edit(&first);
        store.select_for_edit(&second);
        assert_eq!(store.current_edit_item().map(|i| i.id), Some(second.id));
    }

    #[test]
    fn select_for_edit_without_match_clears_cursor() {
        let mut store = TodoListStore::new();
        let present: TodoItem = Faker.fake();
        let absent: TodoItem = Faker.fake();
        store.add_item(present.to_owned());
        store.select_for_edit(&present);
        store.select_for_edit(&absent);
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn edit_done_clears_cursor() {
        let mut store = TodoListStore::new();
        let item: TodoItem = Faker.fake();
        store.add_item(item.to_owned());
        store.select_for_edit(&item);
        store.edit_done();
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn update_editing_item_replaces_in_place() {
        let mut store = TodoListStore::new();
        let first = TodoItem::new("buy milk");
        let second = TodoItem::new("walk dog").with_icon(TodoIcon::Done);
        store.add_item(first.to_owned());
        store.add_item(second.to_owned());

        store.select_for_edit(&second);
        assert_eq!(store.current_edit_item().map(|i| i.id), Some(second.id));

        store
            .update_editing_item(second.with_icon(TodoIcon::Event))
            .unwrap();
        assert_eq!(store.items()[0], first);
        assert_eq!(store.items()[1].id, second.id);
        assert_eq!(store.items()[1].icon, TodoIcon::Event);
        assert_eq!(store.current_edit_item().map(|i| i.id), Some(second.id));

        store.edit_done();
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn update_editing_item_while_idle_fails() {
        let mut store = TodoListStore::new();
        let item: TodoItem = Faker.fake();
        store.add_item(item.to_owned());
        let result = store.update_editing_item(item.with_task("changed"));
        assert!(matches!(result, Err(StoreError::NoItemUnderEdit)));
    }

    #[test]
    fn update_editing_item_with_mismatched_id_fails_without_mutating() {
        let mut store = TodoListStore::new();
        let edited: TodoItem = Faker.fake();
        let other: TodoItem = Faker.fake();
        store.add_item(edited.to_owned());
        store.add_item(other.to_owned());
        store.select_for_edit(&edited);

        let result = store.update_editing_item(other.with_task("retargeted"));
        assert!(matches!(
            result,
            Err(StoreError::EditTargetMismatch { expected, actual })
                if expected == edited.id && actual == other.id
        ));
        assert_eq!(store.items(), &[edited.to_owned(), other]);
        assert_eq!(store.current_edit_item().map(|i| i.id), Some(edited.id));
    }

    #[test]
    fn add_select_remove_leaves_store_empty_and_idle() {
        let mut store = TodoListStore::new();
        let item: TodoItem = Faker.fake();
        store.add_item(item.to_owned());
        store.select_for_edit(&item);
        store.remove_item(&item);
        assert!(store.is_empty());
        assert!(store.current_edit_item().is_none());
    }

    #[test]
    fn subscribers_receive_mutation_events() {
        let mut store = TodoListStore::new();
        let events = store.subscribe();
        let item: TodoItem = Faker.fake();

        store.add_item(item.to_owned());
        store.select_for_edit(&item);
        store
            .update_editing_item(item.with_task("changed"))
            .unwrap();
        store.remove_item(&item);

        let received: Vec<StoreEvent> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                StoreEvent::ItemAdded(item.id),
                StoreEvent::EditStarted(item.id),
                StoreEvent::EditUpdated(item.id),
                StoreEvent::ItemRemoved(item.id),
                StoreEvent::EditDone,
            ]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = TodoListStore::new();
        let events = store.subscribe();
        drop(events);
        store.add_item(Faker.fake());
        assert!(store.subscribers.is_empty());
    }
}
