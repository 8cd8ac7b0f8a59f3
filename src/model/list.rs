use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

/// The ordered item collection plus its id-allocation counter.
///
/// Items keep their insertion order across every operation except delete,
/// which removes one element without reordering the survivors. The counter
/// only ever moves forward, so a deleted item's id is never handed out
/// again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoList {
    items: Vec<Item>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order, hidden ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The visible projection: items with `hidden == false`, in insertion
    /// order. This is the only view the presentation layer renders.
    pub fn visible(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.hidden)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append a fresh item and return its id.
    pub(crate) fn push_new(&mut self, text: String) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, text));
        id
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove the item with `id`, preserving the order of the rest.
    /// Returns false if no item matched.
    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}
