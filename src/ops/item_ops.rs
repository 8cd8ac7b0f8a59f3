//! The five mutating operations over a [`TodoList`].
//!
//! Operations that take an id return `Result`: `Err` means the id matched
//! nothing and the list was left untouched. Callers that want the lenient
//! silent-no-op contract discard the result (`let _ = ...`); callers that
//! want to detect a stale id inspect it.

use crate::model::{ItemId, TodoList};

/// Error type for item operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
}

/// Append a new item with the given text. Empty text is accepted — a caller
/// that wants to forbid empty entries validates before calling. Returns the
/// new item's id.
pub fn add_item(list: &mut TodoList, text: String) -> ItemId {
    list.push_new(text)
}

/// Replace the text of the item with `id`. Completion, visibility, and
/// position are untouched. The "no renaming completed items" rule is the
/// presentation layer's to enforce before calling; the core applies the
/// rename regardless.
pub fn rename_item(list: &mut TodoList, id: ItemId, text: String) -> Result<(), ItemError> {
    let item = list.get_mut(id).ok_or(ItemError::NotFound(id))?;
    item.text = text;
    Ok(())
}

/// Flip the completed flag of the item with `id`.
pub fn toggle_completed(list: &mut TodoList, id: ItemId) -> Result<(), ItemError> {
    let item = list.get_mut(id).ok_or(ItemError::NotFound(id))?;
    item.completed = !item.completed;
    Ok(())
}

/// Remove the item with `id` from the list. Survivors keep their order.
pub fn delete_item(list: &mut TodoList, id: ItemId) -> Result<(), ItemError> {
    if list.remove(id) {
        Ok(())
    } else {
        Err(ItemError::NotFound(id))
    }
}

/// Flip the hidden flag of every completed item; incomplete items are
/// untouched whatever their current visibility. This is the only operation
/// that ever changes `hidden`. Calling it twice with the same completed-set
/// restores the previous visibility.
pub fn toggle_hide_completed(list: &mut TodoList) {
    for item in list.items_mut() {
        if item.completed {
            item.hidden = !item.hidden;
        }
    }
}
