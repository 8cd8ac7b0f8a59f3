use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::rename_item;
use crate::tui::app::App;

use super::common::handle_text_key;
use super::navigate::toggle_completed_action;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm the rename. Renaming also ends edit mode for the item.
        (_, KeyCode::Enter) => {
            confirm_rename(app);
        }
        // Discard the buffer, keep the old text
        (_, KeyCode::Esc) => {
            app.cancel_edit();
        }
        // Toggle completion of the item being edited. Per the collection's
        // contract this cancels the rename rather than committing it.
        (KeyModifiers::CONTROL, KeyCode::Char('x')) => {
            if let Some(id) = app.edit_target {
                toggle_completed_action(app, id);
            }
        }
        _ => {
            handle_text_key(&mut app.edit, key);
        }
    }
}

pub(super) fn confirm_rename(app: &mut App) {
    let id = match app.edit_target {
        Some(id) => id,
        None => {
            app.cancel_edit();
            return;
        }
    };
    let text = app.edit.text.clone();
    let _ = rename_item(&mut app.list, id, text);
    app.cancel_edit();
}
