use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::add_item;
use crate::tui::app::{App, Mode};

use super::common::handle_text_key;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit the draft. Empty text is a valid item — the core accepts
        // it, and so did the form this UI descends from.
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.draft.text);
            app.draft.clear();
            let id = add_item(&mut app.list, text);
            app.move_cursor_to(id);
            // Stay in Insert for rapid entry
        }
        // Leave the draft as-is so coming back resumes it
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        _ => {
            handle_text_key(&mut app.draft, key);
        }
    }
}
