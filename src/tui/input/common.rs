use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::InputBuffer;

/// Apply a text-editing key to a single-line buffer. Returns true if the
/// key was consumed; Enter/Esc and anything with Ctrl/Alt are left for the
/// mode handler.
pub(super) fn handle_text_key(buf: &mut InputBuffer, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return false;
    }
    match key.code {
        KeyCode::Char(c) => {
            buf.insert(c);
            true
        }
        KeyCode::Backspace => {
            buf.backspace();
            true
        }
        KeyCode::Left => {
            buf.move_left();
            true
        }
        KeyCode::Right => {
            buf.move_right();
            true
        }
        KeyCode::Home => {
            buf.move_home();
            true
        }
        KeyCode::End => {
            buf.move_end();
            true
        }
        _ => false,
    }
}
