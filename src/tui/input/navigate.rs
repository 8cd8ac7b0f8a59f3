use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{delete_item, toggle_completed, toggle_hide_completed};
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            let count = app.list.visible().count();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Insert;
        }
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            enter_rename(app);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_item_id() {
                toggle_completed_action(app, id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_item_id() {
                let _ = delete_item(&mut app.list, id);
                app.clamp_cursor();
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('h')) => {
            toggle_hide_completed(&mut app.list);
            app.clamp_cursor();
        }
        _ => {}
    }
}

/// Enter EDIT mode for the item under the cursor. Completed items cannot be
/// renamed — the refusal lives here, not in the core.
pub(super) fn enter_rename(app: &mut App) {
    let id = match app.cursor_item_id() {
        Some(id) => id,
        None => return,
    };
    let item = match app.list.get(id) {
        Some(item) => item,
        None => return,
    };
    if item.completed {
        app.status_message = Some("completed items cannot be renamed".to_string());
        return;
    }
    app.edit.set(&item.text);
    app.edit_target = Some(id);
    app.mode = Mode::Edit;
}

/// Toggle completion for `id`. Cancels any in-progress rename of that item
/// first — the edit-mode reset the core's contract asks of this layer.
pub(super) fn toggle_completed_action(app: &mut App, id: crate::model::ItemId) {
    app.cancel_edit_for(id);
    let _ = toggle_completed(&mut app.list, id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_helpers::{ch, ctrl, key};

    fn app3() -> App {
        App::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = app3();
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);

        let mut app = app3();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn j_k_move_within_visible_bounds() {
        let mut app = app3();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2); // clamped at last item
        handle_key(&mut app, ch('k'));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 0); // clamped at first item
    }

    #[test]
    fn a_enters_insert_mode() {
        let mut app = app3();
        handle_key(&mut app, ch('a'));
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn e_enters_edit_with_current_text() {
        let mut app = app3();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('e'));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.edit.text, "b");
        assert_eq!(app.edit_target, app.cursor_item_id());
    }

    #[test]
    fn rename_refused_for_completed_item() {
        let mut app = app3();
        handle_key(&mut app, ch(' ')); // complete "a"
        handle_key(&mut app, ch('e'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.edit_target, None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn space_toggles_completion_both_ways() {
        let mut app = app3();
        let id = app.cursor_item_id().unwrap();
        handle_key(&mut app, ch(' '));
        assert!(app.list.get(id).unwrap().completed);
        handle_key(&mut app, ch('x'));
        assert!(!app.list.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_cancels_in_progress_rename_of_that_item() {
        let mut app = app3();
        let id = app.cursor_item_id().unwrap();
        handle_key(&mut app, ch('e'));
        assert_eq!(app.mode, Mode::Edit);

        toggle_completed_action(&mut app, id);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.edit_target, None);
        assert!(app.list.get(id).unwrap().completed);
    }

    #[test]
    fn d_deletes_and_clamps_cursor() {
        let mut app = app3();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('d')); // delete "c" while on it
        let texts: Vec<&str> = app.list.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn h_hides_completed_and_clamps_cursor() {
        let mut app = app3();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' ')); // complete "c"
        handle_key(&mut app, ch('h'));
        let visible: Vec<&str> = app.list.visible().map(|item| item.text.as_str()).collect();
        assert_eq!(visible, vec!["a", "b"]);
        assert_eq!(app.cursor, 1);

        handle_key(&mut app, ch('h')); // show them again
        assert_eq!(app.list.visible().count(), 3);
    }

    #[test]
    fn keys_are_noops_on_an_empty_list() {
        let mut app = App::new(Vec::new());
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, ch('d'));
        handle_key(&mut app, ch('e'));
        handle_key(&mut app, ch('h'));
        assert!(app.list.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }
}
