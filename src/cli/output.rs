//! Exit dump: what `jot` prints to stdout when the session ends.
//!
//! The list is ephemeral — this is the only thing that leaves the process.
//! Hidden items are excluded, matching what the UI was showing.

use serde::Serialize;

use crate::model::{ItemId, TodoList};

/// One visible item as exposed to the outside world.
#[derive(Debug, Serialize)]
pub struct VisibleItem<'a> {
    pub id: ItemId,
    pub text: &'a str,
    pub completed: bool,
}

fn visible_items(list: &TodoList) -> Vec<VisibleItem<'_>> {
    list.visible()
        .map(|item| VisibleItem {
            id: item.id,
            text: &item.text,
            completed: item.completed,
        })
        .collect()
}

/// Render the visible items as checkbox bullets, one per line.
pub fn render_text(list: &TodoList) -> String {
    let mut out = String::new();
    for item in list.visible() {
        let mark = if item.completed { 'x' } else { ' ' };
        out.push_str(&format!("- [{}] {}\n", mark, item.text));
    }
    out
}

/// Render the visible items as a JSON array.
pub fn render_json(list: &TodoList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&visible_items(list))
}

/// Print the exit dump to stdout. Empty lists print nothing in text mode
/// and `[]` in JSON mode.
pub fn print_exit_dump(list: &TodoList, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", render_json(list)?);
    } else {
        print!("{}", render_text(list));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{add_item, toggle_completed, toggle_hide_completed};

    fn sample_list() -> TodoList {
        let mut list = TodoList::new();
        add_item(&mut list, "buy milk".into());
        let dog = add_item(&mut list, "walk dog".into());
        toggle_completed(&mut list, dog).unwrap();
        list
    }

    #[test]
    fn text_dump_marks_completed_items() {
        let list = sample_list();
        assert_eq!(render_text(&list), "- [ ] buy milk\n- [x] walk dog\n");
    }

    #[test]
    fn text_dump_excludes_hidden_items() {
        let mut list = sample_list();
        toggle_hide_completed(&mut list);
        assert_eq!(render_text(&list), "- [ ] buy milk\n");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_text(&TodoList::new()), "");
    }

    #[test]
    fn json_dump_has_id_text_completed() {
        let list = sample_list();
        let json = render_json(&list).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["text"], "buy milk");
        assert_eq!(arr[0]["completed"], false);
        assert_eq!(arr[1]["text"], "walk dog");
        assert_eq!(arr[1]["completed"], true);
        assert!(arr[0]["id"].is_u64());
    }

    #[test]
    fn json_dump_empty_list_is_empty_array() {
        let json = render_json(&TodoList::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}
