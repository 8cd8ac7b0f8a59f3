use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{ItemId, TodoList};
use crate::ops::add_item;
use crate::util::unicode;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor over the visible list
    Navigate,
    /// Typing a new item into the draft row
    Insert,
    /// Renaming the item under the cursor inline
    Edit,
}

/// A single-line text buffer with a grapheme-aware byte cursor
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    pub text: String,
    /// Byte offset into `text`, always on a grapheme boundary
    pub cursor: usize,
}

impl InputBuffer {
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Load `text` with the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Main application state. The list is the core; everything else here is
/// UI-local (cursor, buffers, per-item edit mode) and never leaks into it.
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    /// Cursor index into the visible projection
    pub cursor: usize,
    /// Pending draft text for the add operation
    pub draft: InputBuffer,
    /// Rename buffer, live while `edit_target` is set
    pub edit: InputBuffer,
    /// The item currently being renamed
    pub edit_target: Option<ItemId>,
    pub should_quit: bool,
    /// One-shot message shown in the status row until the next key
    pub status_message: Option<String>,
    pub theme: Theme,
}

impl App {
    pub fn new(seed: impl IntoIterator<Item = String>) -> Self {
        let mut list = TodoList::new();
        for text in seed {
            add_item(&mut list, text);
        }
        App {
            list,
            mode: Mode::Navigate,
            cursor: 0,
            draft: InputBuffer::default(),
            edit: InputBuffer::default(),
            edit_target: None,
            should_quit: false,
            status_message: None,
            theme: Theme::default(),
        }
    }

    /// Ids of the visible items, in display order.
    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.list.visible().map(|item| item.id).collect()
    }

    /// The id of the item under the cursor, if any.
    pub fn cursor_item_id(&self) -> Option<ItemId> {
        self.list.visible().nth(self.cursor).map(|item| item.id)
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let count = self.list.visible().count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// Move the cursor onto the item with `id`, if it is visible.
    pub fn move_cursor_to(&mut self, id: ItemId) {
        if let Some(pos) = self.list.visible().position(|item| item.id == id) {
            self.cursor = pos;
        }
    }

    /// Presentation contract: whenever completion is toggled (or a rename
    /// is confirmed) for an item, any in-progress rename of that item is
    /// cancelled.
    pub fn cancel_edit_for(&mut self, id: ItemId) {
        if self.edit_target == Some(id) {
            self.cancel_edit();
        }
    }

    /// Drop the rename buffer and return to Navigate.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.edit.clear();
        if self.mode == Mode::Edit {
            self.mode = Mode::Navigate;
        }
    }
}

/// Run the TUI session. Returns the final list so the caller can print the
/// exit dump.
pub fn run(seed: Vec<String>) -> Result<TodoList, Box<dyn std::error::Error>> {
    let mut app = App::new(seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| app.list)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // One operation per event, applied to completion before the next
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
