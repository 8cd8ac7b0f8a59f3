use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the visible items, one row per item, keyed by the item's stable
/// id (the cursor and edit state follow ids, never row indices).
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.list.visible().count() == 0 {
        let hint = if app.list.is_empty() {
            " Nothing to do \u{2014} press a to add an item"
        } else {
            " All items are hidden \u{2014} press h to show completed"
        };
        let empty = Paragraph::new(hint).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    // Keep the cursor row on screen
    let scroll = app.cursor.saturating_sub(visible_height.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();
    for (row, item) in app.list.visible().enumerate().skip(scroll) {
        if lines.len() >= visible_height {
            break;
        }
        let is_cursor = row == app.cursor && app.mode != Mode::Insert;
        let row_bg = if is_cursor { app.theme.highlight } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        let checkbox = if item.completed { " [x] " } else { " [ ] " };
        spans.push(Span::styled(
            checkbox,
            Style::default()
                .fg(app.theme.checkbox_color(item.completed))
                .bg(row_bg),
        ));

        let editing_this = app.mode == Mode::Edit && app.edit_target == Some(item.id);
        if editing_this {
            push_edit_buffer_spans(&mut spans, app, row_bg);
        } else {
            let mut text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            if item.completed {
                text_style = Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            let text = unicode::truncate_to_width(&item.text, area.width.saturating_sub(6) as usize);
            spans.push(Span::styled(text, text_style));
        }

        // Pad the cursor row to full width
        if is_cursor {
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            let w = area.width as usize;
            if content_width < w {
                spans.push(Span::styled(
                    " ".repeat(w - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The in-place rename buffer: text split at the cursor with a block cursor
/// between the halves.
fn push_edit_buffer_spans<'a>(spans: &mut Vec<Span<'a>>, app: &'a App, row_bg: ratatui::style::Color) {
    let buf = &app.edit;
    let style = Style::default().fg(app.theme.text_bright).bg(row_bg);
    spans.push(Span::styled(&buf.text[..buf.cursor], style));
    spans.push(Span::styled(
        "\u{258C}",
        Style::default().fg(app.theme.yellow).bg(row_bg),
    ));
    spans.push(Span::styled(&buf.text[buf.cursor..], style));
}
