use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): counts or a one-shot message
/// on the left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match &app.status_message {
        Some(msg) => format!(" {}", msg),
        None => counts_summary(app),
    };
    let left_style = if app.status_message.is_some() {
        Style::default().fg(app.theme.yellow).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  \u{2423} toggle  d delete  h hide done  q quit",
        Mode::Insert => "Enter add  Esc back",
        Mode::Edit => "Enter confirm  Esc cancel  ^X toggle",
    };

    let mut spans = vec![Span::styled(left.clone(), left_style)];
    let left_width = left.chars().count();
    let hint_width = hint.chars().count() + 1;
    if left_width + hint_width < width {
        let padding = width - left_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn counts_summary(app: &App) -> String {
    let total = app.list.len();
    let done = app.list.iter().filter(|item| item.completed).count();
    let hidden = app.list.iter().filter(|item| item.hidden).count();
    let mut s = format!(" {} item{}", total, if total == 1 { "" } else { "s" });
    if done > 0 {
        s.push_str(&format!(" \u{b7} {} done", done));
    }
    if hidden > 0 {
        s.push_str(&format!(" \u{b7} {} hidden", hidden));
    }
    s
}
