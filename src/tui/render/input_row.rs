use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the draft row where new items are typed.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if app.mode == Mode::Insert {
        let buf = &app.draft;
        let style = Style::default().fg(app.theme.text_bright).bg(bg);
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(&buf.text[..buf.cursor], style),
            Span::styled("\u{258C}", Style::default().fg(app.theme.yellow).bg(bg)),
            Span::styled(&buf.text[buf.cursor..], style),
        ])
    } else if !app.draft.text.is_empty() {
        // A draft paused with Esc stays visible, dimmed
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(
                app.draft.text.as_str(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])
    } else {
        Line::from(Span::styled(
            " > add todo",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
