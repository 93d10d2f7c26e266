use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for each mode
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => " n new  space toggle  e edit  d delete  A all  C clear  1-3 filter  ? help",
        Mode::Input => " Enter add  Esc done",
        Mode::Edit(_) => " Enter save  Esc cancel",
    }
}

/// Render the status row (bottom of screen): a transient message if there
/// is one, otherwise the key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(ref message) = app.status_message {
        let fg = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.text_bright
        };
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(fg).bg(bg),
        ))
    } else if app.show_key_hints {
        Line::from(Span::styled(
            key_hints(app.mode),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
