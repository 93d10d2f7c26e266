use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "What needs to be done?";
const PROMPT: &str = " \u{276F} ";

/// Render the title, the new-item input, and a rule under them
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let typing = app.mode == Mode::Input;
    let input = &app.session.list.new_todo;

    let title = Line::from(Span::styled(
        " todos",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let prompt_style = if typing {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut input_spans = vec![Span::styled(PROMPT, prompt_style)];
    let room = width.saturating_sub(unicode::display_width(PROMPT));
    if input.value().is_empty() && !typing {
        input_spans.push(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, room),
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        input_spans.push(Span::styled(
            unicode::truncate_to_width(input.value(), room),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![title, Line::from(input_spans), rule])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if typing && area.height > 1 {
        let col = unicode::display_width(PROMPT) + input.cursor_col();
        let x = area.x + (col.min(width.saturating_sub(1)) as u16);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
