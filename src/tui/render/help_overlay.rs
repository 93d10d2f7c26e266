use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor"),
            (" g/G", "First / last item"),
            (" space/x", "Toggle completed"),
            (" e/Enter", "Edit item"),
            (" d/Del", "Delete item"),
            (" A", "Complete all"),
            (" C", "Clear completed"),
        ],
    ),
    (
        "Filters",
        &[
            (" 1 2 3", "All / Active / Completed"),
            (" h/l", "Previous / next filter"),
        ],
    ),
    (
        "Editing",
        &[
            (" n/a", "New item"),
            (" Enter", "Add / save"),
            (" Esc", "Done / cancel"),
            (" Ctrl-W", "Delete word"),
            (" Ctrl-U", "Delete to start"),
        ],
    ),
    ("", &[(" ?", "Close help"), (" q", "Quit")]),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));

    for (section, bindings) in BINDINGS {
        lines.push(Line::from(""));
        if !section.is_empty() {
            lines.push(Line::from(Span::styled(format!(" {}", section), header_style)));
        }
        for (key, desc) in bindings.iter() {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!("{:<width$}", key, width = 12);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
