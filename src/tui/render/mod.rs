pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (title + input) | list | footer | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title, new-item input, rule
            Constraint::Min(1),    // items
            Constraint::Length(1), // counter + filter links
            Constraint::Length(1), // status / key hints
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    footer::render_footer(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
