use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Cursor marker plus checkbox
const PREFIX_WIDTH: usize = 6;

/// Render the visible items, one per row
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let items = app.visible_items();

    if items.is_empty() {
        let message = if app.session.list.todo_count() == 0 {
            " Nothing to do. Press n to add an item.".to_string()
        } else {
            match app.session.list.current_filter() {
                Some(Filter::Active) => " No active items".to_string(),
                Some(Filter::Completed) => " No completed items".to_string(),
                _ => " No items".to_string(),
            }
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let width = area.width as usize;
    adjust_scroll(app, height);

    let show_cursor = app.mode != Mode::Input;
    let mut lines: Vec<Line> = Vec::new();
    let mut caret: Option<Position> = None;

    for (row, (i, item)) in items
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .enumerate()
    {
        let is_cursor = show_cursor && i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let marker = if is_cursor { "\u{25B8} " } else { "  " };
        let check = if item.completed { "[x] " } else { "[ ] " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                check,
                Style::default()
                    .fg(app.theme.check_color(item.completed))
                    .bg(row_bg),
            ),
        ];

        let room = width.saturating_sub(PREFIX_WIDTH);
        if item.editing {
            let editor = app
                .session
                .list
                .items
                .child(item.id)
                .map(|c| &c.node.editor);
            let (text, col) = editor.map_or((String::new(), 0), |e| {
                (e.value().to_string(), e.cursor_col())
            });
            spans.push(Span::styled(
                unicode::truncate_to_width(&text, room),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            if app.mode == Mode::Edit(item.id) {
                let x = PREFIX_WIDTH + col.min(room.saturating_sub(1));
                caret = Some(Position::new(area.x + x as u16, area.y + row as u16));
            }
        } else {
            let style = if item.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&item.value, room),
                style,
            ));
        }

        // Pad the cursor row so its background spans the full width
        if is_cursor {
            let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
            if used < width {
                spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = caret {
        frame.set_cursor_position(pos);
    }
}

/// Keep the cursor row inside the viewport
fn adjust_scroll(app: &mut App, height: usize) {
    if height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_show_checkbox_and_cursor() {
        let mut app = app_with_items(&[("Buy milk", false), ("Walk dog", true)]);
        app.cursor = 1;
        let output = render_to_string(30, 4, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, "  [ ] Buy milk\n\u{25B8} [x] Walk dog");
    }

    #[test]
    fn filtered_out_items_are_not_drawn() {
        let mut app = app_with_items(&[("Buy milk", false), ("Walk dog", true)]);
        app.session.list.navigate("#/completed");
        app.settle();
        let output = render_to_string(30, 4, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, "\u{25B8} [x] Walk dog");
    }

    #[test]
    fn empty_route_says_so() {
        let mut app = app_with_items(&[("Buy milk", false)]);
        app.session.list.navigate("#/completed");
        app.settle();
        let output = render_to_string(30, 2, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, " No completed items");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_items(&[("A", false), ("B", false), ("C", false), ("D", false)]);
        app.cursor = 3;
        let output = render_to_string(20, 2, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, "  [ ] C\n\u{25B8} [ ] D");
        assert_eq!(app.scroll_offset, 2);

        app.cursor = 0;
        render_to_string(20, 2, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn editing_row_shows_editor_text() {
        let mut app = app_with_items(&[("Buy milk", false)]);
        let id = app.cursor_item().unwrap();
        let mut item = app.session.list.item(id).unwrap();
        item.edit();
        item.editor_mut().set_value("Buy oat milk");
        app.mode = Mode::Edit(id);
        let output = render_to_string(30, 1, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, "\u{25B8} [ ] Buy oat milk");
    }

    #[test]
    fn long_values_are_truncated() {
        let mut app = app_with_items(&[("A very long item that will not fit", false)]);
        app.mode = Mode::Input;
        let output = render_to_string(16, 1, |frame, area| render_list_view(frame, &mut app, area));
        assert_eq!(output, "  [ ] A very lo\u{2026}");
    }
}
