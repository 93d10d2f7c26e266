use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

const CLEAR_HINT: &str = "Clear completed (C)";

/// Render the counter, the filter links, and the clear-completed hint.
/// Nothing is drawn while the footer is hidden.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let list = &app.session.list;
    if list.footer.hidden() {
        frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);
        return;
    }

    let mut spans = vec![
        Span::styled(
            format!(" {}", list.footer.counter_text()),
            Style::default().fg(app.theme.text).bg(bg),
        ),
        Span::styled("  ", Style::default().bg(bg)),
    ];

    for (i, link) in list.filters.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        if link.selected() {
            spans.push(Span::styled(
                format!("[{}]", link.label),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", link.label),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    if app.completed_count() > 0 {
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(CLEAR_HINT);
        let width = area.width as usize;
        if used + hint_width + 2 <= width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(CLEAR_HINT, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn footer(app: &App, width: u16) -> String {
        render_to_string(width, 1, |frame, area| render_footer(frame, app, area))
    }

    #[test]
    fn counter_and_selected_link() {
        let app = app_with_items(&[("A", false), ("B", false)]);
        assert_eq!(footer(&app, 40), " 2 items left  [All]  Active   Completed");
    }

    #[test]
    fn selection_follows_route() {
        let mut app = app_with_items(&[("A", false)]);
        app.session.list.navigate("#/active");
        app.settle();
        assert_eq!(footer(&app, 40), " 1 item left   All  [Active]  Completed");
    }

    #[test]
    fn clear_hint_when_something_is_completed_and_it_fits() {
        let app = app_with_items(&[("A", true), ("B", false)]);
        let wide = footer(&app, 64);
        assert!(wide.ends_with(CLEAR_HINT));
        assert!(wide.starts_with(" 1 item left"));

        let narrow = footer(&app, 40);
        assert!(!narrow.contains("Clear"));
    }

    #[test]
    fn hidden_footer_draws_nothing() {
        let app = app_with_items(&[]);
        assert_eq!(footer(&app, 40), "");
    }
}
