use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_items().len().saturating_sub(1);
        }

        // Item actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_item()
                && let Some(mut item) = app.session.list.item(id)
            {
                item.toggle_completed();
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.cursor_item()
                && let Some(mut item) = app.session.list.item(id)
            {
                item.edit();
                app.mode = Mode::Edit(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_item()
                && let Some(item) = app.session.list.item(id)
            {
                let value = item.value();
                item.destroy();
                app.set_status(format!("deleted \"{}\"", value), false);
            }
        }

        // New item input
        KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Char('i') => {
            app.session.list.new_todo.focus();
            app.mode = Mode::Input;
        }

        // List actions
        KeyCode::Char('A') => {
            app.session.list.toggle_all();
        }
        KeyCode::Char('C') => {
            let cleared = app.session.list.clear_completed();
            if !cleared.is_empty() {
                app.set_status(format!("cleared {} completed", cleared.len()), false);
            }
        }

        // Routes
        KeyCode::Char('1') => route(app, Filter::All),
        KeyCode::Char('2') => route(app, Filter::Active),
        KeyCode::Char('3') => route(app, Filter::Completed),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
            let next = app.active_filter().next();
            route(app, next);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
            let prev = app.active_filter().prev();
            route(app, prev);
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.visible_items().len();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}

fn route(app: &mut App, filter: Filter) {
    app.session.list.navigate(filter.hash());
    app.cursor = 0;
}
