mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use edit::*;
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_new_todo(app, key),
        Mode::Edit(id) => handle_edit(app, id, key),
    }
    app.settle();
}

/// Handle a bracketed paste. Only the text inputs take it; newlines become
/// spaces since both inputs are single-line.
pub fn handle_paste(app: &mut App, text: &str) {
    let clean = text.replace(['\r', '\n'], " ");
    match app.mode {
        Mode::Input => app.session.list.new_todo.insert_str(&clean),
        Mode::Edit(id) => {
            if let Some(mut item) = app.session.list.item(id) {
                item.editor_mut().insert_str(&clean);
            }
        }
        Mode::Navigate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppConfig, Filter};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    fn new_app() -> App {
        App::from_config(&AppConfig::default())
    }

    /// Add items through the keyboard, leaving the app in navigate mode
    fn add_items(app: &mut App, values: &[&str]) {
        handle_key(app, ch('n'));
        for v in values {
            type_str(app, v);
            handle_key(app, key(KeyCode::Enter));
        }
        handle_key(app, key(KeyCode::Esc));
    }

    fn values(app: &App) -> Vec<String> {
        app.visible_items().into_iter().map(|v| v.value).collect()
    }

    #[test]
    fn typing_and_enter_adds_items() {
        let mut app = new_app();
        add_items(&mut app, &["Buy milk", "Walk dog"]);

        assert_eq!(values(&app), vec!["Buy milk", "Walk dog"]);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.session.list.new_todo.focused);
        assert_eq!(app.session.list.footer.counter_text(), "2 items left");
    }

    #[test]
    fn enter_on_blank_input_adds_nothing() {
        let mut app = new_app();
        handle_key(&mut app, ch('n'));
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.session.list.todo_count(), 0);
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn space_toggles_item_under_cursor() {
        let mut app = new_app();
        add_items(&mut app, &["A", "B"]);
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, ch('k'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));

        let views = app.visible_items();
        assert!(!views[0].completed);
        assert!(views[1].completed);
        assert_eq!(app.session.list.footer.counter_text(), "1 item left");
    }

    #[test]
    fn toggling_under_active_route_hides_the_item() {
        let mut app = new_app();
        add_items(&mut app, &["A", "B"]);
        handle_key(&mut app, ch('2'));
        assert_eq!(app.session.list.location.hash(), "#/active");

        handle_key(&mut app, ch('x'));
        assert_eq!(values(&app), vec!["B"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn number_keys_and_h_l_route_between_filters() {
        let mut app = new_app();
        handle_key(&mut app, ch('3'));
        assert_eq!(app.active_filter(), Filter::Completed);
        handle_key(&mut app, ch('l'));
        assert_eq!(app.active_filter(), Filter::All);
        handle_key(&mut app, ch('h'));
        assert_eq!(app.active_filter(), Filter::Completed);
        handle_key(&mut app, ch('1'));
        assert_eq!(app.session.list.location.hash(), "#/");
    }

    #[test]
    fn inline_edit_commit_and_cancel() {
        let mut app = new_app();
        add_items(&mut app, &["Old"]);

        handle_key(&mut app, ch('e'));
        let id = app.cursor_item().unwrap();
        assert_eq!(app.mode, Mode::Edit(id));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        type_str(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(values(&app), vec!["New"]);
        assert_eq!(app.mode, Mode::Navigate);

        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, " and improved");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(values(&app), vec!["New"]);
        assert!(!app.visible_items()[0].editing);
    }

    #[test]
    fn committing_an_empty_edit_destroys_the_item() {
        let mut app = new_app();
        add_items(&mut app, &["Gone"]);
        handle_key(&mut app, ch('e'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.session.list.todo_count(), 0);
        assert!(app.session.list.footer.hidden());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn toggle_all_then_clear_completed() {
        let mut app = new_app();
        add_items(&mut app, &["A", "B", "C"]);
        handle_key(&mut app, ch('g'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, ch('C'));
        assert_eq!(values(&app), vec!["A", "C"]);

        handle_key(&mut app, ch('A'));
        assert_eq!(app.session.list.active_count(), 0);
        handle_key(&mut app, ch('C'));
        assert!(app.visible_items().is_empty());
        assert!(app.session.list.footer.hidden());
    }

    #[test]
    fn delete_removes_item_under_cursor() {
        let mut app = new_app();
        add_items(&mut app, &["A", "B"]);
        handle_key(&mut app, key(KeyCode::End));
        handle_key(&mut app, ch('d'));
        assert_eq!(values(&app), vec!["A"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = new_app();
        handle_key(&mut app, ch('?'));
        assert!(app.show_help);
        handle_key(&mut app, ch('n'));
        assert_eq!(app.mode, Mode::Navigate);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn paste_goes_into_the_focused_input() {
        let mut app = new_app();
        handle_key(&mut app, ch('n'));
        handle_paste(&mut app, "two\nlines");
        assert_eq!(app.session.list.new_todo.value(), "two lines");

        app.mode = Mode::Navigate;
        handle_paste(&mut app, "ignored");
        assert_eq!(app.session.list.new_todo.value(), "two lines");
    }

    #[test]
    fn q_quits_from_navigate_only() {
        let mut app = new_app();
        handle_key(&mut app, ch('n'));
        handle_key(&mut app, ch('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.list.new_todo.value(), "q");
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }
}
