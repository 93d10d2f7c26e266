use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::Key;
use crate::dom::{ItemId, TextInput};
use crate::tui::app::{App, Mode};

/// Line-editing keys shared by the new-item input and the item editor.
/// Returns false when the key is not an editing key.
pub(super) fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.delete_to_start(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace if alt => input.delete_word_back(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left if alt || ctrl => input.move_word_left(),
        KeyCode::Right if alt || ctrl => input.move_word_right(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Keys in the new-item input
pub(super) fn handle_new_todo(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.session.list.new_todo.blur();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => match app.session.list.new_todo_keydown(Key::Enter) {
            Ok(outcome) => {
                if let Some(id) = outcome.added {
                    app.session.mark_stale();
                    app.session.settle();
                    app.select_item(id);
                }
            }
            Err(e) => app.set_status(e.to_string(), true),
        },
        _ => {
            edit_text(&mut app.session.list.new_todo, key);
        }
    }
}

/// Keys while an item's inline editor is open
pub(super) fn handle_edit(app: &mut App, id: ItemId, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if !app.session.list.commit_edit(id) {
                app.set_status("deleted empty item", false);
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Esc => {
            app.session.list.cancel_edit(id);
            app.mode = Mode::Navigate;
        }
        _ => match app.session.list.item(id) {
            Some(mut item) => {
                edit_text(item.editor_mut(), key);
            }
            // Item vanished under us
            None => app.mode = Mode::Navigate,
        },
    }
}
