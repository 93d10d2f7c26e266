use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::tui::app::{App, Mode};

pub const TERM_W: u16 = 80;

/// Draw into an in-memory buffer and return the plain text, with trailing
/// spaces and trailing blank rows removed.
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let rows: Vec<String> = buf
        .content
        .chunks(buf.area.width as usize)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();

    let end = rows.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);
    rows[..end].join("\n")
}

/// An app on the default config holding the given `(value, completed)` items,
/// in navigate mode with the cursor on the first row.
pub fn app_with_items(items: &[(&str, bool)]) -> App {
    let mut app = App::from_config(&AppConfig::default());
    for (value, completed) in items {
        app.session.list.set_new_todo(value);
        let id = app.session.list.add_new_todo().unwrap().unwrap();
        if *completed {
            app.session.list.item(id).unwrap().set_completed(true);
        }
    }
    app.session.mark_stale();
    app.settle();
    app.mode = Mode::Navigate;
    app.cursor = 0;
    app
}
