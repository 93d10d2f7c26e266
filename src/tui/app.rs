use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::controller::ItemView;
use crate::dom::ItemId;
use crate::model::{AppConfig, Filter};
use crate::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list
    Navigate,
    /// Typing into the new-item input
    Input,
    /// Editing an item inline
    Edit(ItemId),
}

/// Main application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into the visible items
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Transient message shown in place of the key hints
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme, show_key_hints: bool) -> Self {
        App {
            session,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        App::new(
            Session::from_config(config),
            Theme::from_config(&config.ui),
            config.ui.show_key_hints,
        )
    }

    /// Items shown under the current route
    pub fn visible_items(&self) -> Vec<ItemView> {
        self.session.list.visible_items()
    }

    /// Id of the item under the cursor
    pub fn cursor_item(&self) -> Option<ItemId> {
        self.visible_items().get(self.cursor).map(|v| v.id)
    }

    /// Move the cursor onto a specific item if it is visible
    pub fn select_item(&mut self, id: ItemId) {
        if let Some(pos) = self.visible_items().iter().position(|v| v.id == id) {
            self.cursor = pos;
        }
    }

    /// Keep the cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Filter used for cycling: the routed one, or All when the hash is off
    pub fn active_filter(&self) -> Filter {
        self.session.list.current_filter().unwrap_or(Filter::All)
    }

    pub fn completed_count(&self) -> usize {
        self.session.list.todo_count() - self.session.list.active_count()
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some(message.into());
        self.status_is_error = is_error;
    }

    /// Bring derived list state up to date after input
    pub fn settle(&mut self) {
        self.session.settle();
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(&config);
    tracing::info!(route = app.session.list.location.hash(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if we panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        items = app.session.list.todo_count(),
        active = app.session.list.active_count(),
        "tui exited"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
