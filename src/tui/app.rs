use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::AppConfig;
use crate::model::todo::{TodoId, TodoRecord};
use crate::ops::clock::SystemClock;
use crate::ops::session::{DEMO_TODOS, Session};

use super::input;
use super::input_buffer::InputBuffer;
use super::render;
use super::theme::Theme;

/// Which widget receives typed keys when no drawer is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new to-do form
    Form,
    /// The to-do list
    List,
}

/// Inline edit of a record from its options drawer
#[derive(Debug, Clone)]
pub struct DrawerEdit {
    pub id: TodoId,
    pub buffer: InputBuffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// One-shot message in the status row, cleared on the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub focus: Focus,
    /// Contents of the new to-do form
    pub form: InputBuffer,
    /// Index into the list (newest first)
    pub list_cursor: usize,
    /// First visible row of the list area
    pub list_scroll: usize,
    pub drawer_edit: Option<DrawerEdit>,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        App {
            session,
            theme,
            focus: Focus::Form,
            form: InputBuffer::new(),
            list_cursor: 0,
            list_scroll: 0,
            drawer_edit: None,
            status: None,
            show_help: false,
            show_key_hints: true,
            should_quit: false,
        }
    }

    /// Build from config: system clock, configured timestamp format, demo
    /// items first (when asked for), then the configured seed.
    pub fn from_config(config: &AppConfig, demo: bool) -> Self {
        let mut session =
            Session::with_clock(Box::new(SystemClock), &config.ui.timestamp_format);
        if demo {
            session.seed(DEMO_TODOS);
        }
        session.seed(&config.session.seed);

        let mut app = App::new(session, Theme::from_config(&config.ui));
        app.show_key_hints = config.ui.show_key_hints;
        app
    }

    pub fn todo_count(&self) -> usize {
        self.session.todos().count()
    }

    /// The record under the list cursor
    pub fn cursor_record(&self) -> Option<&TodoRecord> {
        self.session.todos().records().get(self.list_cursor)
    }

    /// Keep the cursor inside the list after removals
    pub fn clamp_cursor(&mut self) {
        let count = self.todo_count();
        if count == 0 {
            self.list_cursor = 0;
        } else if self.list_cursor >= count {
            self.list_cursor = count - 1;
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.session.drawer().is_open()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config, demo);
    tracing::info!(seeded = app.todo_count(), "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    app.session.unmount();
    tracing::info!(remaining = app.todo_count(), "session ended");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

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
