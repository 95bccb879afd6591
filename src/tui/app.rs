//! Main TUI application state and rendering

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::animation::AnimationCompletion;
use crate::config::{MAX_STRING_LENGTH, PLACEHOLDER_TEXT};
use crate::session::{Session, SessionSnapshot};
use crate::tui::{stack_widget::StackWidget, theme::Palette, Theme};
use crate::visualizer::clock::{Clock, SystemClock};

/// Upper bound on how long the loop blocks waiting for a key.
const IDLE_POLL: Duration = Duration::from_millis(100);

const CONTROLS_HELP: &str =
    "Enter push | F2/Alt+O pop | F3/Alt+E peek | F4/Alt+C clear | F5/Alt+T theme | Tab kind | ↑/↓ speed | Esc quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Input field and status line, kept apart from the terminal so key handling can be tested.
#[derive(Debug, Default)]
pub struct TuiState {
    input: String,
    status: Option<String>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent, session: &mut Session, now: Duration) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Continue;
        }

        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyAction::Quit
            }
            KeyCode::Enter => self.submit(session, now),
            KeyCode::F(2) => self.pop(session, now),
            KeyCode::Char('o') if alt => self.pop(session, now),
            KeyCode::F(3) => self.peek(session, now),
            KeyCode::Char('e') if alt => self.peek(session, now),
            KeyCode::F(4) => self.clear(session),
            KeyCode::Char('c') if alt => self.clear(session),
            KeyCode::F(5) => {
                let mode = session.toggle_theme();
                self.set_status(format!("Theme: {}", mode));
            }
            KeyCode::Char('t') if alt => {
                let mode = session.toggle_theme();
                self.set_status(format!("Theme: {}", mode));
            }
            KeyCode::Tab => {
                let kind = session.cycle_kind();
                self.set_status(format!("Next push will use {}", kind));
            }
            KeyCode::Up => {
                let speed = session.faster();
                self.set_status(format!("Animation speed set to {}", speed));
            }
            KeyCode::Down => {
                let speed = session.slower();
                self.set_status(format!("Animation speed set to {}", speed));
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !alt => {
                // Strings are the longest kind, nothing valid is longer
                if self.input.chars().count() < MAX_STRING_LENGTH {
                    self.input.push(c);
                }
            }
            _ => {}
        }
        KeyAction::Continue
    }

    /// Reports a finished pop in the status line.
    pub fn on_completion(&mut self, completion: AnimationCompletion) {
        if let AnimationCompletion::Popped(value) = completion {
            self.set_status(format!("Popped {}", value));
        }
    }

    fn submit(&mut self, session: &mut Session, now: Duration) {
        match session.push_selected(self.input.trim(), now) {
            Ok(value) => {
                self.input.clear();
                self.set_status(format!("Pushed {}", value));
            }
            Err(error) => self.set_status(error.to_string()),
        }
    }

    fn pop(&mut self, session: &mut Session, now: Duration) {
        match session.pop(now) {
            Ok(candidate) => self.set_status(format!("Popping {}...", candidate)),
            Err(error) => self.set_status(error.to_string()),
        }
    }

    fn peek(&mut self, session: &mut Session, now: Duration) {
        match session.peek(now) {
            Ok(top) => self.set_status(format!("Top element: {}", top)),
            Err(error) => self.set_status(error.to_string()),
        }
    }

    fn clear(&mut self, session: &mut Session) {
        match session.clear() {
            Ok(removed) => self.set_status(format!("Cleared {} elements", removed)),
            Err(error) => self.set_status(error.to_string()),
        }
    }
}

/// Main TUI application
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    theme: Theme,
    state: TuiState,
    clock: SystemClock,
}

impl TuiApp {
    /// Create a new TUI application, switching the terminal to raw mode
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            state: TuiState::new(),
            clock: SystemClock::new(),
        })
    }

    /// Run until the user quits
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.terminal.clear()?;
        self.state.set_status("Type a value and press Enter to push");

        loop {
            if let Some(completion) = session.tick(self.clock.now()) {
                self.state.on_completion(completion);
            }

            let theme = &self.theme;
            let state = &self.state;
            self.terminal.draw(|f| {
                Self::render_frame(f, session, state, theme);
            })?;

            // Wake up in time for the next animation step
            let timeout = session
                .next_step_at()
                .map(|due| due.saturating_sub(self.clock.now()).min(IDLE_POLL))
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let now = self.clock.now();
                    if self.state.handle_key(key, session, now) == KeyAction::Quit {
                        debug!("quit requested");
                        break;
                    }
                }
            }
        }

        // Let a pending pop land before leaving
        session.settle(self.clock.now());
        Ok(())
    }

    /// Render a single frame
    fn render_frame(frame: &mut Frame, session: &Session, state: &TuiState, theme: &Theme) {
        let snapshot = session.snapshot();
        let palette = theme.palette(snapshot.theme_mode);
        let size = frame.area();

        frame.render_widget(Block::default().style(palette.base_style()), size);

        // Title, controls, stack + history, status
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(size);

        let title = Paragraph::new(Line::from(Span::styled(
            "STACK VISUALIZER",
            palette.accent_style(),
        )))
        .style(palette.base_style());
        frame.render_widget(title, main_chunks[0]);

        Self::render_controls(frame, main_chunks[1], &snapshot, state, palette);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[2]);

        frame.render_widget(StackWidget::new(&snapshot, palette), body_chunks[0]);
        Self::render_history(frame, body_chunks[1], &snapshot, palette);
        Self::render_status(frame, main_chunks[3], state, palette);
    }

    fn render_controls(
        frame: &mut Frame,
        area: Rect,
        snapshot: &SessionSnapshot,
        state: &TuiState,
        palette: &Palette,
    ) {
        let input = if state.input().is_empty() {
            Span::styled(PLACEHOLDER_TEXT, palette.border_style())
        } else {
            Span::styled(state.input(), palette.text_style())
        };

        let kind = match snapshot.locked_kind {
            Some(locked) => format!("{} (locked)", locked),
            None => snapshot.selected_kind.to_string(),
        };

        let lines = vec![
            Line::from(vec![Span::raw("Value: "), input, Span::raw("_")]),
            Line::from(format!(
                "Type: {}   Speed: {}   Operations: {}/{}",
                kind,
                snapshot.speed,
                snapshot.elements.len(),
                snapshot.capacity
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Controls")
                    .border_style(palette.border_style()),
            )
            .style(palette.text_style());
        frame.render_widget(paragraph, area);
    }

    fn render_history(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, palette: &Palette) {
        let lines: Vec<Line> = snapshot
            .history
            .iter()
            .map(|entry| Line::from(format!("• {}", entry)))
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Operation History")
                    .border_style(palette.border_style()),
            )
            .style(palette.text_style());
        frame.render_widget(paragraph, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, state: &TuiState, palette: &Palette) {
        let text = state.status().unwrap_or(CONTROLS_HELP);
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(CONTROLS_HELP)
                    .border_style(palette.border_style()),
            )
            .style(palette.text_style());
        frame.render_widget(paragraph, area);
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore the terminal even when the loop exits with an error
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
