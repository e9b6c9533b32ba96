//! Main TUI application state and logic

use crate::constants::PLAY_INTERVAL_MS;
use crate::errors::CalcError;
use crate::session::Session;
use crate::ui::panes::{self, TraceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Trace,
    Stack,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Trace => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Trace,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded calculation being replayed
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub trace_scroll: TraceScrollState,
    pub stack_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for a session that has already been run
    pub fn new(session: Session) -> Self {
        let status_message = if session.history_truncated() {
            format!(
                "History full: only the first {} steps were recorded",
                session.total_snapshots()
            )
        } else {
            String::from("Ready!")
        };

        App {
            session,
            focused_pane: FocusedPane::Trace,
            trace_scroll: TraceScrollState::default(),
            stack_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let play_interval = Duration::from_millis(PLAY_INTERVAL_MS);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= play_interval {
                if self.session.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.trace_scroll.follow = true;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Expression (top) | Trace (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Stack (top) | Output (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let snapshot = self.session.current_snapshot();
        let position = self.session.history_position();
        let total = self.session.total_snapshots();
        let is_at_end = total == 0 || position + 1 >= total;

        panes::render_expression_pane(
            frame,
            left_rows[0],
            self.session.input(),
            self.session.postfix(),
            snapshot,
            false,
        );

        panes::render_trace_pane(
            frame,
            left_rows[1],
            self.session.snapshots(),
            position,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        panes::render_stack_pane(
            frame,
            right_rows[0],
            snapshot,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        panes::render_output_pane(
            frame,
            right_rows[1],
            snapshot,
            self.session.outcome(),
            is_at_end,
            false,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            position,
            total,
            matches!(self.session.outcome(), Some(Err(_))),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.session.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.trace_scroll.follow = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.session.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.session.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll.follow = false;
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll.follow = false;
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(PLAY_INTERVAL_MS))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.session.jump_to_end();
                self.report_step(result, "Jumped to end");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.session.rewind_to_start();
                self.report_step(result, "Jumped to start");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), CalcError>, success: &str) {
        match result {
            Ok(()) => {
                self.status_message = success.to_string();
                self.trace_scroll.follow = true;
            }
            Err(CalcError::HistoryOperationFailed { message }) => {
                self.status_message = message;
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_history_is_announced() {
        let mut session = Session::new("1+2+3+4+5+6+7+8+9", 256);
        session.run().unwrap();
        let app = App::new(session);
        assert!(app.status_message.starts_with("History full"));

        let mut session = Session::new("1+2", 1024 * 1024);
        session.run().unwrap();
        assert_eq!(App::new(session).status_message, "Ready!");
    }
}
