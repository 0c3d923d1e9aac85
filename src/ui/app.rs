//! Main TUI application state and logic

use super::input::{PromptAction, Request};
use crate::config::Config;
use crate::errors::Error;
use crate::history::Operation;
use crate::session::Session;
use crate::structures::bst::Traversal;
use crate::structures::{Query, StructureKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Whether keys drive the app or fill the value prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Prompt {
        action: PromptAction,
        buffer: String,
    },
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Structure on screen
    pub focused: StructureKind,

    pub input_mode: InputMode,

    /// Order used by the next BST traversal
    pub traversal: Traversal,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Delay between steps during auto-play
    pub step_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session, config: &Config) -> Self {
        App {
            session,
            focused: config.start,
            input_mode: InputMode::Normal,
            traversal: Traversal::InOrder,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            step_interval: config.step_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

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

    /// Advance auto-play when the step interval has elapsed
    pub fn tick(&mut self) {
        if self.last_play_time.elapsed() < self.step_interval {
            return;
        }
        if let Some(playback) = self.session.playback_mut() {
            if playback.is_playing() {
                playback.advance();
                self.last_play_time = Instant::now();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tabs row, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Structure (left) | Steps over History (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[1]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        super::panes::render_tabs(frame, main_chunks[0], self.focused);

        // Only highlight steps that explain the structure on screen
        let playback = self
            .session
            .playback()
            .filter(|p| p.animation().kind() == self.focused);

        super::panes::render_structure_pane(
            frame,
            columns[0],
            super::panes::StructureRenderData {
                kind: self.focused,
                workbench: self.session.workbench(),
                playback,
                traversal: self.traversal,
            },
        );

        super::panes::render_steps_pane(frame, right_rows[0], self.session.playback());

        super::panes::render_history_pane(
            frame,
            right_rows[1],
            self.focused,
            self.session.history(self.focused),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            super::panes::StatusRenderData {
                kind: self.focused,
                message: &self.status_message,
                is_error: self.status_is_error,
                prompt: match &self.input_mode {
                    InputMode::Prompt { action, buffer } => Some((action.label(), buffer.as_str())),
                    InputMode::Normal => None,
                },
                playback: self.session.playback().map(|p| p.state()),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let InputMode::Prompt { action, buffer } = &mut self.input_mode {
            match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.set_status("Cancelled");
                }
                KeyCode::Enter => {
                    let parsed = action.parse(buffer);
                    self.input_mode = InputMode::Normal;
                    match parsed {
                        Ok(request) => self.submit(request),
                        Err(message) => self.set_error(message),
                    }
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | ',' | ' ') => {
                    buffer.push(c);
                }
                _ => {}
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused = self.focused.next();
                self.set_status(format!("{} selected", self.focused));
            }
            KeyCode::BackTab => {
                self.focused = self.focused.prev();
                self.set_status(format!("{} selected", self.focused));
            }
            KeyCode::Char('z') if ctrl => self.undo(),
            KeyCode::Char('y') if ctrl => self.redo(),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => self.redo(),
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if let Some(playback) = self.session.playback_mut() {
                        playback.toggle();
                        let message = if playback.is_playing() {
                            "Playing..."
                        } else {
                            "Paused"
                        };
                        self.last_play_time = Instant::now();
                        self.set_status(message);
                    }
                }
            }
            KeyCode::Right => {
                if let Some(playback) = self.session.playback_mut() {
                    playback.pause();
                    let message = match playback.advance() {
                        Some(step) => step.to_string(),
                        None => String::from("Animation complete"),
                    };
                    self.set_status(message);
                }
            }
            KeyCode::Left => {
                if let Some(playback) = self.session.playback_mut() {
                    let message = match playback.retreat() {
                        Some(step) => step.to_string(),
                        None => String::from("At the first step"),
                    };
                    self.set_status(message);
                }
            }
            KeyCode::Enter => {
                if let Some(playback) = self.session.playback_mut() {
                    playback.finish();
                    self.set_status("Jumped to end");
                }
            }
            KeyCode::Backspace => {
                if let Some(playback) = self.session.playback_mut() {
                    playback.restart();
                    self.last_play_time = Instant::now();
                    self.set_status("Replaying");
                }
            }
            KeyCode::Esc => {
                if self.session.cancel_playback() {
                    self.set_status("Animation cancelled");
                }
            }
            KeyCode::Char(c) => self.handle_structure_key(c),
            _ => {}
        }
    }

    /// Operation keys for the structure on screen
    fn handle_structure_key(&mut self, c: char) {
        let request = match (self.focused, c) {
            (_, 'c') => Request::Execute(Operation::Clear(self.focused)),

            (StructureKind::Stack, 'p') => return self.prompt(PromptAction::Push),
            (StructureKind::Stack, 'o') => Request::Execute(Operation::Pop),
            (StructureKind::Stack, 'v') => Request::Execute(Operation::ReverseStack),
            (StructureKind::Stack, 'k') => Request::Query(Query::Peek),

            (StructureKind::Queue, 'e') => return self.prompt(PromptAction::Enqueue),
            (StructureKind::Queue, 'd') => Request::Execute(Operation::Dequeue),
            (StructureKind::Queue, 'f') => Request::Query(Query::Front),

            (StructureKind::TwoStackQueue, 'e') => return self.prompt(PromptAction::PairEnqueue),
            (StructureKind::TwoStackQueue, 'd') => Request::Execute(Operation::PairDequeue),
            (StructureKind::TwoStackQueue, 'f') => Request::Query(Query::PairFront),

            (StructureKind::LinkedList, 'h') => return self.prompt(PromptAction::ListHead),
            (StructureKind::LinkedList, 't') => return self.prompt(PromptAction::ListTail),
            (StructureKind::LinkedList, 'i') => return self.prompt(PromptAction::ListInsertAt),
            (StructureKind::LinkedList, 'x') => return self.prompt(PromptAction::ListDeleteAt),
            (StructureKind::LinkedList, 'd') => return self.prompt(PromptAction::ListDeleteValue),
            (StructureKind::LinkedList, 's') => return self.prompt(PromptAction::ListSearch),
            (StructureKind::LinkedList, 'm') => Request::Query(Query::ListMiddle),

            (StructureKind::Bst, 'i') => return self.prompt(PromptAction::BstInsert),
            (StructureKind::Bst, 'd') => return self.prompt(PromptAction::BstDelete),
            (StructureKind::Bst, 's') => return self.prompt(PromptAction::BstSearch),
            (StructureKind::Bst, 't') => Request::Query(Query::Traverse(self.traversal)),
            (StructureKind::Bst, 'o') => {
                self.traversal = self.traversal.next();
                return self.set_status(format!("Traversal order: {}", self.traversal));
            }
            _ => return,
        };
        self.submit(request);
    }

    fn prompt(&mut self, action: PromptAction) {
        self.input_mode = InputMode::Prompt {
            action,
            buffer: String::new(),
        };
    }

    /// Hand a request to the session and report the outcome
    pub fn submit(&mut self, request: Request) {
        let outcome = match request {
            Request::Execute(operation) => {
                let label = operation.to_string();
                self.session.execute(operation).map(|removed| match removed {
                    Some(value) => format!("{}: removed {}", label, value),
                    None => label,
                })
            }
            Request::Query(query) => {
                let label = query.to_string();
                self.session
                    .query(query)
                    .map(|answer| format!("{}: {}", label, answer))
            }
        };
        self.report(outcome);
    }

    fn undo(&mut self) {
        let outcome = self
            .session
            .undo(self.focused)
            .map(|command| format!("Undid {}", command.description()));
        self.report(outcome);
    }

    fn redo(&mut self) {
        let outcome = self
            .session
            .redo(self.focused)
            .map(|command| format!("Redid {}", command.description()));
        self.report(outcome);
    }

    fn report(&mut self, outcome: Result<String, Error>) {
        match outcome {
            Ok(message) => {
                self.last_play_time = Instant::now();
                self.set_status(message);
            }
            Err(e) if e.is_no_op() => self.set_status(capitalize(&e.to_string())),
            Err(e) => self.set_error(capitalize(&e.to_string())),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_in(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_push_through_prompt_then_undo() {
        let mut app = App::new(Session::default(), &Config::default());
        press(&mut app, KeyCode::Char('p'));
        type_in(&mut app, "42");
        assert_eq!(app.session.workbench().stack.items(), &[42]);
        assert_eq!(app.status_message, "Push 42");

        press(&mut app, KeyCode::Char('u'));
        assert!(app.session.workbench().stack.is_empty());
        assert_eq!(app.status_message, "Undid Push 42");
    }

    #[test]
    fn test_errors_reach_status_bar() {
        let mut app = App::new(Session::default(), &Config::default());
        press(&mut app, KeyCode::Char('o'));
        assert!(app.status_is_error);
        assert_eq!(app.status_message, "Stack is empty, cannot pop");

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.status_is_error);
        assert_eq!(app.status_message, "Nothing to redo");
    }

    #[test]
    fn test_tab_switches_structure() {
        let mut app = App::new(Session::default(), &Config::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, StructureKind::Queue);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused, StructureKind::Bst);
    }
}
