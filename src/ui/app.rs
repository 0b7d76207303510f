//! Main TUI application state and logic

use crate::session::{Button, Outcome, Session};
use crate::ui::keymap::{KeyAction, Keymap};
use crate::ui::panes::KeypadHit;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use log::{debug, warn};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Widest the calculator grows; extra terminal width is left empty
const MAX_WIDTH: u16 = 48;

/// The main application state
pub struct App {
    /// The calculator session driven by this UI
    pub session: Session,

    pub keymap: Keymap,

    /// Last button pressed, highlighted on the keypad
    pub last_pressed: Option<Button>,

    /// Where each keypad button was drawn in the last frame
    pub keypad_hits: Vec<KeypadHit>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            keymap: Keymap::new(),
            last_pressed: None,
            keypad_hits: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Centre the calculator column
        let width = size.width.min(MAX_WIDTH);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((size.width - width) / 2),
                Constraint::Length(width),
                Constraint::Min(0),
            ])
            .split(main_chunks[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[1]);

        let hint = self.session.expression_hint();
        super::panes::render_readout_pane(
            frame,
            rows[0],
            self.session.display_text(),
            hint.as_deref(),
            self.status_is_error,
        );

        self.keypad_hits = super::panes::render_keypad_pane(frame, rows[1], self.last_pressed);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.phase(),
            self.status_is_error,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.keymap.action_for_key(&key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::Press(button)) => self.press(button),
            None => debug!("unbound key {:?}", key.code),
        }
    }

    /// Handle mouse events: a left click on a keypad button presses it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .keypad_hits
            .iter()
            .find(|hit| hit.contains(mouse.column, mouse.row))
            .map(|hit| hit.button);
        if let Some(button) = hit {
            self.press(button);
        }
    }

    /// Press a calculator button and report the outcome in the status bar
    pub fn press(&mut self, button: Button) {
        self.last_pressed = Some(button);
        match self.session.press(button) {
            Ok(Outcome::Applied) => {
                self.status_message = format!("Pressed {}", button.label());
                self.status_is_error = false;
            }
            Ok(Outcome::Ignored(reason)) => {
                self.status_message = format!("Ignored {}: {}", button.label(), reason);
                self.status_is_error = false;
            }
            Err(e) => {
                warn!("press {:?} failed: {}", button, e);
                self.status_message = format!("Error: {}", e);
                self.status_is_error = true;
            }
        }
    }
}
