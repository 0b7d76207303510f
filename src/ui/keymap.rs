//! Keyboard bindings for the calculator keypad

use crate::session::{Button, Constant, Operator, Session, SessionError, UnaryFn};
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Button),
    Quit,
}

/// Errors from replaying a typed key sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("no calculator button for key {0:?}")]
    UnknownKey(char),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Character bindings. Every button has at least one key.
#[derive(Debug, Clone)]
pub struct Keymap {
    chars: FxHashMap<char, Button>,
}

impl Keymap {
    pub fn new() -> Self {
        let mut chars = FxHashMap::default();
        for d in 0..=9u8 {
            chars.insert(char::from(b'0' + d), Button::Digit(d));
        }
        let bindings = [
            ('.', Button::Dot),
            ('n', Button::ToggleSign),
            ('e', Button::Constant(Constant::E)),
            ('p', Button::Constant(Constant::Pi)),
            ('+', Button::Operator(Operator::Add)),
            ('-', Button::Operator(Operator::Subtract)),
            ('*', Button::Operator(Operator::Multiply)),
            ('x', Button::Operator(Operator::Multiply)),
            ('/', Button::Operator(Operator::Divide)),
            ('^', Button::Operator(Operator::Power)),
            ('r', Button::Operator(Operator::Root)),
            ('l', Button::Unary(UnaryFn::Log10)),
            ('%', Button::Unary(UnaryFn::Percent)),
            ('c', Button::AllClear),
            ('=', Button::Equals),
        ];
        chars.extend(bindings);
        Keymap { chars }
    }

    pub fn button_for_char(&self, c: char) -> Option<Button> {
        self.chars.get(&c).copied()
    }

    /// Translate a terminal key event
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<KeyAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
            KeyCode::Enter => Some(KeyAction::Press(Button::Equals)),
            KeyCode::Esc | KeyCode::Delete => Some(KeyAction::Press(Button::AllClear)),
            KeyCode::Char(c) => self.button_for_char(c).map(KeyAction::Press),
            _ => None,
        }
    }

    /// Lowest key bound to a button
    pub fn key_for_button(&self, button: Button) -> Option<char> {
        self.chars
            .iter()
            .filter(|(_, b)| **b == button)
            .map(|(c, _)| *c)
            .min()
    }

    /// Feed typed keys through a session, skipping whitespace.
    ///
    /// `q` stops the replay early; ignored presses are not errors.
    pub fn replay(&self, session: &mut Session, keys: &str) -> Result<(), ReplayError> {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            if c == 'q' {
                break;
            }
            let button = self.button_for_char(c).ok_or(ReplayError::UnknownKey(c))?;
            let outcome = session.press(button)?;
            debug!("replay {:?} -> {:?}", c, outcome);
        }
        Ok(())
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
