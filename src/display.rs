//! Display-string formatting and the editable display buffer
//!
//! [`display_string`] is the one place numbers become text. Integer values
//! lose their fractional part (`2.0` is shown as `"2"`), everything else uses
//! the shortest representation that parses back to the same `f64`.
//!
//! [`DisplayBuffer`] holds what the user sees while typing and knows whether
//! the next digit should start a new number or extend the current one.

use crate::session::SessionError;

/// Magnitudes at or above this switch to exponent notation
const EXPONENT_ABOVE: f64 = 1e16;

/// Non-zero magnitudes below this switch to exponent notation
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a value the way the calculator display shows it
pub fn display_string(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    // Also catches -0.0
    if value == 0.0 {
        return String::from("0");
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        format!("{:e}", value)
    } else {
        // `Display` for f64 is already shortest round-trip and drops `.0`
        format!("{}", value)
    }
}

/// Parse display text back into a number.
///
/// Accepts everything [`display_string`] produces plus in-progress entries
/// such as `"5."` and `"-0"`.
pub fn parse_display(text: &str) -> Result<f64, SessionError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidNumber(text.to_string()))
}

/// The editable text shown on the calculator display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,

    /// When set, the next digit replaces the text instead of extending it
    overwrite: bool,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        DisplayBuffer {
            text: String::from("0"),
            overwrite: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_overwriting(&self) -> bool {
        self.overwrite
    }

    /// Parse the current text as a number
    pub fn value(&self) -> Result<f64, SessionError> {
        parse_display(&self.text)
    }

    /// Enter a digit (0-9)
    pub fn push_digit(&mut self, digit: u8) {
        let digit = char::from(b'0' + digit.min(9));
        if self.overwrite {
            self.text = digit.to_string();
            self.overwrite = false;
            return;
        }
        match self.text.as_str() {
            "0" => self.text = digit.to_string(),
            "-0" => self.text = format!("-{}", digit),
            _ => self.text.push(digit),
        }
    }

    /// Enter a decimal point. Returns `false` if the number already has one.
    pub fn push_dot(&mut self) -> bool {
        if self.overwrite {
            self.text = String::from("0.");
            self.overwrite = false;
            return true;
        }
        if self.text.contains('.') {
            return false;
        }
        self.text.push('.');
        true
    }

    pub fn toggle_sign(&mut self) {
        match self.text.strip_prefix('-') {
            Some(rest) => self.text = rest.to_string(),
            None => self.text.insert(0, '-'),
        }
    }

    /// Show a computed value; the next digit starts a new number
    pub fn show(&mut self, value: f64) {
        self.text = display_string(value);
        self.overwrite = true;
    }

    pub fn clear(&mut self) {
        *self = DisplayBuffer::new();
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}
