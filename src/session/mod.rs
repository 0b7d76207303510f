//! Calculator session state machine
//!
//! A [`Session`] sits between button presses and the [`StepEvaluator`]. It
//! decides when the displayed number is committed as an operand, when an
//! operator press is ignored, and when a root's exponent must be reciprocated.
//!
//! # Phases
//!
//! ```text
//! AwaitingFirstOperand          --operator-->  AwaitingSecondOperand { root }
//! AwaitingSecondOperand { .. }  --operand--->  AwaitingOperator, or RootPending if root
//! AwaitingOperator, RootPending --operator-->  AwaitingSecondOperand { root }
//! any phase                     --"=" / AC-->  AwaitingFirstOperand
//! ```
//!
//! Repeated operator presses in `AwaitingSecondOperand` are ignored until a new
//! operand is entered. `=` always commits the displayed number, so `3 + =`
//! gives `6`.

mod button;
mod errors;

pub use button::{Button, Constant, Operator, UnaryFn};
pub use errors::SessionError;

use crate::display::{display_string, DisplayBuffer};
use crate::engine::{EvalError, StepEvaluator};
use log::debug;

/// Where the session is in building a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing pending; the display holds the first operand or a finished result
    AwaitingFirstOperand,
    /// An operator was just pressed and the display shows the running result
    AwaitingSecondOperand { root: bool },
    /// The right operand of a plain binary operator is being entered
    AwaitingOperator,
    /// The right operand of `x^(1/y)` is being entered
    RootPending,
}

impl Phase {
    /// Short uppercase name for the status bar
    pub fn badge(self) -> &'static str {
        match self {
            Phase::AwaitingFirstOperand => "READY",
            Phase::AwaitingSecondOperand { .. } => "OPERAND?",
            Phase::AwaitingOperator => "ENTRY",
            Phase::RootPending => "ROOT",
        }
    }
}

/// What a press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The press was valid but had no effect
    Ignored(&'static str),
}

/// One calculator session: evaluator, display and phase
#[derive(Debug, Clone)]
pub struct Session {
    evaluator: StepEvaluator,
    display: DisplayBuffer,
    phase: Phase,

    /// Operator waiting for its right operand, kept for the expression hint
    pending_operator: Option<Operator>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            evaluator: StepEvaluator::new(),
            display: DisplayBuffer::new(),
            phase: Phase::AwaitingFirstOperand,
            pending_operator: None,
        }
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn evaluator(&self) -> &StepEvaluator {
        &self.evaluator
    }

    /// The folded left side and pending operator, e.g. `"7 +"`
    pub fn expression_hint(&self) -> Option<String> {
        let op = self.pending_operator?;
        let left = self.evaluator.calculate()?;
        Some(format!("{} {}", display_string(left), op.infix()))
    }

    /// Handle one button press.
    ///
    /// Errors leave the session as it was before the press.
    pub fn press(&mut self, button: Button) -> Result<Outcome, SessionError> {
        debug!("press {:?} in {:?}", button, self.phase);
        match button {
            Button::Digit(d) => {
                self.display.push_digit(d);
                self.operand_entered();
                Ok(Outcome::Applied)
            }
            Button::Dot => {
                if self.display.push_dot() {
                    self.operand_entered();
                    Ok(Outcome::Applied)
                } else {
                    debug!("dot ignored: display already contains '.'");
                    Ok(Outcome::Ignored("number already has a decimal point"))
                }
            }
            Button::ToggleSign => {
                self.display.toggle_sign();
                Ok(Outcome::Applied)
            }
            Button::Constant(constant) => {
                self.display.show(constant.value());
                self.operand_entered();
                Ok(Outcome::Applied)
            }
            Button::Unary(function) => {
                let value = self.display.value()?;
                self.display.show(function.apply(value));
                self.operand_entered();
                Ok(Outcome::Applied)
            }
            Button::Operator(op) => self.press_operator(op),
            Button::Equals => self.press_equals(),
            Button::AllClear => {
                self.clear();
                Ok(Outcome::Applied)
            }
        }
    }

    /// Reset evaluator, display and phase
    pub fn clear(&mut self) {
        self.evaluator.reset();
        self.display.clear();
        self.pending_operator = None;
        self.transition(Phase::AwaitingFirstOperand);
    }

    fn press_operator(&mut self, op: Operator) -> Result<Outcome, SessionError> {
        if let Phase::AwaitingSecondOperand { .. } = self.phase {
            debug!("operator {:?} ignored until a new operand is entered", op);
            return Ok(Outcome::Ignored("waiting for the next number"));
        }

        let result = self.commit_display()?;
        self.display.show(result);
        self.evaluator.add_operation(op.function())?;
        self.pending_operator = Some(op);
        self.transition(Phase::AwaitingSecondOperand { root: op.is_root() });
        Ok(Outcome::Applied)
    }

    fn press_equals(&mut self) -> Result<Outcome, SessionError> {
        let result = self.commit_display()?;
        self.display.show(result);
        self.evaluator.reset();
        self.pending_operator = None;
        self.transition(Phase::AwaitingFirstOperand);
        Ok(Outcome::Applied)
    }

    /// Hand the displayed number to the evaluator and return the running result.
    /// The exponent of a pending root is reciprocated first.
    fn commit_display(&mut self) -> Result<f64, SessionError> {
        let mut operand = self.display.value()?;
        if self.root_pending() {
            operand = 1.0 / operand;
        }
        self.evaluator.add_operand(operand);
        // add_operand always leaves a result behind
        self.evaluator
            .calculate()
            .ok_or(SessionError::Engine(EvalError::InvalidSequence))
    }

    fn root_pending(&self) -> bool {
        matches!(
            self.phase,
            Phase::RootPending | Phase::AwaitingSecondOperand { root: true }
        )
    }

    /// A digit, constant or unary result now occupies the display
    fn operand_entered(&mut self) {
        if let Phase::AwaitingSecondOperand { root } = self.phase {
            self.transition(if root {
                Phase::RootPending
            } else {
                Phase::AwaitingOperator
            });
        }
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            debug!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
