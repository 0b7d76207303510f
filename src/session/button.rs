//! Calculator buttons and the functions they supply to the evaluator

use crate::engine::BinaryFn;
use std::f64::consts;

/// Every button on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// A digit 0-9
    Digit(u8),
    Dot,
    ToggleSign,
    Constant(Constant),
    Operator(Operator),
    Unary(UnaryFn),
    AllClear,
    Equals,
}

impl Button {
    /// Short label drawn on the keypad
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS[usize::from(d.min(9))],
            Button::Dot => ".",
            Button::ToggleSign => "±",
            Button::Constant(c) => c.label(),
            Button::Operator(op) => op.symbol(),
            Button::Unary(f) => f.label(),
            Button::AllClear => "AC",
            Button::Equals => "=",
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Binary operators. `Root` is `x^(1/y)`: a power whose exponent is
/// reciprocated by the session before it reaches the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
}

impl Operator {
    /// The binary function handed to the evaluator
    pub fn function(self) -> BinaryFn {
        match self {
            Operator::Add => add,
            Operator::Subtract => subtract,
            Operator::Multiply => multiply,
            Operator::Divide => divide,
            Operator::Power | Operator::Root => f64::powf,
        }
    }

    pub fn is_root(self) -> bool {
        self == Operator::Root
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Power => "xʸ",
            Operator::Root => "ʸ√x",
        }
    }

    /// How the operator reads between two operands in the expression hint
    pub fn infix(self) -> &'static str {
        match self {
            Operator::Power => "^",
            Operator::Root => "^ 1/",
            other => other.symbol(),
        }
    }
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    a / b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    E,
    Pi,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::E => consts::E,
            Constant::Pi => consts::PI,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Constant::E => "e",
            Constant::Pi => "π",
        }
    }
}

/// Functions that replace the displayed number in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    Log10,
    Percent,
}

impl UnaryFn {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            UnaryFn::Log10 => value.log10(),
            UnaryFn::Percent => value / 100.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnaryFn::Log10 => "log",
            UnaryFn::Percent => "%",
        }
    }
}
