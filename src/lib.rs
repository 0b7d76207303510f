//! # Introduction
//!
//! stepcalc is a terminal calculator. Button presses are folded strictly left
//! to right into a running result, the way a pocket calculator does it, and
//! shown through a keyboard- and mouse-driven UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Press pipeline
//!
//! ```text
//! Key/Mouse → Keymap → Button → Session → StepEvaluator → DisplayBuffer → TUI
//! ```
//!
//! 1. [`engine`] — the [`engine::StepEvaluator`] fold: operands and binary
//!    operations, no precedence (`3 + 4 × 2` is `14`).
//! 2. [`display`] — number formatting (`2.0` shows as `2`) and the editable
//!    display text.
//! 3. [`session`] — the phase state machine that decides when the display is
//!    committed, when operator presses are ignored and when a root's exponent
//!    is reciprocated.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Buttons
//!
//! Digits, decimal point, sign, `e`, `π`, `+ − × ÷`, `xʸ`, `x^(1/y)`,
//! `log10`, `%`, `AC` and `=`.

pub mod display;
pub mod engine;
pub mod session;
pub mod ui;
