//! Error types for the step evaluator
//!
//! The evaluator has exactly one failure mode: being asked to apply an
//! operation before it has anything to apply it to. Arithmetic exceptional
//! values (infinity, NaN) are ordinary `f64` results and never errors.

use thiserror::Error;

/// Errors raised by [`StepEvaluator`](super::StepEvaluator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operation was added before any operand
    #[error("invalid sequence: an operation needs a left operand")]
    InvalidSequence,
}
