//! Left-to-right step evaluator

use super::errors::EvalError;
use log::trace;

/// A binary operation applied between the running result and the next operand
pub type BinaryFn = fn(f64, f64) -> f64;

/// Folds operands and binary operations strictly left to right.
///
/// The evaluator keeps only the fold so far and the operation waiting for its
/// right operand. Nothing is re-parsed on [`calculate`](Self::calculate).
#[derive(Debug, Clone, Default)]
pub struct StepEvaluator {
    /// Running result; `None` until the first operand arrives
    current: Option<f64>,

    /// Operation waiting for its right operand
    pending: Option<BinaryFn>,
}

impl StepEvaluator {
    pub fn new() -> Self {
        StepEvaluator {
            current: None,
            pending: None,
        }
    }

    /// Append an operand, folding it into the running result if an operation is pending
    pub fn add_operand(&mut self, value: f64) {
        self.current = match (self.current, self.pending.take()) {
            (Some(left), Some(op)) => {
                let folded = op(left, value);
                trace!("fold {} with {} -> {}", left, value, folded);
                Some(folded)
            }
            _ => {
                trace!("operand {} starts the fold", value);
                Some(value)
            }
        };
    }

    /// Append a pending binary operation.
    ///
    /// Fails with [`EvalError::InvalidSequence`] when no operand has been added
    /// yet; the evaluator is left untouched in that case. A second call before
    /// the next operand replaces the pending operation.
    pub fn add_operation(&mut self, op: BinaryFn) -> Result<(), EvalError> {
        if self.current.is_none() {
            return Err(EvalError::InvalidSequence);
        }
        self.pending = Some(op);
        Ok(())
    }

    /// The running result, or `None` if no operand was ever added
    pub fn calculate(&self) -> Option<f64> {
        self.current
    }

    /// Discard all accumulated state
    pub fn reset(&mut self) {
        *self = StepEvaluator::new();
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Whether an operation is waiting for its right operand
    pub fn has_pending_operation(&self) -> bool {
        self.pending.is_some()
    }
}
