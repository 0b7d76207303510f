//! Step evaluation engine
//!
//! This module provides the arithmetic core of the calculator:
//! - [`evaluator`]: the left-to-right [`StepEvaluator`] fold
//! - [`errors`]: the [`EvalError`] contract-violation type
//!
//! # Evaluation Model
//!
//! Operands and binary operations arrive one at a time. Each operand that
//! follows a pending operation is folded into the running result immediately,
//! so there is no precedence: `3 + 4 * 2` is `(3 + 4) * 2`.
//!
//! Unary modifiers (such as the reciprocal used for roots) are not part of the
//! engine. The caller transforms the operand before handing it over.

pub mod errors;
pub mod evaluator;

pub use errors::EvalError;
pub use evaluator::{BinaryFn, StepEvaluator};
