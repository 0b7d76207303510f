use crate::engine::EvalError;
use thiserror::Error;

/// Errors surfaced by [`Session::press`](super::Session::press)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EvalError),

    /// The display text could not be read back as a number
    #[error("display does not hold a number: {0:?}")]
    InvalidNumber(String),
}
