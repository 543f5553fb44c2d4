use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{BracketError, EvalError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function call failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::Function { x, source } => Self::Function { x, source },
            EvalError::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}
