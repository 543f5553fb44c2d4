use std::error::Error as StdError;

use thiserror::Error;

use crate::system::EvalError;

/// Errors that can occur during a Newton solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess is empty")]
    EmptySystem,

    #[error("singular Jacobian after {iters} iterations")]
    SingularJacobian { iters: usize, history: Vec<f64> },

    #[error("did not converge in {iters} iterations")]
    DidNotConverge { iters: usize, history: Vec<f64> },

    #[error("stopped by observer after {iters} iterations")]
    StoppedByObserver { iters: usize, history: Vec<f64> },

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("residual has dimension {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("non-finite residual component {index}: {value}")]
    NonFiniteResidual { index: usize, value: f64 },
}

impl Error {
    /// Returns the residual norm history recorded before the failure, if any.
    #[must_use]
    pub fn history(&self) -> Option<&[f64]> {
        match self {
            Self::SingularJacobian { history, .. }
            | Self::DidNotConverge { history, .. }
            | Self::StoppedByObserver { history, .. } => Some(history),
            _ => None,
        }
    }

    /// Returns the number of updates applied before the failure, if known.
    #[must_use]
    pub fn iters(&self) -> Option<usize> {
        match self {
            Self::SingularJacobian { iters, .. }
            | Self::DidNotConverge { iters, .. }
            | Self::StoppedByObserver { iters, .. } => Some(*iters),
            _ => None,
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::Function(e) => Self::Function(e),
            EvalError::DimensionMismatch { expected, found } => {
                Self::DimensionMismatch { expected, found }
            }
            EvalError::NonFinite { index, value } => Self::NonFiniteResidual { index, value },
        }
    }
}
