use std::error::Error as StdError;

use nalgebra::DVector;
use thiserror::Error;

use nroot_core::VectorFunction;

/// Errors that can occur when evaluating a vector function.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The function call failed.
    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    /// The residual vector has a different dimension than `x`.
    #[error("residual has dimension {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A residual component is NaN or infinite.
    #[error("non-finite residual component {index}: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Evaluates `F(x)`, rejecting failures, wrong dimensions, and non-finite
/// components.
pub(crate) fn evaluate<F: VectorFunction>(
    f: &F,
    x: &DVector<f64>,
) -> Result<DVector<f64>, EvalError> {
    let residual = f
        .call(x)
        .map_err(|error| EvalError::Function(Box::new(error)))?;

    if residual.len() != x.len() {
        return Err(EvalError::DimensionMismatch {
            expected: x.len(),
            found: residual.len(),
        });
    }

    if let Some((index, &value)) = residual.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EvalError::NonFinite { index, value });
    }

    Ok(residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_dimension() {
        let f = |x: &DVector<f64>| DVector::zeros(x.len() + 1);

        let result = evaluate(&f, &DVector::zeros(2));

        assert!(matches!(
            result,
            Err(EvalError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn rejects_non_finite_component() {
        let f = |x: &DVector<f64>| x.map(|v| 1.0 / v);

        let result = evaluate(&f, &DVector::from_vec(vec![1.0, 0.0]));

        assert!(matches!(result, Err(EvalError::NonFinite { index: 1, .. })));
    }
}
