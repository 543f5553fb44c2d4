use std::error::Error as StdError;

use thiserror::Error;

use nroot_core::ScalarFunction;

/// Errors that can occur when evaluating a scalar function.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The function call failed.
    #[error("function call failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `f` at `x`, rejecting failures and non-finite values.
pub(crate) fn evaluate<F: ScalarFunction>(f: &F, x: f64) -> Result<f64, EvalError> {
    let value = f.call(x).map_err(|error| EvalError::Function {
        x,
        source: Box::new(error),
    })?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite { x, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_finite_values() {
        let value = evaluate(&|x: f64| x + 1.0, 2.0).expect("finite");
        assert!((value - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_finite_values() {
        let result = evaluate(&|x: f64| 1.0 / x, 0.0);
        assert!(matches!(result, Err(EvalError::NonFinite { .. })));

        let result = evaluate(&|x: f64| x.ln(), -1.0);
        assert!(matches!(result, Err(EvalError::NonFinite { .. })));
    }
}
