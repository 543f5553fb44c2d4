//! Forward-difference Jacobian approximation.
//!
//! Column `j` of the Jacobian is approximated by
//!
//! ```text
//! J[:, j] ≈ (F(x + h·eⱼ) − F(x)) / h
//! ```
//!
//! The approximation is first-order in `h`. A large `h` adds truncation
//! error; a small `h` loses digits to cancellation in the numerator. Values
//! around `1e-8` suit functions of order one. When `h` is a power of two the
//! perturbed coordinate is exact, which makes the quotient exact for linear
//! functions with representable coefficients.

use nalgebra::{DMatrix, DVector};

use nroot_core::VectorFunction;

use super::{EvalError, evaluate::evaluate};

/// Approximates the Jacobian of `f` at `x` using forward differences.
///
/// Evaluates `f` a total of `n + 1` times.
///
/// # Errors
///
/// Returns an error if any evaluation of `f` fails, changes dimension, or
/// produces a non-finite component.
///
/// # Example
///
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use nroot_solvers::system::jacobian;
///
/// let f = |x: &DVector<f64>| DVector::from_vec(vec![2.0 * x[0] + x[1], x[0] - x[1]]);
/// let x = DVector::from_vec(vec![0.0, 0.0]);
///
/// let j = jacobian::forward_difference(&f, &x, 2f64.powi(-27)).unwrap();
///
/// assert_eq!(j, DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, -1.0]));
/// ```
pub fn forward_difference<F: VectorFunction>(
    f: &F,
    x: &DVector<f64>,
    h: f64,
) -> Result<DMatrix<f64>, EvalError> {
    let fx = evaluate(f, x)?;
    forward_difference_at(f, x, &fx, h)
}

/// Approximates the Jacobian of `f` at `x` given an already computed `F(x)`.
///
/// Evaluates `f` a total of `n` times. `fx` must equal `F(x)`.
///
/// # Errors
///
/// Returns an error if any evaluation of `f` fails, changes dimension, or
/// produces a non-finite component.
pub fn forward_difference_at<F: VectorFunction>(
    f: &F,
    x: &DVector<f64>,
    fx: &DVector<f64>,
    h: f64,
) -> Result<DMatrix<f64>, EvalError> {
    let n = x.len();
    let mut jacobian = DMatrix::zeros(n, n);
    let mut perturbed = x.clone();

    for j in 0..n {
        let original = perturbed[j];
        perturbed[j] = original + h;
        let f_perturbed = evaluate(f, &perturbed)?;
        perturbed[j] = original;

        jacobian.set_column(j, &((f_perturbed - fx) / h));
    }

    Ok(jacobian)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn recovers_linear_map() {
        let a = DMatrix::from_row_slice(3, 3, &[4.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 4.0]);
        let f = |x: &DVector<f64>| &a * x;
        let x = DVector::from_vec(vec![0.5, -2.0, 3.0]);

        let j = forward_difference(&f, &x, 1e-8).expect("should evaluate");

        assert_relative_eq!(j, a, epsilon = 1e-6);
    }

    #[test]
    fn approximates_nonlinear_derivatives() {
        // F = [x0² x1, sin(x1)], J = [[2 x0 x1, x0²], [0, cos(x1)]]
        let f = |x: &DVector<f64>| DVector::from_vec(vec![x[0] * x[0] * x[1], x[1].sin()]);
        let x = DVector::from_vec(vec![1.5, 0.25]);

        let j = forward_difference(&f, &x, 1e-7).expect("should evaluate");

        let expected = DMatrix::from_row_slice(2, 2, &[0.75, 2.25, 0.0, 0.25_f64.cos()]);
        assert_relative_eq!(j, expected, epsilon = 1e-6);
    }

    #[test]
    fn perturbs_one_coordinate_at_a_time() {
        let seen = std::cell::RefCell::new(Vec::new());
        let f = |x: &DVector<f64>| {
            seen.borrow_mut().push(x.clone());
            x.clone()
        };
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let fx = x.clone();

        forward_difference_at(&f, &x, &fx, 0.5).expect("should evaluate");

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], DVector::from_vec(vec![1.5, 2.0]));
        assert_eq!(seen[1], DVector::from_vec(vec![1.0, 2.5]));
    }

    #[test]
    fn propagates_dimension_errors() {
        let f = |x: &DVector<f64>| {
            if x[0] > 0.0 {
                DVector::zeros(1)
            } else {
                x.clone()
            }
        };
        let x = DVector::from_vec(vec![0.0, 0.0]);

        let result = forward_difference(&f, &x, 1e-8);

        assert!(matches!(result, Err(EvalError::DimensionMismatch { .. })));
    }
}
