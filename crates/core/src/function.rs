use std::convert::Infallible;

use nalgebra::DVector;

/// A scalar function `f: ℝ → ℝ` supplied by the caller.
///
/// Implementations must be free of side effects: solvers may evaluate the
/// same point more than once and in any order.
///
/// Any `Fn(f64) -> f64` implements this trait with an [`Infallible`] error.
/// Implement it on your own type when evaluation can fail.
pub trait ScalarFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// A vector function `F: ℝⁿ → ℝⁿ` supplied by the caller.
///
/// The returned residual vector must have the same dimension as `x`.
///
/// Any `Fn(&DVector<f64>) -> DVector<f64>` implements this trait with an
/// [`Infallible`] error.
pub trait VectorFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual vector `F(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `x`.
    fn call(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error>;
}

impl<F> VectorFunction for F
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    type Error = Infallible;

    fn call(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    #[derive(Debug)]
    struct Undefined;

    impl fmt::Display for Undefined {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("undefined for negative x")
        }
    }

    impl std::error::Error for Undefined {}

    /// Square root that refuses negative inputs.
    struct Sqrt;

    impl ScalarFunction for Sqrt {
        type Error = Undefined;

        fn call(&self, x: f64) -> Result<f64, Undefined> {
            if x < 0.0 { Err(Undefined) } else { Ok(x.sqrt()) }
        }
    }

    #[test]
    fn closures_are_scalar_functions() {
        let f = |x: f64| 3.0 * x + 1.0;
        assert_eq!(ScalarFunction::call(&f, 2.0), Ok(7.0));
    }

    #[test]
    fn custom_scalar_function_can_fail() {
        assert_eq!(Sqrt.call(4.0).ok(), Some(2.0));
        assert!(Sqrt.call(-1.0).is_err());
    }

    #[test]
    fn closures_are_vector_functions() {
        let f = |x: &DVector<f64>| x.map(|v| v - 1.0);
        let fx = VectorFunction::call(&f, &DVector::from_vec(vec![1.0, 3.0])).unwrap();
        assert_eq!(fx, DVector::from_vec(vec![0.0, 2.0]));
    }
}
