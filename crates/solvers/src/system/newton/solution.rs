use nalgebra::DVector;

/// Which criterion ended a successful Newton solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The residual norm dropped below the tolerance.
    Residual,

    /// The update step norm dropped below the tolerance.
    Step,
}

/// The result of a successful Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The converged solution vector.
    pub x: DVector<f64>,

    /// Number of Newton updates applied.
    pub iters: usize,

    /// The criterion that ended the solve.
    pub convergence: Convergence,

    /// Residual norm `‖F(x)‖` at the returned solution.
    ///
    /// NaN if the solve converged on its step and `F` could not be evaluated
    /// at the final iterate.
    pub residual_norm: f64,

    /// Residual norm at every visited iterate, starting with the initial guess.
    pub history: Vec<f64>,
}

impl Solution {
    pub(super) fn new(
        x: DVector<f64>,
        iters: usize,
        convergence: Convergence,
        residual_norm: f64,
        history: Vec<f64>,
    ) -> Self {
        Self {
            x,
            iters,
            convergence,
            residual_norm,
            history,
        }
    }
}
