use nalgebra::DVector;

/// Event emitted by the Newton solver after each update.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Update counter (1-based).
    pub iter: usize,

    /// The iterate after applying the update.
    pub x: DVector<f64>,

    /// The update step `Δx`.
    pub step: DVector<f64>,

    /// Residual norm at the iterate the step was computed from.
    pub residual_norm: f64,

    /// Norm of the update step.
    pub step_norm: f64,
}
