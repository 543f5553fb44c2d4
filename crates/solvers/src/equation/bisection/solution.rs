/// Indicates how the bisection solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit; `x` is a best-effort estimate.
    DidNotConverge,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One bisection iteration: the bracket that was split and its midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Left endpoint before the split.
    pub left: f64,

    /// Right endpoint before the split.
    pub right: f64,

    /// Midpoint evaluated in this iteration.
    pub mid: f64,

    /// Function value at the midpoint.
    pub value: f64,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Number of bisection iterations performed.
    pub iters: usize,

    /// One record per iteration, in order.
    pub trace: Vec<TraceRecord>,
}

impl Solution {
    pub(super) fn new(status: Status, x: f64, residual: f64, trace: Vec<TraceRecord>) -> Self {
        Self {
            status,
            x,
            residual,
            iters: trace.len(),
            trace,
        }
    }

    /// A bracket endpoint that already satisfies the tolerance.
    pub(super) fn at_endpoint(x: f64, residual: f64) -> Self {
        Self::new(Status::Converged, x, residual, Vec::new())
    }

    /// Returns true if the solve met the configured tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
