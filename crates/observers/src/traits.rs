//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch a bisection solve and a Newton solve alike.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual magnitude
//! - [`HasIteration`] — events that carry an iteration counter
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nroot_core::Observer;
//! use nroot_observers::traits::{CanStopEarly, HasIteration, HasResidual};
//!
//! /// Stops once the residual is small enough after a warm-up period.
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasResidual + HasIteration, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iteration() >= self.min_iters && event.residual() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use nroot_solvers::{equation::bisection, system::newton};

/// An event that carries a residual magnitude.
pub trait HasResidual {
    /// Returns the non-negative residual magnitude for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a 1-based iteration counter.
pub trait HasIteration {
    /// Returns the iteration that produced this event.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.value().abs()
    }
}

impl HasIteration for bisection::Event {
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

/// The residual norm at the iterate the step was computed from.
impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual_norm
    }
}

impl HasIteration for newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
