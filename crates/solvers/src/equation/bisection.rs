//! Bisection for a single bracketed root.
//!
//! # Algorithm
//!
//! Given a bracket `[a, b]` with `f(a) · f(b) ≤ 0`, each iteration evaluates
//! the midpoint `c = (a + b) / 2` and replaces whichever endpoint shares the
//! sign of `f(c)`. The bracket halves every iteration, so convergence is
//! guaranteed for continuous functions.
//!
//! The solve converges when `f(c)` is exactly zero, when `|f(c)| < tolerance`,
//! or when the bracket width `b − a` drops below `tolerance`. If `max_iters`
//! is exhausted first, the midpoint of the final bracket is returned with
//! [`Status::DidNotConverge`] so the caller can decide whether to trust it.
//! If that midpoint cannot be evaluated, the last evaluated midpoint is
//! returned instead.
//!
//! # Trace
//!
//! Every iteration appends one [`TraceRecord`] to [`Solution::trace`], so the
//! trace length always equals [`Solution::iters`]. The trace is diagnostic
//! only and never influences control flow.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the midpoint has been
//! evaluated. Observers can return [`Action::StopEarly`] to halt immediately.

mod action;
mod config;
mod error;
mod event;
mod signed;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status, TraceRecord};

use nroot_core::{Observer, ScalarFunction};

use super::{Bracket, BracketError, evaluate::evaluate};

use signed::SignedBracket;

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The bracket endpoints may be given in either order.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] without iterating if the endpoints are
/// non-finite, equal, or do not bracket a sign change. Returns an evaluation
/// error if `f` fails or produces a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    let bounds = Bracket::new(bracket)?;

    let left_value = evaluate(f, bounds.left())?;
    let right_value = evaluate(f, bounds.right())?;

    if left_value * right_value > 0.0 {
        return Err(BracketError::NoSignChange.into());
    }

    if left_value.abs() < config.tolerance() {
        return Ok(Solution::at_endpoint(bounds.left(), left_value));
    }
    if right_value.abs() < config.tolerance() {
        return Ok(Solution::at_endpoint(bounds.right(), right_value));
    }

    let mut bracket = SignedBracket::new(bounds, left_value);
    let mut trace = Vec::with_capacity(config.max_iters().min(64));

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let value = evaluate(f, mid)?;

        let record = TraceRecord {
            iter,
            left: bracket.left(),
            right: bracket.right(),
            mid,
            value,
        };
        trace.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event::new(record)) {
            return Ok(Solution::new(Status::StoppedByObserver, mid, value, trace));
        }

        #[allow(clippy::float_cmp)]
        let exact = value == 0.0;
        if exact || value.abs() < config.tolerance() || bracket.width() < config.tolerance() {
            return Ok(Solution::new(Status::Converged, mid, value, trace));
        }

        bracket.shrink(mid, value);
    }

    // Fall back to the last evaluated midpoint if the final one cannot be evaluated.
    let x = bracket.midpoint();
    let (x, residual) = match (evaluate(f, x), trace.last()) {
        (Ok(residual), _) => (x, residual),
        (Err(_), Some(last)) => (last.mid, last.value),
        (Err(error), None) => return Err(error.into()),
    };
    Ok(Solution::new(Status::DidNotConverge, x, residual, trace))
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
