//! Newton's method for nonlinear systems.
//!
//! # Algorithm
//!
//! Starting from a caller-supplied guess `x₀`, each pass:
//!
//! 1. evaluates the residual `F(x)` and records `‖F(x)‖₂` in the history;
//! 2. stops successfully if `‖F(x)‖ < tolerance`;
//! 3. builds a fresh forward-difference Jacobian `J` at `x`;
//! 4. solves `J·Δx = −F(x)` by LU decomposition, failing with
//!    [`Error::SingularJacobian`] if the system has no solution;
//! 5. updates `x ← x + Δx` and stops successfully if `‖Δx‖ < tolerance`.
//!
//! The Jacobian is rebuilt on every pass, costing `n` extra evaluations of `F`.
//!
//! Either criterion suffices. Running out of iterations fails with
//! [`Error::DidNotConverge`]. Failures carry the iteration count and the
//! residual history so the caller can retry from a different guess or with a
//! different perturbation.
//!
//! # Iterations and history
//!
//! [`Solution::iters`] counts Newton updates applied to `x`. The history holds
//! one residual norm per visited iterate, starting with `‖F(x₀)‖`, so a solve
//! that converges on its residual has `iters + 1` history entries. A solve that
//! converges on its step records the final residual only if `F` can be
//! evaluated there; otherwise [`Solution::residual_norm`] is NaN.
//!
//! # Perturbation
//!
//! The default perturbation `h = 1e-8` is not exactly representable, so even
//! for an affine `F` the forward-difference Jacobian carries rounding error and
//! a linear system typically needs two updates. A power-of-two perturbation
//! such as `2⁻²⁷` makes the Jacobian of an affine map exact, and the solve
//! then finishes in a single update.
//!
//! # Convergence
//!
//! Convergence is local. A guess far from a root may wander, hit a singular
//! Jacobian, or exhaust the iteration cap.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every update. Observers can return
//! [`Action::StopEarly`] to halt, which ends the solve with
//! [`Error::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Convergence, Solution};

use nalgebra::DVector;

use nroot_core::{Observer, VectorFunction};

use super::{evaluate::evaluate, jacobian};

/// Solves `F(x) = 0` with Newton's method starting from `x0`.
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if a linear solve fails,
/// [`Error::DidNotConverge`] if the iteration cap is reached,
/// [`Error::StoppedByObserver`] if the observer halts the solve, and an
/// evaluation error if `f` fails, changes dimension, or produces a non-finite
/// residual.
pub fn solve<F, Obs>(
    f: &F,
    x0: &DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    Obs: Observer<Event, Action>,
{
    if x0.is_empty() {
        return Err(Error::EmptySystem);
    }

    let mut x = x0.clone();
    let mut history = Vec::new();
    let mut residual = evaluate(f, &x)?;

    for iters in 0..config.max_iters() {
        let residual_norm = residual.norm();
        history.push(residual_norm);

        if residual_norm < config.tolerance() {
            return Ok(Solution::new(
                x,
                iters,
                Convergence::Residual,
                residual_norm,
                history,
            ));
        }

        let jacobian = jacobian::forward_difference_at(f, &x, &residual, config.perturbation())?;
        let step = match jacobian.lu().solve(&(-&residual)) {
            Some(step) if step.iter().all(|v| v.is_finite()) => step,
            _ => return Err(Error::SingularJacobian { iters, history }),
        };

        x += &step;
        let step_norm = step.norm();
        let iters = iters + 1;

        let event = Event {
            iter: iters,
            x: x.clone(),
            step,
            residual_norm,
            step_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(Error::StoppedByObserver { iters, history });
        }

        if step_norm < config.tolerance() {
            // The step criterion alone ends the solve; the final residual is
            // only recorded when it can be evaluated.
            let residual_norm = match evaluate(f, &x) {
                Ok(residual) => {
                    let norm = residual.norm();
                    history.push(norm);
                    norm
                }
                Err(_) => f64::NAN,
            };
            return Ok(Solution::new(
                x,
                iters,
                Convergence::Step,
                residual_norm,
                history,
            ));
        }

        residual = evaluate(f, &x)?;
    }

    let residual_norm = residual.norm();
    history.push(residual_norm);
    if residual_norm < config.tolerance() {
        return Ok(Solution::new(
            x,
            config.max_iters(),
            Convergence::Residual,
            residual_norm,
            history,
        ));
    }

    Err(Error::DidNotConverge {
        iters: config.max_iters(),
        history,
    })
}

/// Runs Newton's method without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F: VectorFunction>(
    f: &F,
    x0: &DVector<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}
