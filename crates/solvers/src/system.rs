//! Solvers for nonlinear systems — finding `x` with `F(x) = 0`.
//!
//! A [`VectorFunction`] maps `x ∈ ℝⁿ` to a residual vector in `ℝⁿ`. Solvers
//! in this module drive the residual norm toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton iteration with a forward-difference Jacobian
//!
//! [`jacobian`] exposes the finite-difference approximation on its own.
//!
//! [`VectorFunction`]: nroot_core::VectorFunction

mod evaluate;

pub use evaluate::EvalError;

pub mod jacobian;
pub mod newton;
