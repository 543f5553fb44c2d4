//! Root-finding solvers for scalar equations and nonlinear systems.
//!
//! - [`equation`] — locate roots of `f: ℝ → ℝ` by scanning a domain for sign
//!   changes and refining each bracket with bisection
//! - [`system`] — solve `F(x) = 0` for `F: ℝⁿ → ℝⁿ` with Newton's method and a
//!   forward-difference Jacobian
//!
//! Every solver takes an explicit `Config`, reports progress through an
//! [`Observer`](nroot_core::Observer), and returns a tagged result so a failed
//! solve can never be mistaken for a numeric answer.

pub mod equation;
pub mod system;
