//! Solvers for scalar equations — finding roots of `f(x) = 0`.
//!
//! A [`ScalarFunction`] is evaluated on a bounded domain. Solvers in this module
//! locate intervals where it changes sign and narrow them down to roots.
//!
//! # Solvers
//!
//! - [`scan`] — fixed-step sweep of a domain that yields sign-change brackets
//! - [`bisection`] — guaranteed convergence on a single bracket
//! - [`roots`] — scan plus bisection plus deduplication, for "all roots in a
//!   domain" questions
//!
//! [`ScalarFunction`]: nroot_core::ScalarFunction

mod bracket;
mod evaluate;

pub use bracket::{Bracket, BracketError};
pub use evaluate::EvalError;

pub mod bisection;
pub mod roots;
pub mod scan;
