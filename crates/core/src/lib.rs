//! Core traits for the nroot solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`] — a mapping `ℝ → ℝ` whose roots a solver locates
//! - [`VectorFunction`] — a mapping `ℝⁿ → ℝⁿ` whose residuals a solver drives
//!   to zero
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Plain closures implement the function traits directly, so most callers
//! never name them:
//!
//! ```
//! use nroot_core::ScalarFunction;
//!
//! let f = |x: f64| x * x - 2.0;
//! assert_eq!(ScalarFunction::call(&f, 2.0), Ok(2.0));
//! ```

mod function;
mod observer;

pub use function::{ScalarFunction, VectorFunction};
pub use observer::Observer;

pub use nalgebra::{DMatrix, DVector};
