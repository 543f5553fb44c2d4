//! Reusable observers for nroot solvers.
//!
//! Solvers report progress through [`Observer`] events rather than logging.
//! This crate provides observers and capability traits that work across the
//! bisection and Newton solvers.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//! - [`Recorder`] — collects every event for later inspection
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: nroot_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

mod recorder;

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use recorder::Recorder;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
