//! Plotting observer for visualizing convergence.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use nroot_core::Observer;
use nroot_solvers::{equation::bisection, system::newton};

/// Rendering options for [`PlotObserver::show`].
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Newton").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, and a linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀(y)` instead of `y`.
    ///
    /// Non-positive values have no logarithm and are dropped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Extracts plot data from a solver event.
///
/// Implemented for [`bisection::Event`] (midpoint and `|f(mid)|`) and
/// [`newton::Event`] (residual norm and step norm). Return `None` from [`x`](Plottable::x) to skip an event,
/// or `None` in a trace slot to skip that trace only.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event.
    fn x(&self) -> Option<f64>;

    /// The y-axis value of each trace.
    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
fn iteration(iter: usize) -> f64 {
    iter as f64
}

impl Plottable<2> for bisection::Event {
    fn x(&self) -> Option<f64> {
        Some(iteration(self.iter()))
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x()), Some(self.value().abs())]
    }
}

/// Plotted at the index of the iterate the step was computed from, so the
/// residual trace lines up with the solution history.
impl Plottable<2> for newton::Event {
    fn x(&self) -> Option<f64> {
        Some(iteration(self.iter - 1))
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.residual_norm), Some(self.step_norm)]
    }
}

/// An observer that collects trace data while solving and displays it via egui.
///
/// `N` is the number of traces. Pass `&mut PlotObserver` as the observer of
/// any solver whose event implements [`Plottable<N>`], or call
/// [`record`](PlotObserver::record) from a closure for custom data such as a
/// residual history returned in a solution.
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["‖F(x)‖", "‖Δx‖"]);
/// newton::solve(&f, &x0, &newton::Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("Newton").legend().log_y())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one point per trace at `x`, skipping `None` slots.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the points collected for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Opens a blocking egui window with every collected trace.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        let traces = self
            .names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| (name, prepare(&points, config.log_y)))
            .collect();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Applies the y-axis transform to a trace.
fn prepare(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|[_, y]| *y > 0.0)
            .map(|&[x, y]| [x, y.log10()])
            .collect()
    } else {
        points.to_vec()
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("nroot_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if self.config.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use super::*;

    #[test]
    fn records_bisection_iterations() {
        let f = |x: f64| x * x - 2.0;
        let mut obs = PlotObserver::<2>::new(["x", "|f(x)|"]);

        let solution = bisection::solve(&f, [0.0, 2.0], &bisection::Config::default(), &mut obs)
            .expect("should solve");

        assert_eq!(obs.points(0).len(), solution.iters);
        assert_eq!(obs.points(0)[0], [1.0, 1.0]);
        assert_eq!(obs.points(1)[0], [1.0, 1.0]);
        assert_eq!(obs.points(0)[1], [2.0, 1.5]);
        assert_relative_eq!(obs.points(1)[1][1], 0.25);
    }

    #[test]
    fn records_newton_norms() {
        let f = |x: &DVector<f64>| x.map(|v| v * v - 4.0);
        let mut obs = PlotObserver::<2>::new(["‖F(x)‖", "‖Δx‖"]);

        let solution = newton::solve(
            &f,
            &DVector::from_element(2, 1.0),
            &newton::Config::default(),
            &mut obs,
        )
        .expect("should solve");

        assert_eq!(obs.points(0).len(), solution.iters);
        for ((point, norm), k) in obs.points(0).iter().zip(&solution.history).zip(0_u32..) {
            assert_relative_eq!(point[0], f64::from(k));
            assert_relative_eq!(point[1], *norm);
        }
    }

    #[test]
    fn skips_missing_trace_values() {
        let mut obs = PlotObserver::<2>::new(["a", "b"]);
        obs.record(1.0, [Some(2.0), None]);
        obs.record(2.0, [None, Some(3.0)]);

        assert_eq!(obs.points(0), [[1.0, 2.0]]);
        assert_eq!(obs.points(1), [[2.0, 3.0]]);
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let points = [[0.0, 100.0], [1.0, 0.0], [2.0, 1e-3], [3.0, -1.0]];

        let prepared = prepare(&points, true);

        assert_eq!(prepared.len(), 2);
        assert_relative_eq!(prepared[0][1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(prepared[1][1], -3.0, epsilon = 1e-12);
        assert_eq!(prepare(&points, false), points);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = PlotObserver::<2>::new(["x", "|f(x)|"]);
        let f = |x: f64| x - 0.3;

        let solution = bisection::solve(&f, [0.0, 1.0], &bisection::Config::default(), &mut obs)
            .expect("should solve");

        assert!(solution.is_converged());
    }
}
