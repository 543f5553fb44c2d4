//! Fixed-step scan of a domain for sign changes.
//!
//! # Algorithm
//!
//! The function is sampled at `start, start + step, start + 2·step, …` up to
//! `end` (and at `end` itself when the grid does not land on it). Whenever the
//! product of two consecutive samples is `≤ 0`, the pair is yielded as a
//! [`Bracket`].
//!
//! # Limitations
//!
//! Sampling at a fixed step is an approximation:
//!
//! - Roots of even multiplicity (the function touches zero without crossing)
//!   produce no sign change and are missed.
//! - Two roots closer together than `step` can cancel each other's sign
//!   change and are both missed.
//! - A sample that lands exactly on a root closes one bracket and opens the
//!   next, so the same root appears at the shared endpoint of two brackets.
//!   [`roots::find_roots`](super::roots::find_roots) deduplicates these.
//!
//! Finding no brackets is a valid result, not an error.

mod config;

pub use config::{Config, ConfigError};

use nroot_core::ScalarFunction;

use super::{Bracket, EvalError, evaluate::evaluate};

/// Scans the configured domain of `f` for sign-change brackets.
///
/// The scan is lazy: nothing is evaluated until it is iterated. It is also
/// restartable: every call to [`Scan::iter`] starts a fresh sweep.
///
/// # Example
///
/// ```
/// use nroot_solvers::equation::scan;
///
/// let f = |x: f64| x * x - 2.0;
/// let config = scan::Config::new(-3.0, 3.0, 0.5).unwrap();
///
/// let brackets: Vec<_> = scan::scan(&f, &config)
///     .iter()
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(brackets.len(), 2);
/// ```
pub fn scan<'a, F: ScalarFunction>(f: &'a F, config: &Config) -> Scan<'a, F> {
    Scan { f, config: *config }
}

/// A lazy, restartable sequence of sign-change brackets.
#[derive(Debug)]
pub struct Scan<'a, F> {
    f: &'a F,
    config: Config,
}

impl<'a, F: ScalarFunction> Scan<'a, F> {
    /// Starts a new sweep over the domain.
    #[must_use]
    pub fn iter(&self) -> Brackets<'a, F> {
        Brackets {
            f: self.f,
            config: self.config,
            next_sample: 0,
            prev: None,
            done: false,
        }
    }

    /// Returns the scan configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<'a, F: ScalarFunction> IntoIterator for &Scan<'a, F> {
    type Item = Result<Bracket, EvalError>;
    type IntoIter = Brackets<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the brackets of a single sweep.
///
/// Yields brackets in increasing order of left endpoint. If an evaluation
/// fails, the error is yielded once and the sweep ends.
#[derive(Debug)]
pub struct Brackets<'a, F> {
    f: &'a F,
    config: Config,
    next_sample: usize,
    prev: Option<Sample>,
    done: bool,
}

impl<F> Clone for Brackets<'_, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f,
            config: self.config,
            next_sample: self.next_sample,
            prev: self.prev,
            done: self.done,
        }
    }
}

/// A sampled point and its function value.
#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    value: f64,
}

impl<F: ScalarFunction> Brackets<'_, F> {
    /// Evaluates the next sample point, or returns `None` past the end.
    fn sample(&mut self) -> Option<Result<Sample, EvalError>> {
        if self.next_sample >= self.config.sample_count() {
            return None;
        }
        let x = self.config.sample_at(self.next_sample);
        self.next_sample += 1;
        Some(evaluate(self.f, x).map(|value| Sample { x, value }))
    }
}

impl<F: ScalarFunction> Iterator for Brackets<'_, F> {
    type Item = Result<Bracket, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let current = match self.sample() {
                Some(Ok(sample)) => sample,
                Some(Err(error)) => {
                    self.done = true;
                    return Some(Err(error));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            // Grid points closer than the float spacing collapse onto one x.
            if let Some(prev) = self.prev
                && current.x <= prev.x
            {
                continue;
            }

            let prev = self.prev.replace(current);
            if let Some(prev) = prev
                && prev.value * current.value <= 0.0
            {
                return Some(Ok(Bracket::from_ordered(prev.x, current.x)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn collect<F: ScalarFunction>(f: &F, config: &Config) -> Vec<Bracket> {
        scan(f, config)
            .iter()
            .collect::<Result<_, _>>()
            .expect("scan should not fail")
    }

    #[test]
    fn finds_both_roots_of_parabola() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(-3.0, 3.0, 0.5).expect("valid config");

        let brackets = collect(&f, &config);

        assert_eq!(brackets.len(), 2);
        assert_relative_eq!(brackets[0].left(), -1.5);
        assert_relative_eq!(brackets[0].right(), -1.0);
        assert_relative_eq!(brackets[1].left(), 1.0);
        assert_relative_eq!(brackets[1].right(), 1.5);
    }

    #[test]
    fn brackets_are_ordered_by_left_endpoint() {
        let f = |x: f64| x.sin();
        let config = Config::new(0.5, 20.0, 0.1).expect("valid config");

        let brackets = collect(&f, &config);

        assert_eq!(brackets.len(), 6);
        assert!(brackets.windows(2).all(|w| w[0].left() < w[1].left()));
    }

    #[test]
    fn no_sign_change_yields_nothing() {
        let f = |x: f64| x * x + 1.0;
        let config = Config::new(-5.0, 5.0, 0.1).expect("valid config");

        assert!(collect(&f, &config).is_empty());
    }

    #[test]
    fn coarse_step_misses_close_roots() {
        // Roots at 1.1 and 1.3 fall between the samples at 1 and 2.
        let f = |x: f64| (x - 1.1) * (x - 1.3);
        let config = Config::new(0.0, 3.0, 1.0).expect("valid config");

        assert!(collect(&f, &config).is_empty());
    }

    #[test]
    fn exact_zero_sample_opens_two_brackets() {
        let f = |x: f64| x - 1.0;
        let config = Config::new(0.0, 2.0, 0.5).expect("valid config");

        let brackets = collect(&f, &config);

        assert_eq!(brackets.len(), 2);
        assert_relative_eq!(brackets[0].right(), 1.0);
        assert_relative_eq!(brackets[1].left(), 1.0);
    }

    #[test]
    fn samples_end_when_grid_falls_short() {
        // Grid stops at 2.0; the root at 2.2 is only caught by sampling `end`.
        let f = |x: f64| x - 2.2;
        let config = Config::new(0.0, 2.5, 1.0).expect("valid config");

        let brackets = collect(&f, &config);

        assert_eq!(brackets.len(), 1);
        assert_relative_eq!(brackets[0].left(), 2.0);
        assert_relative_eq!(brackets[0].right(), 2.5);
    }

    #[test]
    fn skips_grid_points_that_round_together() {
        // Near 1e16 the float spacing is 2, so unit steps repeat x values.
        let f = |x: f64| x - 1e16;
        let config = Config::new(1e16, 1e16 + 8.0, 1.0).expect("valid config");

        let brackets = collect(&f, &config);

        assert_eq!(brackets.len(), 1);
        assert_relative_eq!(brackets[0].left(), 1e16);
        assert!(brackets[0].width() > 0.0);
    }

    #[test]
    fn scan_is_restartable() {
        let f = |x: f64| x.cos();
        let config = Config::new(0.0, 10.0, 0.25).expect("valid config");
        let scan = scan(&f, &config);

        let first: Vec<_> = scan.iter().map(Result::unwrap).collect();
        let second: Vec<_> = (&scan).into_iter().map(Result::unwrap).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn scan_is_lazy() {
        let calls = std::cell::Cell::new(0_usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x - 0.25
        };
        let config = Config::new(0.0, 100.0, 0.1).expect("valid config");

        let first = scan(&f, &config).iter().next();

        assert!(matches!(first, Some(Ok(_))));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn non_finite_sample_ends_scan_with_error() {
        let f = |x: f64| 1.0 / (x - 1.0);
        let config = Config::new(0.0, 2.0, 0.5).expect("valid config");

        let items: Vec<_> = scan(&f, &config).iter().collect();

        assert_eq!(items.len(), 1);
        assert!(matches!(
            items[0],
            Err(EvalError::NonFinite { x, .. }) if (x - 1.0).abs() < 1e-12
        ));
    }
}
