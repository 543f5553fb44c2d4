//! All roots of a scalar function on a domain.
//!
//! [`find_roots`] scans the domain for sign changes, refines every bracket
//! with [`bisection`](super::bisection), and drops roots that sit closer than
//! [`Config::min_separation`] to the previously kept root. The separation
//! check removes the duplicate produced when a scan sample lands exactly on a
//! root and it shows up at the shared endpoint of two brackets.

use thiserror::Error;

use nroot_core::ScalarFunction;

use super::{Bracket, EvalError, bisection, scan};

/// Configuration for root aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    bisection: bisection::Config,
    min_separation: f64,
}

/// Errors that can occur when validating a root aggregation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_separation must be finite and non-negative")]
    MinSeparation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bisection: bisection::Config::default(),
            min_separation: 1e-4,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A `min_separation` of zero keeps every root, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_separation` is negative or non-finite.
    pub fn new(bisection: bisection::Config, min_separation: f64) -> Result<Self, ConfigError> {
        if !min_separation.is_finite() || min_separation < 0.0 {
            return Err(ConfigError::MinSeparation);
        }

        Ok(Self {
            bisection,
            min_separation,
        })
    }

    /// Returns the config used to refine each bracket.
    #[must_use]
    pub fn bisection(&self) -> &bisection::Config {
        &self.bisection
    }

    /// Returns the distance below which two roots count as the same root.
    #[must_use]
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }
}

/// Errors that can occur while finding roots.
#[derive(Debug, Error)]
pub enum Error {
    #[error("scan failed")]
    Scan(#[from] EvalError),

    #[error("bisection failed on {bracket:?}")]
    Bisection {
        bracket: Bracket,
        #[source]
        source: bisection::Error,
    },
}

/// The roots found on a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Roots {
    /// Every sign-change bracket the scan produced, in order.
    pub brackets: Vec<Bracket>,

    /// Deduplicated bisection results, in increasing order of `x`.
    ///
    /// Results that did not converge are kept; filter with
    /// [`bisection::Solution::is_converged`] if needed.
    pub roots: Vec<bisection::Solution>,
}

impl Roots {
    /// Returns the root estimates.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.roots.iter().map(|root| root.x)
    }

    /// Returns true if no root was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Finds every root of `f` the scan can detect on the configured domain.
///
/// # Errors
///
/// Returns an error if the function fails or produces a non-finite value
/// during the scan or while bisecting a bracket.
pub fn find_roots<F: ScalarFunction>(
    f: &F,
    domain: &scan::Config,
    config: &Config,
) -> Result<Roots, Error> {
    let mut brackets = Vec::new();
    let mut roots: Vec<bisection::Solution> = Vec::new();

    for bracket in &scan::scan(f, domain) {
        let bracket = bracket?;
        brackets.push(bracket);

        let solution = bisection::solve_unobserved(f, bracket.as_array(), &config.bisection)
            .map_err(|source| Error::Bisection { bracket, source })?;

        let is_duplicate = roots
            .last()
            .is_some_and(|kept| (solution.x - kept.x).abs() < config.min_separation);
        if !is_duplicate {
            roots.push(solution);
        }
    }

    Ok(Roots { brackets, roots })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_every_root_of_sine() {
        let f = |x: f64| x.sin();
        let domain = scan::Config::new(1.0, 10.0, 0.1).expect("valid scan");

        let roots = find_roots(&f, &domain, &Config::default()).expect("should find roots");

        let xs: Vec<f64> = roots.xs().collect();
        assert_eq!(xs.len(), 3);
        for (x, k) in xs.iter().zip(1_u32..) {
            assert_relative_eq!(*x, f64::from(k) * std::f64::consts::PI, epsilon = 1e-7);
        }
    }

    #[test]
    fn root_on_scan_sample_is_reported_once() {
        let f = |x: f64| x - 1.0;
        let domain = scan::Config::new(0.0, 2.0, 0.5).expect("valid scan");

        let roots = find_roots(&f, &domain, &Config::default()).expect("should find roots");

        assert_eq!(roots.brackets.len(), 2);
        assert_eq!(roots.roots.len(), 1);
        assert_relative_eq!(roots.roots[0].x, 1.0);
    }

    #[test]
    fn zero_separation_keeps_duplicates() {
        let f = |x: f64| x - 1.0;
        let domain = scan::Config::new(0.0, 2.0, 0.5).expect("valid scan");
        let config = Config::new(bisection::Config::default(), 0.0).expect("valid config");

        let roots = find_roots(&f, &domain, &config).expect("should find roots");

        assert_eq!(roots.roots.len(), 2);
    }

    #[test]
    fn separation_keeps_first_of_close_roots() {
        // Roots at 1.0 and 1.05 land in different brackets.
        let f = |x: f64| (x - 1.0) * (x - 1.05);
        let domain = scan::Config::new(0.013, 2.0, 0.03).expect("valid scan");
        let config = Config::new(bisection::Config::default(), 0.1).expect("valid config");

        let roots = find_roots(&f, &domain, &config).expect("should find roots");

        assert_eq!(roots.brackets.len(), 2);
        assert_eq!(roots.roots.len(), 1);
        assert_relative_eq!(roots.roots[0].x, 1.0, epsilon = 1e-7);
    }

    #[test]
    fn finds_root_where_grid_points_round_together() {
        let f = |x: f64| x - 1e16;
        let domain = scan::Config::new(1e16, 1e16 + 8.0, 1.0).expect("valid scan");

        let roots = find_roots(&f, &domain, &Config::default()).expect("should find roots");

        assert_eq!(roots.xs().collect::<Vec<_>>(), [1e16]);
    }

    #[test]
    fn no_brackets_is_an_empty_result() {
        let f = |x: f64| x.exp();
        let domain = scan::Config::new(-1.0, 1.0, 0.1).expect("valid scan");

        let roots = find_roots(&f, &domain, &Config::default()).expect("should succeed");

        assert!(roots.is_empty());
        assert!(roots.brackets.is_empty());
    }

    #[test]
    fn scan_errors_propagate() {
        let f = |x: f64| x.ln();
        let domain = scan::Config::new(-1.0, 1.0, 0.5).expect("valid scan");

        let result = find_roots(&f, &domain, &Config::default());

        assert!(matches!(result, Err(Error::Scan(EvalError::NonFinite { .. }))));
    }

    #[test]
    fn rejects_negative_separation() {
        assert_eq!(
            Config::new(bisection::Config::default(), -1.0),
            Err(ConfigError::MinSeparation)
        );
    }
}
