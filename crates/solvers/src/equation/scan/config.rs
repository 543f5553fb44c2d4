use thiserror::Error;

/// Relative slack applied when counting grid steps, so an `end` that lies on
/// the grid is not lost to representation error in `(end - start) / step`.
const GRID_SLACK: f64 = 1e-9;

/// Configuration for a sign-change scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    start: f64,
    end: f64,
    step: f64,
    grid_steps: usize,
    samples_end: bool,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start and end must be finite")]
    NonFiniteDomain,

    #[error("start must be less than end")]
    EmptyDomain,

    #[error("step must be finite, positive, and give a countable grid")]
    Step,
}

impl Config {
    /// Creates a scan over `[start, end]` sampled every `step`.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is non-finite or empty, or if `step`
    /// is not a finite positive number.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFiniteDomain);
        }
        if start >= end {
            return Err(ConfigError::EmptyDomain);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        let steps = ((end - start) / step * (1.0 + GRID_SLACK)).floor();
        #[allow(clippy::cast_precision_loss)]
        let max_steps = usize::MAX as f64;
        if !steps.is_finite() || steps >= max_steps {
            return Err(ConfigError::Step);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let grid_steps = steps as usize;
        #[allow(clippy::cast_precision_loss)]
        let last = start + grid_steps as f64 * step;
        let samples_end = end - last > GRID_SLACK * step;

        Ok(Self {
            start,
            end,
            step,
            grid_steps,
            samples_end,
        })
    }

    /// Returns the start of the domain.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the end of the domain.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the sampling step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of points a full sweep evaluates.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.grid_steps
            .saturating_add(1)
            .saturating_add(usize::from(self.samples_end))
    }

    /// Returns the `k`-th sample point.
    ///
    /// Grid points are computed as `start + k·step` rather than by repeated
    /// addition, and never exceed `end`.
    pub(super) fn sample_at(&self, k: usize) -> f64 {
        if k > self.grid_steps {
            return self.end;
        }
        #[allow(clippy::cast_precision_loss)]
        let x = self.start + k as f64 * self.step;
        x.min(self.end)
    }
}
