use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the tolerance applied to both `|f(c)|` and the bracket width.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of bisection iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
