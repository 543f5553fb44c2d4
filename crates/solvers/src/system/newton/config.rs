use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    perturbation: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("perturbation must be finite and positive")]
    Perturbation,
}

/// Tolerance `1e-10`, at most 1000 updates, and perturbation `h = 1e-8`.
///
/// With `h = 1e-8` the Jacobian of a linear system is only accurate to about
/// eight digits, so such systems usually take two updates. Pass a power of
/// two such as `2⁻²⁷` through [`Config::new`] for an exact affine Jacobian.
impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iters: 1000,
            perturbation: 1e-8,
        }
    }
}

impl Config {
    /// Creates a new config with validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` or `perturbation` is not finite and
    /// positive, or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize, perturbation: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !perturbation.is_finite() || perturbation <= 0.0 {
            return Err(ConfigError::Perturbation);
        }

        Ok(Self {
            tolerance,
            max_iters,
            perturbation,
        })
    }

    /// Returns the tolerance applied to both `‖F(x)‖` and `‖Δx‖`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the finite-difference step `h` used for the Jacobian.
    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }
}
