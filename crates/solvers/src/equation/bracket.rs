use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints have the same strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// An ordered interval `[left, right]` with finite, distinct endpoints.
///
/// Brackets produced by [`scan`](super::scan) also satisfy
/// `f(left) · f(right) ≤ 0` at the time they are produced. Brackets built by
/// hand are checked for that condition when handed to
/// [`bisection::solve`](super::bisection::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bounds;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Builds a bracket from endpoints already known to be finite and ordered.
    pub(super) fn from_ordered(left: f64, right: f64) -> Self {
        debug_assert!(left < right, "bracket endpoints must be ordered");
        Self { left, right }
    }

    /// Returns the left (smaller) endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right (larger) endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

impl TryFrom<[f64; 2]> for Bracket {
    type Error = BracketError;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}
