use crate::equation::Bracket;

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    /// Value is positive (or zero).
    Positive,
    /// Value is negative.
    Negative,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Current bracket bounds plus the sign of `f` at the left endpoint.
///
/// The right endpoint always carries the opposite sign, so only the left
/// sign needs tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SignedBracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl SignedBracket {
    pub(super) fn new(bounds: Bracket, left_value: f64) -> Self {
        Self {
            left: bounds.left(),
            right: bounds.right(),
            left_sign: Sign::of(left_value),
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Moves the endpoint whose value shares the sign of `value` to `x`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if Sign::of(value) == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shrink_moves_matching_endpoint() {
        let bounds = Bracket::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = SignedBracket::new(bounds, -1.0);

        bracket.shrink(1.0, -0.5);
        assert_relative_eq!(bracket.left(), 1.0);
        assert_relative_eq!(bracket.right(), 2.0);

        bracket.shrink(1.5, 0.25);
        assert_relative_eq!(bracket.left(), 1.0);
        assert_relative_eq!(bracket.right(), 1.5);
        assert_relative_eq!(bracket.width(), 0.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn positive_left_sign_moves_left_on_positive_value() {
        let bounds = Bracket::new([0.0, 4.0]).expect("valid bounds");
        let mut bracket = SignedBracket::new(bounds, 3.0);

        bracket.shrink(2.0, 1.0);
        assert_relative_eq!(bracket.left(), 2.0);
        assert_relative_eq!(bracket.right(), 4.0);
    }
}
