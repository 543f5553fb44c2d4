use crate::equation::Bracket;

use super::TraceRecord;

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    record: TraceRecord,
}

impl Event {
    pub(super) fn new(record: TraceRecord) -> Self {
        Self { record }
    }

    /// Returns the iteration counter (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.iter
    }

    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.mid
    }

    /// Returns the function value at the midpoint.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.record.value
    }

    /// Returns the bracket that was bisected in this iteration.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        Bracket::from_ordered(self.record.left, self.record.right)
    }

    /// Returns the full trace record for this iteration.
    #[must_use]
    pub fn record(&self) -> &TraceRecord {
        &self.record
    }
}
