/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current update.
    StopEarly,
}
