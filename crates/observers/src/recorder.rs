use nroot_core::Observer;

/// An observer that keeps a copy of every event it sees.
///
/// Pass `&mut Recorder` as the solver observer and inspect
/// [`events`](Recorder::events) once the solve returns.
///
/// ```
/// use nroot_observers::Recorder;
/// use nroot_solvers::equation::bisection;
///
/// let f = |x: f64| x.cos() - x;
/// let mut recorder = Recorder::new();
///
/// let solution =
///     bisection::solve(&f, [0.0, 1.0], &bisection::Config::default(), &mut recorder).unwrap();
///
/// assert_eq!(recorder.len(), solution.iters);
/// ```
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E: Clone, A> Observer<E, A> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
