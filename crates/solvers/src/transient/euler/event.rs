use ivp_core::Snapshot;

/// Event emitted by the Euler solver for each accepted point.
///
/// Step 0 is the initial point before any integration; steps 1..=N follow
/// each update.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number (0 for the initial point).
    pub step: usize,

    /// Snapshot of the model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
