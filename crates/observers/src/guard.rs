//! Opt-in guard against non-finite trajectories.

use ivp_core::Observer;
use tracing::warn;

use crate::traits::{CanStopEarly, HasAbscissa, HasValue};

/// Where a [`NonFiniteGuard`] stopped the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trip {
    /// Independent variable at the first non-finite value.
    pub at: f64,

    /// The offending value (NaN or an infinity).
    pub value: f64,
}

/// An observer that stops the solver at the first NaN or infinite value.
///
/// Solvers carry non-finite values through a trajectory without complaint.
/// Passing this guard opts into stopping instead; the point that went
/// non-finite is still part of the returned trajectory, and
/// [`tripped`](NonFiniteGuard::tripped) reports where it happened.
#[derive(Debug, Default)]
pub struct NonFiniteGuard {
    tripped: Option<Trip>,
}

impl NonFiniteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns where the guard stopped the solver, if it did.
    #[must_use]
    pub fn tripped(&self) -> Option<Trip> {
        self.tripped
    }
}

impl<E, A> Observer<E, A> for NonFiniteGuard
where
    E: HasAbscissa + HasValue,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let value = event.value();
        if value.is_finite() {
            return None;
        }

        let at = event.abscissa();
        warn!(t = at, value, "solution became non-finite; stopping");
        self.tripped = Some(Trip { at, value });
        Some(A::stop_early())
    }
}

/// Allows `&mut NonFiniteGuard` to be passed to solvers that take an observer
/// by value, so [`NonFiniteGuard::tripped`] can be read after the solve.
impl<E, A> Observer<E, A> for &mut NonFiniteGuard
where
    E: HasAbscissa + HasValue,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
