//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver whose types opt in.
//!
//! # Event traits
//!
//! - [`HasAbscissa`] — events located at a value of the independent variable
//! - [`HasValue`] — events that carry the current approximate solution value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use ivp_core::Observer;
//! use ivp_observers::traits::{CanStopEarly, HasValue};
//!
//! /// Stops once the solution drops below a threshold.
//! struct BelowThreshold(f64);
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for BelowThreshold {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value() < self.0).then(A::stop_early)
//!     }
//! }
//! ```

use ivp_solvers::{scalar::GridPoint, transient::euler};

/// An event located at a point of the independent variable.
pub trait HasAbscissa {
    /// Returns the independent variable (usually `t`) for this event.
    fn abscissa(&self) -> f64;
}

/// An event that carries the current approximate solution value.
pub trait HasValue {
    /// Returns the solution value for this event.
    fn value(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- Scalar Euler events ---

impl HasAbscissa for euler::Event<GridPoint, f64> {
    fn abscissa(&self) -> f64 {
        self.snapshot.input.t
    }
}

impl HasValue for euler::Event<GridPoint, f64> {
    fn value(&self) -> f64 {
        self.snapshot.input.y
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
