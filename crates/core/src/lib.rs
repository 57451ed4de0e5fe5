//! Core traits and types for fixed-step initial value problem solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! front ends build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a model's input and output to a steppable state
//! - [`StepIntegrable`] — a state that advances by `derivative * delta`
//!
//! The [`ivp`] module holds the scalar initial value problem data model:
//! validated parameters, the discretization grid, right-hand sides, and
//! closed-form reference solutions.

pub mod ivp;

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
