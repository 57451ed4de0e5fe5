use ivp_core::ivp::ParamsError;
use thiserror::Error;

use crate::transient::euler;

/// Errors returned by the scalar integrator.
#[derive(Debug, Error)]
pub enum Error {
    /// The interval or step count violates the integrator's preconditions.
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("integration failed: {0}")]
    Solver(#[from] euler::Error),
}

/// The solver tried to step past the last grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step {index} lies past the end of a grid with {intervals} intervals")]
pub struct OffGrid {
    pub index: usize,
    pub intervals: usize,
}
