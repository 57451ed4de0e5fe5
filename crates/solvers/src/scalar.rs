//! Explicit Euler integration of scalar initial value problems.
//!
//! Given `y' = f(t, y)`, `y(a) = y0` and a step count `n`, the integrator
//! computes `h = (b - a) / n` once, places `n + 1` points on the grid
//! `t_0 = a, ..., t_n = b`, and applies
//!
//! ```text
//! w_0 = y0
//! w_i = w_{i-1} + h * f(t_{i-1}, w_{i-1})    for i = 1..=n
//! ```
//!
//! Arithmetic is plain `f64`. A right-hand side that returns NaN or an
//! infinity is not detected here; the value is carried through the rest of
//! the trajectory. Callers who want to stop on such values can pass an
//! observer to [`solve`].
//!
//! # Example
//!
//! ```
//! use ivp_core::ivp::LinearDecay;
//! use ivp_solvers::scalar;
//!
//! let trajectory = scalar::integrate(&LinearDecay, 0.0, 1.0, 2.0, 4)?;
//!
//! assert_eq!(trajectory.t(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(trajectory.w()[1], 1.5);
//! # Ok::<(), scalar::Error>(())
//! ```

mod error;
mod model;
mod trajectory;

pub use error::{Error, OffGrid};
pub use model::{GridPoint, GridProblem, RhsModel};
pub use trajectory::Trajectory;

pub use crate::transient::euler::{Action, Status};

use ivp_core::{
    Observer,
    ivp::{IvpParams, Rhs},
};
use tracing::debug;

use crate::transient::euler;

/// Event emitted for each accepted grid point. The snapshot output is the
/// slope `f(t, y)` at that point.
pub type Event = euler::Event<GridPoint, f64>;

/// Integrates `y' = f(t, y)`, `y(a) = y0` over `[a, b]` in `n` steps.
///
/// # Errors
///
/// Returns [`Error::Params`] if `a` or `b` is not finite, if `a >= b`, or if
/// `n == 0`. The trajectory is never computed from such inputs.
pub fn integrate<F>(f: &F, a: f64, b: f64, y0: f64, n: usize) -> Result<Trajectory, Error>
where
    F: Rhs + ?Sized,
{
    let params = IvpParams::new(a, b, y0, n)?;
    solve_unobserved(f, &params)
}

/// Integrates a validated IVP, reporting every grid point to `observer`.
///
/// The observer sees the initial point as step 0 and may return
/// [`Action::StopEarly`] at any point; the returned trajectory then ends at
/// that point and has [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns [`Error::Solver`] if the underlying Euler solver fails, which does
/// not happen for a well-formed grid.
pub fn solve<F, Obs>(f: &F, params: &IvpParams, observer: Obs) -> Result<Trajectory, Error>
where
    F: Rhs + ?Sized,
    Obs: Observer<Event, Action>,
{
    let grid = *params.grid();
    debug!(
        a = params.a(),
        b = params.b(),
        y0 = params.y0(),
        n = params.n(),
        h = grid.step_size(),
        "integrating with explicit Euler"
    );

    let solution = euler::solve(
        &RhsModel::new(f),
        &GridProblem::new(grid),
        GridPoint::initial(params),
        grid.step_size(),
        grid.intervals(),
        observer,
    )?;

    let trajectory = Trajectory::from_solution(grid.step_size(), solution);
    debug!(
        points = trajectory.len(),
        status = ?trajectory.status(),
        "integration finished"
    );

    Ok(trajectory)
}

/// Integrates a validated IVP without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: &F, params: &IvpParams) -> Result<Trajectory, Error>
where
    F: Rhs + ?Sized,
{
    solve(f, params, ())
}
