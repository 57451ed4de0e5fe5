//! Chart window comparing the Euler trajectory with the exact solution.

use anyhow::anyhow;
use ivp_core::ivp::{ExactSolution, Grid, IvpParams, ParamsError};
use ivp_observers::{PlotObserver, ShowConfig};
use ivp_solvers::scalar::Trajectory;

const EULER: &str = "Euler method";
const EXACT: &str = "exact solution";

/// Collects both series: the trajectory as-is, and the exact solution sampled
/// at `samples` equally spaced points over `[a, b]`, independently of `n`.
///
/// # Errors
///
/// Returns an error if `samples < 2`.
pub fn build(
    params: &IvpParams,
    trajectory: &Trajectory,
    exact: &ExactSolution,
    samples: usize,
) -> Result<PlotObserver<2>, ParamsError> {
    let dense = Grid::with_points(params.a(), params.b(), samples)?;

    let mut obs = PlotObserver::new([EULER, EXACT]);
    for (t, w) in trajectory.points() {
        obs.record(t, [Some(w), None]);
    }
    for [t, y] in exact.sample(&dense) {
        obs.record(t, [None, Some(y)]);
    }
    Ok(obs)
}

/// Opens the chart and blocks until the window is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(obs: PlotObserver<2>) -> anyhow::Result<()> {
    obs.show(
        ShowConfig::new()
            .title("Comparison of numerical and exact solutions")
            .axes("t", "y")
            .mark_points(EULER)
            .legend(),
    )
    .map_err(|err| anyhow!("failed to open the plot window: {err}"))
}
