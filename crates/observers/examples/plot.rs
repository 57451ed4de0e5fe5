//! Interactive visualizations of the explicit Euler solver.
//!
//! # Usage
//!
//! ```text
//! cargo run -p ivp-observers --example plot --features plot -- decay
//! cargo run -p ivp-observers --example plot --features plot -- decay 4
//! cargo run -p ivp-observers --example plot --features plot -- converge
//! ```
//!
//! # Modes
//!
//! - **decay [n]** — Integrate y' = −y + t, y(0) = 2 on \[0, 2\] with `n` steps
//!   (default 10) and overlay the exact solution 3e^(−t) + t − 1.
//!
//! - **converge** — Plot the Euler trajectories for n = 4, 8, 16 against the
//!   exact solution, showing the first-order shrinking of the error.

use std::error::Error;

use ivp_core::ivp::{Grid, IvpParams, LinearDecay};
use ivp_observers::{PlotObserver, ShowConfig};
use ivp_solvers::scalar;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "decay".into());
    match mode.as_str() {
        "decay" => {
            let n = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<usize>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step count, expected a positive integer such as 10");
                    std::process::exit(1);
                })
                .unwrap_or(10);
            decay(n)
        }
        "converge" => converge(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [decay [n]|converge]");
            std::process::exit(1);
        }
    }
}

/// Integrate the unit problem with `n` steps and compare to the exact solution.
fn decay(n: usize) -> Result<(), Box<dyn Error>> {
    let params = IvpParams::new(0.0, 2.0, 2.0, n)?;
    let exact = LinearDecay.exact(params.a(), params.y0());

    let mut obs = PlotObserver::<2>::new(["Euler method", "exact solution"]);
    let trajectory = scalar::solve(&LinearDecay, &params, &mut obs)?;

    for [t, y] in exact.sample(&Grid::with_points(params.a(), params.b(), 200)?) {
        obs.record(t, [None, Some(y)]);
    }

    let error = trajectory.max_abs_error(|t| exact.at(t));
    obs.show(
        ShowConfig::new()
            .title(format!("y' = -y + t with n = {n}: max |error| = {error:.3e}"))
            .axes("t", "y")
            .mark_points("Euler method")
            .legend(),
    )?;

    Ok(())
}

/// Overlay three step counts to show the error halving with the step size.
fn converge() -> Result<(), Box<dyn Error>> {
    let exact = LinearDecay.exact(0.0, 2.0);
    let mut obs = PlotObserver::<4>::new(["n = 4", "n = 8", "n = 16", "exact solution"]);

    for (slot, n) in [4, 8, 16].into_iter().enumerate() {
        let params = IvpParams::new(0.0, 2.0, 2.0, n)?;
        let trajectory = scalar::solve_unobserved(&LinearDecay, &params)?;
        for (t, w) in trajectory.points() {
            let mut traces = [None; 4];
            traces[slot] = Some(w);
            obs.record(t, traces);
        }
    }

    for [t, y] in exact.sample(&Grid::with_points(0.0, 2.0, 200)?) {
        obs.record(t, [None, None, None, Some(y)]);
    }

    obs.show(
        ShowConfig::new()
            .title("Explicit Euler convergence on y' = -y + t")
            .axes("t", "y")
            .mark_points("n = 4")
            .legend(),
    )?;

    Ok(())
}
