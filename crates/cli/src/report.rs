//! Plain-text comparison of a trajectory against the exact solution.

use std::io::{self, Write};

use ivp_core::ivp::ExactSolution;
use ivp_solvers::scalar::{Status, Trajectory};

/// Writes one row per grid point with `t`, the Euler value `w`, the exact
/// value, and their absolute difference, followed by a summary line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table<W: Write>(
    mut out: W,
    trajectory: &Trajectory,
    exact: &ExactSolution,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>12} {:>16} {:>16} {:>12}",
        "t", "w (Euler)", "y (exact)", "|error|"
    )?;
    for (t, w) in trajectory.points() {
        let y = exact.at(t);
        writeln!(out, "{t:>12.6} {w:>16.10} {y:>16.10} {:>12.4e}", (w - y).abs())?;
    }

    writeln!(
        out,
        "h = {}, max |error| = {:.6e}",
        trajectory.step_size(),
        trajectory.max_abs_error(|t| exact.at(t))
    )?;
    if trajectory.status() == Status::StoppedByObserver {
        if let Some(t) = trajectory.t().last() {
            writeln!(out, "integration stopped early at t = {t}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ivp_core::ivp::LinearDecay;
    use ivp_solvers::scalar;

    fn render(trajectory: &Trajectory) -> String {
        let exact = LinearDecay.exact(0.0, 2.0);
        let mut out = Vec::new();
        write_table(&mut out, trajectory, &exact).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_row_per_grid_point_plus_header_and_summary() {
        let trajectory = scalar::integrate(&LinearDecay, 0.0, 1.0, 2.0, 4).unwrap();

        let table = render(&trajectory);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 1 + 5 + 1);
        assert!(lines[0].contains("w (Euler)"));
        assert!(lines[2].contains("0.250000"));
        assert!(lines[2].contains("1.5000000000"));
        assert!(lines[6].starts_with("h = 0.25, max |error| = "));
    }

    #[test]
    fn first_row_has_no_error() {
        let trajectory = scalar::integrate(&LinearDecay, 0.0, 1.0, 2.0, 4).unwrap();

        let table = render(&trajectory);
        let first_row = table.lines().nth(1).unwrap();

        assert!(first_row.trim_end().ends_with("0.0000e0"));
    }

    #[test]
    fn mentions_an_early_stop() {
        let params = ivp_core::ivp::IvpParams::new(0.0, 1.0, 2.0, 4).unwrap();
        let trajectory = scalar::solve(&LinearDecay, &params, |event: &scalar::Event| {
            (event.step == 2).then_some(scalar::Action::StopEarly)
        })
        .unwrap();

        let table = render(&trajectory);

        assert!(table.ends_with("integration stopped early at t = 0.5\n"));
    }
}
