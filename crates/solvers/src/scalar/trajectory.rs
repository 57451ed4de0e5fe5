use crate::transient::euler::{Solution, Status};

use super::GridPoint;

/// The approximate solution of a scalar IVP on its grid.
///
/// `t()[i]` pairs with `w()[i]`. A completed run holds `n + 1` points with
/// `w()[0] == y0`; a run stopped by an observer holds the points accepted up
/// to and including the one where it stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t: Vec<f64>,
    w: Vec<f64>,
    step_size: f64,
    status: Status,
}

impl Trajectory {
    pub(crate) fn from_solution(step_size: f64, solution: Solution<GridPoint, f64>) -> Self {
        let (t, w) = solution
            .history
            .into_iter()
            .map(|snapshot| (snapshot.input.t, snapshot.input.y))
            .unzip();

        Self {
            t,
            w,
            step_size,
            status: solution.status,
        }
    }

    /// Grid abscissae `t_0..t_k`.
    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Approximate values `w_0..w_k`.
    #[must_use]
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of points in the trajectory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Iterates over `(t_i, w_i)` pairs.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.w.iter().copied())
    }

    /// Collects the trajectory as `[t, w]` pairs, the shape plotting expects.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points().map(|(t, w)| [t, w]).collect()
    }

    /// Splits the trajectory into its `t` and `w` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.t, self.w)
    }

    /// Largest absolute difference between `w` and a reference solution
    /// evaluated at the same `t` values.
    ///
    /// Any NaN difference makes the result NaN, so a trajectory that went
    /// non-finite never looks accurate.
    pub fn max_abs_error(&self, exact: impl Fn(f64) -> f64) -> f64 {
        self.points()
            .map(|(t, w)| (w - exact(t)).abs())
            .fold(0.0, |max, err| if err.is_nan() || err > max { err } else { max })
    }
}
