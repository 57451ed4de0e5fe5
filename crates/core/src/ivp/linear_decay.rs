use super::{Grid, Rhs};

/// The right-hand side `f(t, y) = -y + t`.
///
/// Its solution through `(t0, y0)` has the closed form
///
/// ```text
/// y(t) = (y0 - t0 + 1) * exp(-(t - t0)) + t - 1
/// ```
///
/// which for `t0 = 0`, `y0 = 2` is `3 exp(-t) + t - 1`. See
/// [`LinearDecay::exact`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearDecay;

impl Rhs for LinearDecay {
    fn eval(&self, t: f64, y: f64) -> f64 {
        -y + t
    }
}

impl LinearDecay {
    /// Returns the exact solution passing through `(t0, y0)`.
    #[must_use]
    pub fn exact(self, t0: f64, y0: f64) -> ExactSolution {
        ExactSolution {
            t0,
            amplitude: y0 - t0 + 1.0,
        }
    }
}

/// Closed-form solution of `y' = -y + t` anchored at an initial point.
///
/// Used only as a reference for measuring and plotting the error of a
/// numerical trajectory. It can be evaluated anywhere, independently of the
/// grid the integrator used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolution {
    t0: f64,
    amplitude: f64,
}

impl ExactSolution {
    /// Evaluates the solution at `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> f64 {
        self.amplitude * (-(t - self.t0)).exp() + t - 1.0
    }

    /// Evaluates the solution element-wise over `ts`.
    #[must_use]
    pub fn eval_all(&self, ts: &[f64]) -> Vec<f64> {
        ts.iter().map(|&t| self.at(t)).collect()
    }

    /// Samples the solution on every point of `grid` as `[t, y]` pairs.
    #[must_use]
    pub fn sample(&self, grid: &Grid) -> Vec<[f64; 2]> {
        grid.points().map(|t| [t, self.at(t)]).collect()
    }
}
