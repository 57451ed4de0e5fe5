use thiserror::Error;

use super::Grid;

/// Errors raised when IVP parameters violate their domain constraints.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    #[error("a and b must be finite (got a = {a}, b = {b})")]
    NonFiniteBound { a: f64, b: f64 },

    #[error("a must be less than b (got a = {a}, b = {b})")]
    EmptyInterval { a: f64, b: f64 },

    #[error("n must be a positive integer")]
    ZeroSteps,

    #[error("step size {step} is not representable for this interval and step count")]
    DegenerateStep { step: f64 },
}

/// The validated parameters of a scalar initial value problem.
///
/// Holds the interval `[a, b]`, the initial value `y0 = y(a)`, and the step
/// count `n`. The only way to build one is [`IvpParams::new`], so a value of
/// this type always satisfies `a < b` and `n >= 1`.
///
/// `y0` is deliberately unchecked: a non-finite initial value is carried into
/// the trajectory like any other non-finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IvpParams {
    grid: Grid,
    y0: f64,
}

impl IvpParams {
    /// Validates and bundles the parameters of an IVP.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] if `a` or `b` is not finite, if `a >= b`, if
    /// `n == 0`, or if the step `(b - a) / n` overflows or underflows to zero.
    pub fn new(a: f64, b: f64, y0: f64, n: usize) -> Result<Self, ParamsError> {
        let grid = Grid::new(a, b, n)?;
        Ok(Self { grid, y0 })
    }

    /// Lower bound of the interval, where the initial value applies.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.grid.start()
    }

    /// Upper bound of the interval.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.grid.end()
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Number of integration steps.
    #[must_use]
    pub fn n(&self) -> usize {
        self.grid.intervals()
    }

    /// The step size `h = (b - a) / n`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.grid.step_size()
    }

    /// The discretization grid derived from these parameters.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let params = IvpParams::new(1.0, 3.0, 2.0, 100).expect("should be valid");

        assert_eq!(params.a(), 1.0);
        assert_eq!(params.b(), 3.0);
        assert_eq!(params.y0(), 2.0);
        assert_eq!(params.n(), 100);
        assert_eq!(params.step_size(), 0.02);
    }

    #[test]
    fn rejects_reversed_interval() {
        let err = IvpParams::new(5.0, 2.0, 0.0, 10).unwrap_err();
        assert_eq!(err, ParamsError::EmptyInterval { a: 5.0, b: 2.0 });
    }

    #[test]
    fn rejects_empty_interval() {
        let err = IvpParams::new(1.0, 1.0, 0.0, 10).unwrap_err();
        assert_eq!(err, ParamsError::EmptyInterval { a: 1.0, b: 1.0 });
    }

    #[test]
    fn rejects_zero_steps() {
        let err = IvpParams::new(0.0, 1.0, 2.0, 0).unwrap_err();
        assert_eq!(err, ParamsError::ZeroSteps);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            IvpParams::new(f64::NAN, 1.0, 0.0, 1),
            Err(ParamsError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            IvpParams::new(0.0, f64::INFINITY, 0.0, 1),
            Err(ParamsError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn rejects_overflowing_step() {
        let err = IvpParams::new(-f64::MAX, f64::MAX, 0.0, 1).unwrap_err();
        assert_eq!(err, ParamsError::DegenerateStep { step: f64::INFINITY });
    }

    #[test]
    fn keeps_non_finite_initial_value() {
        let params = IvpParams::new(0.0, 1.0, f64::NAN, 1).expect("y0 is unchecked");
        assert!(params.y0().is_nan());
    }

    #[test]
    fn error_messages_name_the_constraint() {
        let err = IvpParams::new(5.0, 2.0, 0.0, 10).unwrap_err();
        assert!(err.to_string().starts_with("a must be less than b"));
        assert_eq!(
            ParamsError::ZeroSteps.to_string(),
            "n must be a positive integer"
        );
    }
}
