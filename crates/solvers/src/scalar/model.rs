use std::convert::Infallible;

use ivp_core::{
    DerivativeOf, Model, OdeProblem,
    ivp::{Grid, IvpParams, Rhs},
};

use super::error::OffGrid;

/// A point of a scalar trajectory: grid index, abscissa, and approximate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub index: usize,
    pub t: f64,
    pub y: f64,
}

impl GridPoint {
    /// The initial point `(a, y0)` of an IVP.
    #[must_use]
    pub fn initial(params: &IvpParams) -> Self {
        Self {
            index: 0,
            t: params.a(),
            y: params.y0(),
        }
    }
}

/// Adapts a right-hand side into a [`Model`] whose output is the slope
/// `f(t, y)` at a grid point.
#[derive(Debug)]
pub struct RhsModel<'a, F: ?Sized> {
    rhs: &'a F,
}

impl<'a, F: Rhs + ?Sized> RhsModel<'a, F> {
    pub fn new(rhs: &'a F) -> Self {
        Self { rhs }
    }
}

impl<F: Rhs + ?Sized> Model for RhsModel<'_, F> {
    type Input = GridPoint;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &GridPoint) -> Result<f64, Infallible> {
        Ok(self.rhs.eval(input.t, input.y))
    }
}

/// Scalar ODE problem on a fixed grid.
///
/// The state is the approximate value `y` and the derivative is the slope
/// returned by [`RhsModel`]. Each new point is placed at the next grid
/// abscissa instead of accumulating `t + h`, so the trajectory's `t` values
/// are exactly the grid's.
#[derive(Debug, Clone, Copy)]
pub struct GridProblem {
    grid: Grid,
}

impl GridProblem {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl OdeProblem for GridProblem {
    type Input = GridPoint;
    type Output = f64;
    type Delta = f64;
    type State = f64;
    type Error = OffGrid;

    fn state(&self, input: &GridPoint) -> Result<f64, OffGrid> {
        Ok(input.y)
    }

    fn derivative(
        &self,
        _input: &GridPoint,
        slope: &f64,
    ) -> Result<DerivativeOf<f64, f64>, OffGrid> {
        Ok(*slope)
    }

    fn build_input(&self, base: &GridPoint, y: &f64, _h: &f64) -> Result<GridPoint, OffGrid> {
        let index = base.index + 1;
        let t = self.grid.get(index).ok_or(OffGrid {
            index,
            intervals: self.grid.intervals(),
        })?;
        Ok(GridPoint { index, t, y: *y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ivp_core::ivp::LinearDecay;

    #[test]
    fn model_output_is_the_slope() {
        let model = RhsModel::new(&LinearDecay);
        let point = GridPoint {
            index: 1,
            t: 0.25,
            y: 1.5,
        };

        assert_eq!(model.call(&point), Ok(-1.25));
    }

    #[test]
    fn build_input_moves_to_the_next_grid_point() {
        let problem = GridProblem::new(Grid::new(0.0, 1.0, 4).unwrap());
        let base = GridPoint {
            index: 2,
            t: 0.5,
            y: 1.1875,
        };

        let next = problem.build_input(&base, &1.015625, &0.25).unwrap();

        assert_eq!(
            next,
            GridPoint {
                index: 3,
                t: 0.75,
                y: 1.015625
            }
        );
    }

    #[test]
    fn build_input_refuses_to_leave_the_grid() {
        let problem = GridProblem::new(Grid::new(0.0, 1.0, 2).unwrap());
        let last = GridPoint {
            index: 2,
            t: 1.0,
            y: 0.0,
        };

        let err = problem.build_input(&last, &0.0, &0.5).unwrap_err();

        assert_eq!(
            err,
            OffGrid {
                index: 3,
                intervals: 2
            }
        );
    }
}
