use super::ParamsError;

/// A uniform discretization of the closed interval `[start, end]`.
///
/// The grid has `intervals + 1` points. The step `h = (end - start) / intervals`
/// is computed once at construction, point `i < intervals` is `i * h + start`,
/// and the last point is `end` exactly so rounding never moves the endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    end: f64,
    intervals: usize,
    step: f64,
}

impl Grid {
    /// Creates a grid of `intervals` equal steps from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] if either bound is not finite, if
    /// `start >= end`, if `intervals == 0`, or if the step is not a finite,
    /// non-zero value.
    pub fn new(start: f64, end: f64, intervals: usize) -> Result<Self, ParamsError> {
        Self::check_bounds(start, end)?;
        if intervals == 0 {
            return Err(ParamsError::ZeroSteps);
        }

        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / intervals as f64;
        if !step.is_finite() || step == 0.0 {
            return Err(ParamsError::DegenerateStep { step });
        }

        Ok(Self {
            start,
            end,
            intervals,
            step,
        })
    }

    /// Checks that `[start, end]` is a finite interval with `start < end`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::NonFiniteBound`] or [`ParamsError::EmptyInterval`].
    pub fn check_bounds(start: f64, end: f64) -> Result<(), ParamsError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ParamsError::NonFiniteBound { a: start, b: end });
        }
        if start >= end {
            return Err(ParamsError::EmptyInterval { a: start, b: end });
        }
        Ok(())
    }

    /// Creates a grid with `count` points from `start` to `end`.
    ///
    /// This is the sampling counterpart of [`Grid::new`], convenient for
    /// evaluating reference curves at a fixed resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] under the same conditions as [`Grid::new`],
    /// with fewer than two points reported as [`ParamsError::ZeroSteps`].
    pub fn with_points(start: f64, end: f64, count: usize) -> Result<Self, ParamsError> {
        Self::new(start, end, count.saturating_sub(1))
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of steps between consecutive points.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Number of points, always `intervals + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals + 1
    }

    /// A grid always contains at least its two endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step
    }

    /// Returns the grid point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > intervals`.
    #[must_use]
    pub fn point(&self, index: usize) -> f64 {
        assert!(
            index <= self.intervals,
            "grid index {index} out of range 0..={}",
            self.intervals
        );
        if index == self.intervals {
            self.end
        } else {
            #[allow(clippy::cast_precision_loss)]
            let offset = index as f64 * self.step;
            offset + self.start
        }
    }

    /// Returns the grid point at `index`, or `None` past the last point.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        (index <= self.intervals).then(|| self.point(index))
    }

    /// Iterates over all grid points in increasing order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.points().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn quarter_steps_on_unit_interval() {
        let grid = Grid::new(0.0, 1.0, 4).unwrap();

        assert_eq!(grid.step_size(), 0.25);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn endpoints_are_exact() {
        let grid = Grid::new(0.1, 0.7, 3).unwrap();

        assert_eq!(grid.point(0), 0.1);
        assert_eq!(grid.point(3), 0.7);
    }

    #[test]
    fn consecutive_points_are_equally_spaced() {
        let grid = Grid::new(-1.3, 2.9, 17).unwrap();
        let points = grid.to_vec();
        let h = (2.9 - -1.3) / 17.0;

        assert_eq!(points.len(), 18);
        for pair in points.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], h, max_relative = 1e-12);
        }
    }

    #[test]
    fn bounds_are_checked_before_the_step_count() {
        assert_eq!(
            Grid::new(1.0, 0.0, 0),
            Err(ParamsError::EmptyInterval { a: 1.0, b: 0.0 })
        );
        assert!(Grid::check_bounds(-2.0, -1.0).is_ok());
        assert!(Grid::check_bounds(0.0, f64::NAN).is_err());
    }

    #[test]
    fn single_interval_is_just_the_endpoints() {
        let grid = Grid::new(2.0, 5.0, 1).unwrap();
        assert_eq!(grid.to_vec(), vec![2.0, 5.0]);
    }

    #[test]
    fn with_points_counts_points_not_intervals() {
        let grid = Grid::with_points(0.0, 1.0, 200).unwrap();

        assert_eq!(grid.len(), 200);
        assert_eq!(grid.intervals(), 199);
        assert_eq!(grid.points().len(), 200);
    }

    #[test]
    fn with_points_needs_two_points() {
        assert_eq!(Grid::with_points(0.0, 1.0, 1), Err(ParamsError::ZeroSteps));
        assert_eq!(Grid::with_points(0.0, 1.0, 0), Err(ParamsError::ZeroSteps));
    }

    #[test]
    fn get_stops_at_the_last_point() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();

        assert_eq!(grid.get(2), Some(1.0));
        assert_eq!(grid.get(3), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn point_past_the_end_panics() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();
        let _ = grid.point(3);
    }
}
