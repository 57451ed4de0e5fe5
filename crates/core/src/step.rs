/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic ODE solvers to work with the type by
/// stepping it via `derivative * delta`, where the derivative is with respect
/// to `Delta`.
///
/// Plain `f64` is steppable out of the box, which is all a scalar initial
/// value problem needs.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    /// Forward difference update `self + derivative * delta`.
    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_scalar() {
        let y = 2.0_f64;

        let next = y.step(-2.0, 0.25);

        assert_eq!(next, 1.5);
    }

    #[test]
    fn step_matches_forward_difference_bit_for_bit() {
        let (y, slope, h) = (1.1875_f64, -0.9375_f64, 0.1_f64);

        assert_eq!(y.step(slope, h).to_bits(), (y + h * slope).to_bits());
    }

    #[test]
    fn step_propagates_nan() {
        let y = 1.0_f64;

        assert!(y.step(f64::NAN, 0.5).is_nan());
    }

    // Vector state and derivative, for states wider than one scalar.
    #[derive(Debug, PartialEq)]
    struct StateVector(Vec<f64>);
    struct DerivativeVector(Vec<f64>);

    impl StepIntegrable<f64> for StateVector {
        type Derivative = DerivativeVector;

        fn step(&self, derivative: DerivativeVector, delta: f64) -> Self {
            let next = self
                .0
                .iter()
                .zip(derivative.0.iter())
                .map(|(s, d)| s + d * delta)
                .collect();
            StateVector(next)
        }
    }

    #[test]
    fn step_vector_state() {
        let state = StateVector(vec![1.0, 2.0, 3.0]);
        let deriv = DerivativeVector(vec![0.5, 0.25, -1.0]);

        let next = state.step(deriv, 2.0);

        assert_eq!(next, StateVector(vec![2.0, 2.5, 1.0]));
    }
}
