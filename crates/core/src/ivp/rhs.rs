/// The right-hand side `f(t, y)` of a scalar ODE `y' = f(t, y)`.
///
/// Integrators take the right-hand side as a parameter, so a different
/// equation can be substituted without touching the update rule. Any
/// `Fn(f64, f64) -> f64` closure is a right-hand side.
///
/// Implementations are expected to be pure: the same `(t, y)` must always
/// produce the same value.
pub trait Rhs {
    /// Evaluates `f(t, y)`.
    fn eval(&self, t: f64, y: f64) -> f64;
}

impl<F> Rhs for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, t: f64, y: f64) -> f64 {
        self(t, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slope_at_origin(f: &impl Rhs) -> f64 {
        f.eval(0.0, 1.0)
    }

    #[test]
    fn closures_are_right_hand_sides() {
        let growth = |_t: f64, y: f64| 0.5 * y;
        assert_eq!(slope_at_origin(&growth), 0.5);
    }

    #[test]
    fn function_pointers_are_right_hand_sides() {
        fn forcing(t: f64, _y: f64) -> f64 {
            t + 3.0
        }
        assert_eq!(slope_at_origin(&forcing), 3.0);
    }
}
