//! Forward Euler solver for ODE problems.
//!
//! Steps a model forward with the explicit Euler update
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * delta
//! ```
//!
//! where the derivative is always taken at the previous accepted point.
//!
//! # Example
//!
//! ```ignore
//! use ivp_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, h, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ivp_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};
use tracing::trace;

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state from the current input.
///    - Compute the derivative from the current input and output.
///    - Step the state forward: `state + derivative * delta`.
///    - Build the next input from the stepped state.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full history.
///
/// The observer also sees the initial snapshot as step 0 and may stop there.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(|err| Error::model(0, err))?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps.saturating_add(1));
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        trace!("observer stopped the solver at the initial point");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(|err| Error::problem(step, err))?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(|err| Error::problem(step, err))?;

        let next_state = state.step(derivative, delta.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &delta)
            .map_err(|err| Error::problem(step, err))?;
        let next_output = model.call(&next_input).map_err(|err| Error::model(step, err))?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            trace!(step, "observer stopped the solver");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, delta, steps, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use ivp_core::DerivativeOf;

    // --- Test fixtures ---

    /// Model input: amount of a decaying quantity and elapsed time.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Input {
        amount: f64,
        time: f64,
    }

    /// Model output: rate of change of the amount.
    #[derive(Debug, Clone, Copy)]
    struct Output {
        rate: f64,
    }

    /// First-order decay `amount' = -k * amount`.
    struct Decay {
        k: f64,
    }

    impl Model for Decay {
        type Input = Input;
        type Output = Output;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<Output, Infallible> {
            Ok(Output {
                rate: -self.k * input.amount,
            })
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("amount fell below {floor}")]
    struct BelowFloor {
        floor: f64,
    }

    /// Decay model that refuses to evaluate below a floor.
    struct FlooredDecay {
        k: f64,
        floor: f64,
    }

    impl Model for FlooredDecay {
        type Input = Input;
        type Output = Output;
        type Error = BelowFloor;

        fn call(&self, input: &Input) -> Result<Output, BelowFloor> {
            if input.amount < self.floor {
                return Err(BelowFloor { floor: self.floor });
            }
            Ok(Output {
                rate: -self.k * input.amount,
            })
        }
    }

    struct DecayProblem;

    impl OdeProblem for DecayProblem {
        type Input = Input;
        type Output = Output;
        type Delta = f64;
        type State = f64;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<f64, Infallible> {
            Ok(input.amount)
        }

        fn derivative(
            &self,
            _input: &Input,
            output: &Output,
        ) -> Result<DerivativeOf<f64, f64>, Infallible> {
            Ok(output.rate)
        }

        fn build_input(&self, base: &Input, state: &f64, delta: &f64) -> Result<Input, Infallible> {
            Ok(Input {
                amount: *state,
                time: base.time + delta,
            })
        }
    }

    fn start(amount: f64) -> Input {
        Input { amount, time: 0.0 }
    }

    // --- Tests ---

    #[test]
    fn halving_decay() {
        // With k * dt = 0.5 every step halves the amount.
        let solution = solve_unobserved(&Decay { k: 1.0 }, &DecayProblem, start(8.0), 0.5, 3)
            .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 3);

        let amounts: Vec<f64> = solution.history.iter().map(|s| s.input.amount).collect();
        assert_eq!(amounts, vec![8.0, 4.0, 2.0, 1.0]);
        assert_relative_eq!(solution.history[3].input.time, 1.5);
    }

    #[test]
    fn output_is_evaluated_at_every_point() {
        let solution = solve_unobserved(&Decay { k: 2.0 }, &DecayProblem, start(1.0), 0.25, 2)
            .expect("should solve");

        for snapshot in &solution.history {
            assert_eq!(snapshot.output.rate, -2.0 * snapshot.input.amount);
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<Input, Output>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(
            &Decay { k: 0.1 },
            &DecayProblem,
            start(1.0),
            0.1,
            100,
            observer,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn observer_can_stop_at_the_initial_point() {
        let solution = solve(
            &Decay { k: 1.0 },
            &DecayProblem,
            start(1.0),
            0.1,
            10,
            |_: &Event<Input, Output>| Some(Action::StopEarly),
        )
        .expect("should stop immediately");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
    }

    #[test]
    fn zero_steps_returns_initial() {
        let solution = solve_unobserved(&Decay { k: 1.0 }, &DecayProblem, start(5.0), 0.1, 0)
            .expect("should return initial");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_eq!(solution.history[0].input, start(5.0));
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut step_values = Vec::new();
        solve(
            &Decay { k: 1.0 },
            &DecayProblem,
            start(1.0),
            0.25,
            4,
            |event: &Event<Input, Output>| {
                step_values.push(event.step);
                None
            },
        )
        .expect("should solve");

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn model_error_reports_the_failing_step() {
        // 8 -> 4 -> 2 -> 1: the call at step 2 sees 2.0 < 3.0.
        let model = FlooredDecay { k: 1.0, floor: 3.0 };

        let err = solve_unobserved(&model, &DecayProblem, start(8.0), 0.5, 10)
            .expect_err("should hit the floor");

        assert!(matches!(err, Error::Model { step: 2, .. }));
        assert_eq!(err.step(), 2);
        assert_eq!(err.to_string(), "model call failed at step 2: amount fell below 3");
    }
}
