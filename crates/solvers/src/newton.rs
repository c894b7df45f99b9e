//! Newton-Raphson iteration with a finite-difference derivative.
//!
//! # Algorithm
//!
//! From `x = x0`, each iteration evaluates `f(x)`, estimates `f'(x)` with a
//! central difference, and moves to `x - f(x) / f'(x)`. The solve converges
//! when a step moves less than `epsilon`.
//!
//! Near a simple root this converges quadratically, but it needs a usable
//! derivative: a derivative smaller than the configured tolerance ends the
//! solve with [`Error::ZeroDerivative`]. When the iteration cap is reached,
//! [`Error::MaxIterationsExceeded`] carries the last iterate, which should not
//! be trusted as a root.

use rootline_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, IterationStep, Outcome, Solution, Solver, Status,
    derivative::central_difference,
    evaluate::{finite_at, non_finite},
};

/// The Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Newton {
    x0: f64,
    epsilon: f64,
    config: Config,
}

impl Newton {
    /// Creates a Newton solver starting from `x0`.
    #[must_use]
    pub fn new(x0: f64, epsilon: f64, config: Config) -> Self {
        Self {
            x0,
            epsilon,
            config,
        }
    }

    fn run<F, Obs>(
        &self,
        function: &F,
        steps: &mut Vec<IterationStep>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, IterationStep>, Action>,
    {
        let mut x = self.x0;

        for iter in 1..=self.config.max_iters() {
            let fx = finite_at(function, x, |kind| Error::NonFiniteEvaluation { x, kind })?;

            let derivative = central_difference(function, x, self.config.derivative_step());
            if !derivative.is_finite() {
                return Err(Error::NonFiniteDerivative { x, derivative });
            }
            if derivative.abs() < self.config.derivative_tol() {
                return Err(Error::ZeroDerivative { x, derivative });
            }

            let x_new = x - fx / derivative;
            if let Some(kind) = non_finite(x_new) {
                return Err(Error::NonFiniteEvaluation { x: x_new, kind });
            }

            let step = IterationStep {
                x_prev: x,
                x_new,
                aux: fx,
            };
            steps.push(step);
            tracing::trace!(iter, x, x_new, fx, derivative, "newton step");

            if let Some(Action::StopEarly) = observer.observe(&Event { iter, step: &step }) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    root: x_new,
                    iters: iter,
                });
            }

            if (x_new - x).abs() < self.epsilon {
                tracing::debug!(iter, root = x_new, "newton converged");
                return Ok(Solution {
                    status: Status::Converged,
                    root: x_new,
                    iters: iter,
                });
            }

            x = x_new;
        }

        Err(Error::MaxIterationsExceeded {
            max_iters: self.config.max_iters(),
            last_x: x,
        })
    }
}

impl Solver for Newton {
    type Step = IterationStep;

    fn solve_observed<F, Obs>(&self, function: &F, observer: Obs) -> Outcome<IterationStep>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, IterationStep>, Action>,
    {
        let mut steps = Vec::new();
        let result = self.run(function, &mut steps, observer);
        if let Err(error) = &result {
            tracing::debug!(%error, steps = steps.len(), "newton failed");
        }
        Outcome { steps, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{NonFinite, from_fn};

    fn solver(x0: f64, epsilon: f64) -> Newton {
        Newton::new(x0, epsilon, Config::default())
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = from_fn(|x| x * x - 2.0);
        let outcome = solver(1.0, 1e-6).solve(&f);

        assert!(outcome.is_converged());
        assert_relative_eq!(outcome.root().expect("root"), 1.414_213_56, epsilon = 1e-8);
        assert!(outcome.steps.len() < 10);
    }

    #[test]
    fn records_each_step() {
        let f = from_fn(|x| x * x - 2.0);
        let outcome = solver(1.0, 1e-6).solve(&f);

        let first = outcome.steps[0];
        assert_relative_eq!(first.x_prev, 1.0);
        assert_relative_eq!(first.aux, -1.0);
        // f'(1) = 2, so the first step lands on 1.5.
        assert_relative_eq!(first.x_new, 1.5, epsilon = 1e-8);

        for pair in outcome.steps.windows(2) {
            assert_relative_eq!(pair[0].x_new, pair[1].x_prev);
        }
        assert_eq!(outcome.iters(), Some(outcome.steps.len()));
    }

    #[test]
    fn fails_on_zero_derivative() {
        // Flat at the starting point.
        let f = from_fn(|x| x * x + 1.0);
        let outcome = solver(0.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::ZeroDerivative { x, .. }) if x == 0.0
        ));
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn fails_on_non_finite_derivative() {
        // sqrt is undefined just left of zero, so the central difference is NaN.
        let f = from_fn(|x: f64| x.sqrt() - 1.0);
        let outcome = solver(0.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::NonFiniteDerivative { x, .. }) if x == 0.0
        ));
    }

    #[test]
    fn fails_on_non_finite_evaluation() {
        let f = from_fn(|x: f64| x.ln());
        let outcome = solver(-2.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::NonFiniteEvaluation {
                kind: NonFinite::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn overflowing_step_is_not_recorded() {
        // Huge value with a small but usable slope at the start.
        let f = from_fn(|x: f64| if x == 0.0 { 1e308 } else { 1e-9 * x });
        let outcome = solver(0.0, 1e-6).solve(&f);

        assert!(outcome.steps.is_empty());
        assert!(matches!(
            outcome.result,
            Err(Error::NonFiniteEvaluation {
                x,
                kind: NonFinite::Infinite,
            }) if x == f64::NEG_INFINITY
        ));
    }

    #[test]
    fn exhausting_iterations_returns_last_iterate() {
        // Newton cycles between 0 and 1 on x³ - 2x + 2 from x0 = 0.
        let f = from_fn(|x: f64| x.powi(3) - 2.0 * x + 2.0);
        let config = Config::default().with_max_iters(6);
        let outcome = Newton::new(0.0, 1e-10, config).solve(&f);

        let Err(Error::MaxIterationsExceeded { max_iters, last_x }) = outcome.result else {
            panic!("expected max iterations, got {:?}", outcome.result);
        };
        assert_eq!(max_iters, 6);
        assert_eq!(outcome.steps.len(), 6);
        assert_relative_eq!(last_x, outcome.steps[5].x_new, epsilon = 1e-12);
        assert_relative_eq!(last_x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = from_fn(|x: f64| x.exp() - 2.0);

        let observer = |event: &Event<'_, IterationStep>| {
            (event.iter == 2).then_some(Action::StopEarly)
        };
        let outcome = solver(5.0, 1e-12).solve_observed(&f, observer);

        let solution = outcome.result.expect("should stop cleanly");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.root, outcome.steps[1].x_new);
    }
}
