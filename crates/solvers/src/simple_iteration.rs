//! Fixed-point iteration `x_{n+1} = phi(x_n)`.
//!
//! The function handed to this solver is the map `phi` itself, not an
//! `f(x) = 0` form. No contraction check is made: a map that does not
//! contract near its fixed point either diverges, which ends the solve with
//! [`Error::DivergenceDetected`] once `phi` leaves the finite range, or wanders
//! until [`Error::MaxIterationsExceeded`].

use rootline_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, IterationStep, Outcome, Solution, Solver, Status,
    evaluate::{finite_at, non_finite},
};

/// The fixed-point iteration solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleIteration {
    x0: f64,
    epsilon: f64,
    config: Config,
}

impl SimpleIteration {
    /// Creates a fixed-point solver starting from `x0`.
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
        map: &F,
        steps: &mut Vec<IterationStep>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, IterationStep>, Action>,
    {
        let mut x_prev = self.x0;

        for iter in 1..=self.config.max_iters() {
            let x_new = finite_at(map, x_prev, |kind| Error::DivergenceDetected {
                x: x_prev,
                kind,
            })?;

            let diff = (x_new - x_prev).abs();
            if let Some(kind) = non_finite(diff) {
                return Err(Error::DivergenceDetected { x: x_prev, kind });
            }

            let step = IterationStep {
                x_prev,
                x_new,
                aux: diff,
            };
            steps.push(step);
            tracing::trace!(iter, x_prev, x_new, diff, "simple iteration step");

            if let Some(Action::StopEarly) = observer.observe(&Event { iter, step: &step }) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    root: x_new,
                    iters: iter,
                });
            }

            if diff <= self.epsilon {
                tracing::debug!(iter, root = x_new, "simple iteration converged");
                return Ok(Solution {
                    status: Status::Converged,
                    root: x_new,
                    iters: iter,
                });
            }

            x_prev = x_new;
        }

        Err(Error::MaxIterationsExceeded {
            max_iters: self.config.max_iters(),
            last_x: x_prev,
        })
    }
}

impl Solver for SimpleIteration {
    type Step = IterationStep;

    fn solve_observed<F, Obs>(&self, function: &F, observer: Obs) -> Outcome<IterationStep>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, IterationStep>, Action>,
    {
        let mut steps = Vec::new();
        let result = self.run(function, &mut steps, observer);
        if let Err(error) = &result {
            tracing::debug!(%error, steps = steps.len(), "simple iteration failed");
        }
        Outcome { steps, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{NonFinite, from_fn};

    fn solver(x0: f64, epsilon: f64) -> SimpleIteration {
        SimpleIteration::new(x0, epsilon, Config::default())
    }

    #[test]
    fn finds_fixed_point_of_cosine() {
        let phi = from_fn(|x: f64| x.cos());
        let outcome = solver(1.0, 1e-6).solve(&phi);

        assert!(outcome.is_converged());
        assert_relative_eq!(outcome.root().expect("root"), 0.739_085_1, epsilon = 1e-6);
        assert_eq!(outcome.iters(), Some(outcome.steps.len()));
    }

    #[test]
    fn steps_record_distance_moved() {
        let phi = from_fn(|x: f64| x.cos());
        let outcome = solver(1.0, 1e-6).solve(&phi);

        for step in &outcome.steps {
            assert_relative_eq!(step.aux, step.delta());
        }
        assert_relative_eq!(outcome.steps[0].x_new, 1.0_f64.cos());
        assert!(outcome.steps.last().expect("non-empty").aux <= 1e-6);
    }

    #[test]
    fn converges_immediately_at_fixed_point() {
        let phi = from_fn(|x| 0.5 * x + 1.0);
        let outcome = solver(2.0, 1e-12).solve(&phi);

        assert_eq!(outcome.iters(), Some(1));
        assert_eq!(
            outcome.steps,
            [IterationStep {
                x_prev: 2.0,
                x_new: 2.0,
                aux: 0.0
            }]
        );
    }

    #[test]
    fn non_contracting_map_exhausts_iterations() {
        let phi = from_fn(|x| x + 1.0);
        let config = Config::default().with_max_iters(50);
        let outcome = SimpleIteration::new(0.0, 1e-6, config).solve(&phi);

        assert_eq!(outcome.steps.len(), 50);
        assert!(matches!(
            outcome.result,
            Err(Error::MaxIterationsExceeded { max_iters: 50, last_x }) if last_x == 50.0
        ));
    }

    #[test]
    fn detects_divergence() {
        // 1, e, e^e, e^(e^e) and then overflow.
        let phi = from_fn(|x: f64| x.exp());
        let outcome = solver(1.0, 1e-6).solve(&phi);

        assert_eq!(outcome.steps.len(), 3);
        let last = outcome.steps[2].x_new;
        assert!(matches!(
            outcome.result,
            Err(Error::DivergenceDetected {
                x,
                kind: NonFinite::Infinite,
            }) if x == last
        ));
    }

    #[test]
    fn overflowing_distance_is_not_recorded() {
        // Both iterates are finite, but they are too far apart.
        let phi = from_fn(|x: f64| -x);
        let outcome = solver(1e308, 1e-6).solve(&phi);

        assert!(outcome.steps.is_empty());
        assert!(matches!(
            outcome.result,
            Err(Error::DivergenceDetected {
                x,
                kind: NonFinite::Infinite,
            }) if x == 1e308
        ));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let phi = from_fn(|x: f64| x.cos());

        let mut seen = Vec::new();
        let observer = |event: &Event<'_, IterationStep>| {
            seen.push(event.step.x_new);
            (event.iter == 3).then_some(Action::StopEarly)
        };
        let outcome = solver(1.0, 1e-12).solve_observed(&phi, observer);

        let solution = outcome.result.expect("should stop cleanly");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(seen.len(), 3);
        assert_relative_eq!(solution.root, seen[2]);
    }
}
