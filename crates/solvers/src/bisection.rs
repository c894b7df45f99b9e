//! Bisection on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Starting from `[a, b]` with `f(a)` and `f(b)` of opposite sign, each
//! iteration evaluates the midpoint `c`, records the bracket, and keeps the
//! half in which the sign change persists. The solve converges when the
//! recorded bracket is narrower than `epsilon` or `f(c)` is exactly zero, and
//! returns `c`.
//!
//! The bracket order is not validated. A reversed or degenerate bracket runs
//! the same arithmetic and fails through the regular error paths (usually
//! [`Error::SameSignBoundary`]).

use rootline_core::{Function, Observer};

use crate::{
    Action, BracketStep, Config, Error, Event, Outcome, Solution, Solver, Status,
    evaluate::finite_at,
};

/// The bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    a: f64,
    b: f64,
    epsilon: f64,
    config: Config,
}

impl Bisection {
    /// Creates a bisection solver for the bracket `[a, b]`.
    #[must_use]
    pub fn new(a: f64, b: f64, epsilon: f64, config: Config) -> Self {
        Self {
            a,
            b,
            epsilon,
            config,
        }
    }

    fn run<F, Obs>(
        &self,
        function: &F,
        steps: &mut Vec<BracketStep>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, BracketStep>, Action>,
    {
        let (mut a, mut b) = (self.a, self.b);

        let mut fa = finite_at(function, a, |kind| Error::NonFiniteEvaluation { x: a, kind })?;
        let fb = finite_at(function, b, |kind| Error::NonFiniteEvaluation { x: b, kind })?;

        if same_sign(fa, fb) {
            return Err(Error::SameSignBoundary { a, b, fa, fb });
        }

        let mut last_mid = 0.5 * (a + b);

        for iter in 1..=self.config.max_iters() {
            let mid = 0.5 * (a + b);
            let f_mid =
                finite_at(function, mid, |kind| Error::NonFiniteEvaluation { x: mid, kind })?;

            let step = BracketStep { a, b };
            steps.push(step);
            tracing::trace!(iter, a, b, mid, f_mid, "bisection step");

            if let Some(Action::StopEarly) = observer.observe(&Event { iter, step: &step }) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    root: mid,
                    iters: iter,
                });
            }

            if (b - a).abs() < self.epsilon || f_mid == 0.0 {
                tracing::debug!(iter, root = mid, "bisection converged");
                return Ok(Solution {
                    status: Status::Converged,
                    root: mid,
                    iters: iter,
                });
            }

            if same_sign(fa, f_mid) {
                a = mid;
                fa = f_mid;
            } else {
                b = mid;
            }
            last_mid = mid;
        }

        Err(Error::MaxIterationsExceeded {
            max_iters: self.config.max_iters(),
            last_x: last_mid,
        })
    }
}

impl Solver for Bisection {
    type Step = BracketStep;

    fn solve_observed<F, Obs>(&self, function: &F, observer: Obs) -> Outcome<BracketStep>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, BracketStep>, Action>,
    {
        let mut steps = Vec::new();
        let result = self.run(function, &mut steps, observer);
        if let Err(error) = &result {
            tracing::debug!(%error, steps = steps.len(), "bisection failed");
        }
        Outcome { steps, result }
    }
}

/// Returns true if both values are non-zero with the same sign.
///
/// Equivalent to `lhs * rhs > 0` without the product underflowing to zero.
fn same_sign(lhs: f64, rhs: f64) -> bool {
    lhs != 0.0 && rhs != 0.0 && lhs.is_sign_positive() == rhs.is_sign_positive()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{NonFinite, from_fn};

    fn solver(a: f64, b: f64, epsilon: f64) -> Bisection {
        Bisection::new(a, b, epsilon, Config::default())
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = from_fn(|x| x * x - 2.0);
        let outcome = solver(0.0, 2.0, 1e-8).solve(&f);

        assert!(outcome.is_converged());
        assert_relative_eq!(outcome.root().expect("root"), 2.0_f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn records_bracket_before_each_halving() {
        let f = from_fn(|x| x - 0.3);
        let outcome = solver(0.0, 1.0, 0.2).solve(&f);

        // Widths 1, 0.5, 0.25 are recorded before the width 0.125 step converges.
        let expected = [
            BracketStep { a: 0.0, b: 1.0 },
            BracketStep { a: 0.0, b: 0.5 },
            BracketStep { a: 0.25, b: 0.5 },
            BracketStep { a: 0.25, b: 0.375 },
        ];
        assert_eq!(outcome.steps, expected);
        assert_eq!(outcome.iters(), Some(4));
        assert_relative_eq!(outcome.root().expect("root"), 0.3125);
    }

    #[test]
    fn iteration_count_matches_steps() {
        let f = from_fn(|x: f64| x.powi(3) - x - 1.0);
        let outcome = solver(1.0, 2.0, 1e-6).solve(&f);

        assert_eq!(outcome.iters(), Some(outcome.steps.len()));
    }

    #[test]
    fn stops_on_exact_zero_at_midpoint() {
        let f = from_fn(|x| x - 1.0);
        let outcome = solver(0.0, 2.0, 1e-12).solve(&f);

        assert_eq!(outcome.steps, [BracketStep { a: 0.0, b: 2.0 }]);
        assert_eq!(outcome.root(), Some(1.0));
    }

    #[test]
    fn rejects_same_sign_boundary() {
        let f = from_fn(|x| x * x + 1.0);
        let outcome = solver(-1.0, 1.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::SameSignBoundary { fa, fb, .. }) if fa == 2.0 && fb == 2.0
        ));
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn root_at_boundary_is_accepted() {
        // f(a) = 0 counts as a sign change; the bracket collapses toward a.
        let f = from_fn(|x| x);
        let outcome = solver(0.0, 1.0, 1e-6).solve(&f);

        assert!(outcome.is_converged());
        assert_relative_eq!(outcome.root().expect("root"), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn non_finite_endpoint_fails_before_iterating() {
        let f = from_fn(f64::ln);
        let outcome = solver(-1.0, 2.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::NonFiniteEvaluation {
                x,
                kind: NonFinite::NotANumber,
            }) if x == -1.0
        ));
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn non_finite_midpoint_keeps_partial_trace() {
        // 1/x changes sign across the pole, and the first midpoint lands on it.
        let f = from_fn(|x| 1.0 / x);
        let outcome = solver(-1.0, 1.0, 1e-6).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::NonFiniteEvaluation {
                kind: NonFinite::Infinite,
                ..
            })
        ));
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn exhausting_iterations_returns_trace() {
        let f = from_fn(|x| x - 0.3);
        let config = Config::default().with_max_iters(5);
        let outcome = Bisection::new(0.0, 1.0, 1e-12, config).solve(&f);

        assert!(matches!(
            outcome.result,
            Err(Error::MaxIterationsExceeded { max_iters: 5, .. })
        ));
        assert_eq!(outcome.steps.len(), 5);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = from_fn(|x| x * x - 2.0);

        let mut calls = 0usize;
        let observer = |event: &Event<'_, BracketStep>| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let outcome = solver(0.0, 2.0, 1e-12).solve_observed(&f, observer);

        let solution = outcome.result.expect("should stop cleanly");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(outcome.steps.len(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn same_sign_ignores_zero() {
        assert!(same_sign(1.0, 2.0));
        assert!(same_sign(-1e-200, -1e-200));
        assert!(!same_sign(-1.0, 2.0));
        assert!(!same_sign(0.0, 2.0));
        assert!(!same_sign(-0.0, -2.0));
    }
}
