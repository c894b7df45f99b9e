//! Entry points that solve a formula string directly.
//!
//! Each function parses the formula with [`rootline_expr::parse_formula`],
//! builds the matching solver, and runs it. A formula that fails to parse
//! yields an empty trace and [`Error::Formula`].

use rootline_expr::parse_formula;

use crate::{
    Bisection, BracketStep, Config, Error, IterationStep, Newton, Outcome, SimpleIteration,
    Solver,
};

/// Finds a root of `formula` in `[a, b]` by bisection.
#[must_use]
pub fn bisection(
    formula: &str,
    a: f64,
    b: f64,
    epsilon: f64,
    config: &Config,
) -> Outcome<BracketStep> {
    solve_formula(formula, &Bisection::new(a, b, epsilon, *config))
}

/// Finds a root of `formula` by Newton-Raphson iteration from `x0`.
#[must_use]
pub fn newton(formula: &str, x0: f64, epsilon: f64, config: &Config) -> Outcome<IterationStep> {
    solve_formula(formula, &Newton::new(x0, epsilon, *config))
}

/// Finds a fixed point of the map given by `formula`, starting from `x0`.
#[must_use]
pub fn simple_iteration(
    formula: &str,
    x0: f64,
    epsilon: f64,
    config: &Config,
) -> Outcome<IterationStep> {
    solve_formula(formula, &SimpleIteration::new(x0, epsilon, *config))
}

fn solve_formula<S: Solver>(formula: &str, solver: &S) -> Outcome<S::Step> {
    match parse_formula(formula) {
        Ok(expression) => solver.solve(&expression),
        Err(error) => {
            tracing::debug!(formula, %error, "formula rejected");
            Outcome {
                steps: Vec::new(),
                result: Err(Error::from(error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_expr::Malformed;

    #[test]
    fn solves_equation_with_right_side() {
        let outcome = bisection("x^2 = 2", 0.0, 2.0, 1e-8, &Config::default());
        assert_relative_eq!(outcome.root().expect("root"), 2.0_f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn bare_calls_reach_the_solver() {
        let outcome = newton("ln x = 1", 2.0, 1e-10, &Config::default());
        assert_relative_eq!(
            outcome.root().expect("root"),
            std::f64::consts::E,
            epsilon = 1e-9
        );
    }

    #[test]
    fn malformed_formula_has_empty_trace() {
        let outcome = simple_iteration("x = 1 = 2", 0.0, 1e-6, &Config::default());

        assert!(outcome.steps.is_empty());
        assert!(matches!(
            outcome.result,
            Err(Error::Formula(rootline_expr::Error::MalformedEquation(
                Malformed::MultipleEquals(2)
            )))
        ));
    }

    #[test]
    fn syntax_error_has_empty_trace() {
        let outcome = newton("x ** * 2", 1.0, 1e-6, &Config::default());

        assert!(outcome.steps.is_empty());
        assert!(matches!(
            outcome.result,
            Err(Error::Formula(rootline_expr::Error::Syntax { .. }))
        ));
    }
}
