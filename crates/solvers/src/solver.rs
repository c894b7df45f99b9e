use rootline_core::{Function, Observer};

use crate::Outcome;

/// Control actions supported by all solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current estimate.
    StopEarly,
}

/// Iteration event emitted after each step is recorded.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The step just recorded.
    pub step: &'a S,
}

/// A root-finding algorithm that records a step trace.
///
/// Solvers are built with their algorithm-specific bounds, tolerance, and
/// [`Config`](crate::Config), and hold no state between solves: the same
/// solver and function always produce the same [`Outcome`].
pub trait Solver {
    /// The per-iteration record this solver produces.
    type Step;

    /// Solves, reporting every recorded step to `observer`.
    fn solve_observed<F, Obs>(&self, function: &F, observer: Obs) -> Outcome<Self::Step>
    where
        F: Function,
        Obs: for<'a> Observer<Event<'a, Self::Step>, Action>;

    /// Solves without observation.
    fn solve<F>(&self, function: &F) -> Outcome<Self::Step>
    where
        F: Function,
    {
        self.solve_observed(function, ())
    }
}
