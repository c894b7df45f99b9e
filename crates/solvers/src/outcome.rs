use crate::Error;

/// How a successful solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Met the convergence criterion.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The root found by a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub root: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

/// The step trace of a solve together with its result.
///
/// The trace is kept on failure, so callers can still inspect how the
/// solver behaved before it stopped.
#[derive(Debug)]
pub struct Outcome<S> {
    /// Steps in iteration order, one per completed iteration.
    pub steps: Vec<S>,

    /// The solution, or the error that ended the solve.
    pub result: Result<Solution, Error>,
}

impl<S> Outcome<S> {
    /// Returns the root if the solve succeeded.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.result.as_ref().ok().map(|solution| solution.root)
    }

    /// Returns the iteration count if the solve succeeded.
    #[must_use]
    pub fn iters(&self) -> Option<usize> {
        self.result.as_ref().ok().map(|solution| solution.iters)
    }

    /// Returns the error that ended the solve, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }

    /// Returns true if the solver met its convergence criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(
            self.result,
            Ok(Solution {
                status: Status::Converged,
                ..
            })
        )
    }
}
