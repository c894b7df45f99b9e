use std::error::Error as StdError;

use rootline_core::NonFinite;
use thiserror::Error;

/// Errors that can end a solve.
///
/// Every error is a deterministic function of the input; none is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid formula: {0}")]
    Formula(#[from] rootline_expr::Error),

    #[error("function is {kind} at x = {x}")]
    NonFiniteEvaluation { x: f64, kind: NonFinite },

    #[error("function has the same sign at both ends of [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    SameSignBoundary { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative vanishes at x = {x} (f'(x) = {derivative})")]
    ZeroDerivative { x: f64, derivative: f64 },

    #[error("derivative is not finite at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("iteration diverges at x = {x}: {kind} value")]
    DivergenceDetected { x: f64, kind: NonFinite },

    #[error("no convergence after {max_iters} iterations (last x = {last_x})")]
    MaxIterationsExceeded { max_iters: usize, last_x: f64 },

    #[error("function call failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Returns true for the soft failure of running out of iterations.
    #[must_use]
    pub fn is_max_iterations(&self) -> bool {
        matches!(self, Self::MaxIterationsExceeded { .. })
    }
}
