use rootline_solvers::{BracketStep, IterationStep, Outcome};
use serde::Serialize;

/// A bisection step as sent to callers: the bracket and its midpoint `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BisectionStepDto {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// A Newton or fixed-point step as sent to callers.
///
/// `fx` is `f(x_prev)` for Newton and `|x_new - x_prev|` for simple
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationStepDto {
    pub x_prev: f64,
    pub x_new: f64,
    pub fx: f64,
}

/// The step trace of a reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Steps {
    Bisection(Vec<BisectionStepDto>),
    Iteration(Vec<IterationStepDto>),
}

/// A successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub root: f64,
    pub iterations: usize,
    /// Final error estimate.
    pub error: f64,
    pub steps: Steps,
}

/// A rejected request or failed solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Steps>,
}

/// The reply to a request, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Success(Response),
    Failure(ErrorResponse),
}

/// A solver step that can be sent to callers.
pub trait TraceStep: Sized {
    /// Converts a whole trace.
    fn to_steps(trace: &[Self]) -> Steps;

    /// Estimates the error left after this step.
    fn error_estimate(&self) -> f64;
}

impl TraceStep for BracketStep {
    fn to_steps(trace: &[Self]) -> Steps {
        Steps::Bisection(
            trace
                .iter()
                .map(|step| BisectionStepDto {
                    a: step.a,
                    b: step.b,
                    c: step.midpoint(),
                })
                .collect(),
        )
    }

    /// Half the bracket width, the largest distance from the midpoint to a
    /// root inside the bracket.
    fn error_estimate(&self) -> f64 {
        0.5 * self.width()
    }
}

impl TraceStep for IterationStep {
    fn to_steps(trace: &[Self]) -> Steps {
        Steps::Iteration(
            trace
                .iter()
                .map(|step| IterationStepDto {
                    x_prev: step.x_prev,
                    x_new: step.x_new,
                    fx: step.aux,
                })
                .collect(),
        )
    }

    fn error_estimate(&self) -> f64 {
        self.delta()
    }
}

impl Reply {
    /// Builds a reply from a solver outcome.
    pub fn from_outcome<S: TraceStep>(outcome: &Outcome<S>) -> Self {
        match &outcome.result {
            Ok(solution) => Self::Success(Response {
                root: solution.root,
                iterations: solution.iters,
                error: outcome.steps.last().map_or(0.0, S::error_estimate),
                steps: S::to_steps(&outcome.steps),
            }),
            Err(error) => Self::Failure(ErrorResponse {
                error: error.to_string(),
                steps: (!outcome.steps.is_empty()).then(|| S::to_steps(&outcome.steps)),
            }),
        }
    }

    /// Builds a failure reply with no trace.
    pub fn failure(error: impl ToString) -> Self {
        Self::Failure(ErrorResponse {
            error: error.to_string(),
            steps: None,
        })
    }

    /// Returns true for a successful solve.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
