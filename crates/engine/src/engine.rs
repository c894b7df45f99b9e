use rootline_solvers::{Config, Error, Outcome, bisection, newton, simple_iteration};

use crate::{ConfigLoadError, EngineConfig, Reply, Request, RequestError, TraceStep};

/// Dispatches solve requests to the solvers.
///
/// An engine holds only its solver [`Config`], so one instance can serve any
/// number of requests, from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an engine from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Invalid`] if the settings are out of range.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigLoadError> {
        Ok(Self::new(config.solver_config()?))
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes a JSON request and solves it.
    pub fn handle_json(&self, input: &str) -> Reply {
        match serde_json::from_str::<Request>(input) {
            Ok(request) => self.solve(&request),
            Err(error) => {
                let error = RequestError::from(error);
                tracing::warn!(component = "engine", %error, "rejected request");
                Reply::failure(error)
            }
        }
    }

    /// Validates and solves a request.
    pub fn solve(&self, request: &Request) -> Reply {
        let _span = tracing::info_span!("solve", component = "engine", op = request.method())
            .entered();

        if let Err(error) = request.validate() {
            tracing::warn!(%error, "rejected request");
            return Reply::failure(error);
        }

        let config = &self.config;
        match request {
            Request::Dichotomy {
                formula,
                epsilon,
                a,
                b,
            } => finish(&bisection(formula, *a, *b, *epsilon, config)),
            Request::Newton {
                formula,
                epsilon,
                x0,
            } => finish(&newton(formula, *x0, *epsilon, config)),
            Request::SimpleIter {
                formula,
                epsilon,
                x0,
            } => finish(&simple_iteration(formula, *x0, *epsilon, config)),
        }
    }
}

fn finish<S: TraceStep>(outcome: &Outcome<S>) -> Reply {
    match &outcome.result {
        Ok(solution) => {
            tracing::info!(root = solution.root, iterations = solution.iters, "solved");
        }
        Err(error @ Error::Formula(_)) => {
            tracing::error!(%error, "failed to compile formula");
        }
        Err(error) => {
            tracing::warn!(%error, steps = outcome.steps.len(), "solve failed");
        }
    }
    Reply::from_outcome(outcome)
}
