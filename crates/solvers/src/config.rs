use thiserror::Error;

/// Default iteration ceiling shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// Default tolerance below which a derivative is treated as zero.
pub const DEFAULT_DERIVATIVE_TOL: f64 = 1e-10;

/// Configuration shared by the solvers.
///
/// Passed explicitly to each solver so that solves carry no hidden global
/// state and tests can use custom iteration caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    derivative_step: f64,
    derivative_tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("derivative_step must be finite and positive")]
    DerivativeStep,

    #[error("derivative_tol must be finite and non-negative")]
    DerivativeTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            derivative_step: crate::derivative::default_step(),
            derivative_tol: DEFAULT_DERIVATIVE_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with validated derivative settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero, if the derivative step is not
    /// finite and positive, or if the derivative tolerance is negative or
    /// non-finite.
    pub fn new(
        max_iters: usize,
        derivative_step: f64,
        derivative_tol: f64,
    ) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !derivative_step.is_finite() || derivative_step <= 0.0 {
            return Err(ConfigError::DerivativeStep);
        }
        if !derivative_tol.is_finite() || derivative_tol < 0.0 {
            return Err(ConfigError::DerivativeTol);
        }

        Ok(Self {
            max_iters,
            derivative_step,
            derivative_tol,
        })
    }

    /// Returns a copy of this config with a different iteration cap.
    ///
    /// A cap of zero is raised to one.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: max_iters.max(1),
            ..self
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step `h` of the central difference.
    #[must_use]
    pub fn derivative_step(&self) -> f64 {
        self.derivative_step
    }

    /// Returns the magnitude below which Newton treats a derivative as zero.
    #[must_use]
    pub fn derivative_tol(&self) -> f64 {
        self.derivative_tol
    }
}
