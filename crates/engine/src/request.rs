use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A solve request, tagged by its `method` field.
///
/// ```json
/// {"method": "dichotomy", "formula": "x^2 - 2", "epsilon": 1e-6, "a": 0, "b": 2}
/// {"method": "newton", "formula": "x^2 = 2", "epsilon": 1e-6, "x0": 1}
/// {"method": "simple_iter", "formula": "cos(x)", "epsilon": 1e-6, "x0": 1}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
    /// Bisection on `[a, b]`.
    #[serde(alias = "bisection")]
    Dichotomy {
        formula: String,
        epsilon: f64,
        a: f64,
        b: f64,
    },

    /// Newton-Raphson from `x0`.
    Newton {
        formula: String,
        epsilon: f64,
        x0: f64,
    },

    /// Fixed-point iteration of the map `formula` from `x0`.
    SimpleIter {
        formula: String,
        epsilon: f64,
        x0: f64,
    },
}

/// Reasons a request is rejected before any solving starts.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid formula")]
    InvalidFormula,

    #[error("invalid epsilon")]
    InvalidEpsilon,

    #[error("invalid x0")]
    InvalidX0,

    #[error("invalid a")]
    InvalidA,

    #[error("invalid b")]
    InvalidB,
}

impl Request {
    /// Returns the method name used in logs.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Dichotomy { .. } => "dichotomy",
            Self::Newton { .. } => "newton",
            Self::SimpleIter { .. } => "simple_iter",
        }
    }

    /// Returns the formula to solve.
    #[must_use]
    pub fn formula(&self) -> &str {
        match self {
            Self::Dichotomy { formula, .. }
            | Self::Newton { formula, .. }
            | Self::SimpleIter { formula, .. } => formula,
        }
    }

    /// Checks the numeric parameters and the formula.
    ///
    /// The formula is only checked for being non-blank; its syntax is left
    /// to the solver pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.formula().trim().is_empty() {
            return Err(RequestError::InvalidFormula);
        }

        match *self {
            Self::Dichotomy { epsilon, a, b, .. } => {
                check_epsilon(epsilon)?;
                if !a.is_finite() {
                    return Err(RequestError::InvalidA);
                }
                if !b.is_finite() || b <= a {
                    return Err(RequestError::InvalidB);
                }
            }
            Self::Newton { epsilon, x0, .. } | Self::SimpleIter { epsilon, x0, .. } => {
                check_epsilon(epsilon)?;
                if !x0.is_finite() {
                    return Err(RequestError::InvalidX0);
                }
            }
        }

        Ok(())
    }
}

fn check_epsilon(epsilon: f64) -> Result<(), RequestError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(RequestError::InvalidEpsilon)
    }
}
