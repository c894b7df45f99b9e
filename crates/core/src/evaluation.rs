use std::fmt;

use crate::Function;

/// The classified result of evaluating a [`Function`] at a point.
///
/// Every solver matches on this before touching a value, so an undefined or
/// overflowing evaluation can never leak into a comparison as a raw NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<E> {
    /// The function produced a finite value.
    Finite(f64),

    /// The function is undefined at the point (e.g. `ln(-1)`).
    NotANumber,

    /// The function overflowed to an infinite magnitude.
    Infinite,

    /// The function itself reported an error.
    Failed(E),
}

impl<E> Evaluation<E> {
    /// Classifies a raw value returned by a function.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value.is_nan() {
            Self::NotANumber
        } else if value.is_infinite() {
            Self::Infinite
        } else {
            Self::Finite(value)
        }
    }

    /// Returns the value if the evaluation is finite.
    #[must_use]
    pub fn finite(&self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the evaluation produced a finite value.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the non-finite tag, if the function returned a NaN or infinity.
    #[must_use]
    pub fn non_finite(&self) -> Option<NonFinite> {
        match self {
            Self::NotANumber => Some(NonFinite::NotANumber),
            Self::Infinite => Some(NonFinite::Infinite),
            Self::Finite(_) | Self::Failed(_) => None,
        }
    }
}

/// The kind of non-finite value an evaluation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    NotANumber,
    Infinite,
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => f.write_str("NaN"),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

/// Evaluates `function` at `x` and classifies the result.
pub fn evaluate<F>(function: &F, x: f64) -> Evaluation<F::Error>
where
    F: Function + ?Sized,
{
    match function.call(x) {
        Ok(value) => Evaluation::classify(value),
        Err(error) => Evaluation::Failed(error),
    }
}
