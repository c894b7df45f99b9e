use std::convert::Infallible;

use rootline_core::{Evaluation, Function, NonFinite, evaluate};

use crate::Error;

/// Evaluates `function` at `x`, insisting on a finite value.
///
/// NaN and infinite values are turned into an error by `non_finite`, so each
/// solver can report them with its own variant.
pub(crate) fn finite_at<F, N>(function: &F, x: f64, non_finite: N) -> Result<f64, Error>
where
    F: Function,
    N: FnOnce(NonFinite) -> Error,
{
    match evaluate(function, x) {
        Evaluation::Finite(value) => Ok(value),
        Evaluation::NotANumber => Err(non_finite(NonFinite::NotANumber)),
        Evaluation::Infinite => Err(non_finite(NonFinite::Infinite)),
        Evaluation::Failed(error) => Err(Error::Function {
            x,
            source: Box::new(error),
        }),
    }
}

/// Returns the non-finite tag of a value computed by a solver, if any.
pub(crate) fn non_finite(value: f64) -> Option<NonFinite> {
    Evaluation::<Infallible>::classify(value).non_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_core::from_fn;

    fn tag(kind: NonFinite) -> Error {
        Error::NonFiniteEvaluation { x: 0.0, kind }
    }

    #[test]
    fn passes_finite_values_through() {
        let f = from_fn(|x| x + 1.0);
        assert!(matches!(finite_at(&f, 1.0, tag), Ok(v) if v == 2.0));
    }

    #[test]
    fn maps_non_finite_values() {
        let f = from_fn(|x: f64| x.sqrt());
        assert!(matches!(
            finite_at(&f, -1.0, tag),
            Err(Error::NonFiniteEvaluation {
                kind: NonFinite::NotANumber,
                ..
            })
        ));

        let g = from_fn(|x: f64| 1.0 / x);
        assert!(matches!(
            finite_at(&g, 0.0, tag),
            Err(Error::NonFiniteEvaluation {
                kind: NonFinite::Infinite,
                ..
            })
        ));
    }

    #[test]
    fn tags_computed_values() {
        assert_eq!(non_finite(1.5), None);
        assert_eq!(non_finite(f64::NAN), Some(NonFinite::NotANumber));
        assert_eq!(non_finite(f64::NEG_INFINITY), Some(NonFinite::Infinite));
    }
}
