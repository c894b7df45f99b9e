use rootline_core::{Function, evaluate};

/// Returns the default central-difference step, the cube root of machine
/// epsilon.
///
/// This step balances truncation error (which grows with `h²`) against
/// rounding error (which grows with `1/h`).
#[must_use]
pub fn default_step() -> f64 {
    f64::EPSILON.cbrt()
}

/// Estimates `f'(x)` with the central difference `(f(x+h) - f(x-h)) / 2h`.
///
/// Non-finite or failed evaluations are not reported; they make the estimate
/// NaN, and callers must check the result with [`f64::is_finite`].
pub fn central_difference<F>(function: &F, x: f64, h: f64) -> f64
where
    F: Function + ?Sized,
{
    let forward = evaluate(function, x + h).finite().unwrap_or(f64::NAN);
    let backward = evaluate(function, x - h).finite().unwrap_or(f64::NAN);
    (forward - backward) / (2.0 * h)
}
