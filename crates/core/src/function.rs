use std::convert::Infallible;

/// A real-valued function of a single real variable.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the function at `x`.
    ///
    /// Returning `Ok` with a NaN or infinite value is allowed; callers are
    /// expected to classify the value through [`evaluate`](crate::evaluate).
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be computed at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Wraps a closure as an infallible [`Function`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn { f }
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }
}
