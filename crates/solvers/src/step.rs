/// A bisection step: the bracket before it is halved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketStep {
    pub a: f64,
    pub b: f64,
}

impl BracketStep {
    /// Returns the midpoint evaluated during this step.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns the bracket width `|b - a|`.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

/// A step of an iterative map from `x_prev` to `x_new`.
///
/// The auxiliary value is `f(x_prev)` for Newton and `|x_new - x_prev|` for
/// simple iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStep {
    pub x_prev: f64,
    pub x_new: f64,
    pub aux: f64,
}

impl IterationStep {
    /// Returns the distance moved during this step.
    #[must_use]
    pub fn delta(&self) -> f64 {
        (self.x_new - self.x_prev).abs()
    }
}
