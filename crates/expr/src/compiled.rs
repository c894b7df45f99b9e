use std::{convert::Infallible, fmt};

use rootline_core::{Evaluation, Function, evaluate};

use crate::{Error, expr::Expr, parse::parse};

/// A canonical expression compiled against the fixed environment.
///
/// The environment binds the variable `x`, the constants `pi` and `e`, and
/// the functions `ln, log, sin, cos, tan, sqrt, abs, exp`. A compiled
/// expression is immutable and can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source: String,
    root: Expr,
}

impl CompiledExpression {
    /// Compiles a canonical expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] for malformed input, unbalanced parentheses,
    /// nesting deeper than the parser accepts, unknown identifiers or
    /// functions, and calls with the wrong number of arguments.
    pub fn compile(source: &str) -> Result<Self, Error> {
        let node = parse(source).map_err(|reason| Error::syntax(source, reason))?;
        let root = Expr::bind(node).map_err(|reason| Error::syntax(source, reason))?;

        Ok(Self {
            source: source.to_owned(),
            root,
        })
    }

    /// Returns the canonical source this expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the raw value at `x`, which may be NaN or infinite.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Evaluates at `x` and classifies the result.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> Evaluation<Infallible> {
        evaluate(self, x)
    }
}

impl Function for CompiledExpression {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.eval(x))
    }
}

impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
