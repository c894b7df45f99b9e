//! Equation normalization and compiled expressions for Rootline.
//!
//! A user-supplied equation goes through two stages before a solver can use
//! it:
//!
//! 1. [`normalize`] rewrites the equation text into a canonical expression
//!    `f(x)` whose zeros are the solutions (`x^2 = 2` becomes `x**2 - (2)`).
//! 2. [`CompiledExpression::compile`] parses the canonical string and binds
//!    it to a fixed environment of one variable (`x`), two constants (`pi`,
//!    `e`), and eight functions (see [`Builtin`]).
//!
//! [`parse_formula`] runs both stages.
//!
//! # Bare function calls
//!
//! The normalizer accepts `ln x` as shorthand for `ln(x)`. Only the adjacent
//! token is taken as the argument, so `sin x + 1` means `sin(x) + 1` and
//! `log x^2` means `log(x)**2`. Use parentheses for anything longer.

mod builtin;
mod compiled;
mod error;
mod expr;
mod normalize;
mod parse;

pub use builtin::{Builtin, Constant, VARIABLE};
pub use compiled::CompiledExpression;
pub use error::{Error, Malformed};
pub use normalize::{POW_TOKEN, normalize};

/// Normalizes an equation and compiles the resulting expression.
///
/// # Errors
///
/// Returns [`Error::MalformedEquation`] if the equation cannot be reduced to
/// a single expression, or [`Error::Syntax`] if the expression does not
/// compile.
pub fn parse_formula(formula: &str) -> Result<CompiledExpression, Error> {
    let canonical = normalize(formula)?;
    tracing::debug!(formula, canonical = %canonical, "normalized formula");
    CompiledExpression::compile(&canonical)
}
