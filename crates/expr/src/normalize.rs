use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Malformed};

/// The exponentiation operator understood by the compiler.
pub const POW_TOKEN: &str = "**";

/// A named function followed by whitespace and a single bare token.
///
/// Only the adjacent token is captured, so `sin x + 1` becomes `sin(x) + 1`.
static BARE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    // Known-good pattern, unwrap is safe
    Regex::new(r"\b(ln|log|sin|cos|tan|sqrt|abs|exp)\s+([A-Za-z0-9_.]+)").unwrap()
});

/// Rewrites an equation into the canonical expression `f(x)`.
///
/// The equation holds exactly where the returned expression is zero:
///
/// - `lhs = 0` becomes `lhs`
/// - `lhs = rhs` becomes `lhs - (rhs)`
/// - a formula without `=` is taken as-is
///
/// Afterwards every `^` is replaced by [`POW_TOKEN`] and bare calls such as
/// `ln x` gain parentheses (`ln(x)`).
///
/// # Errors
///
/// Returns [`Error::MalformedEquation`] if the formula is empty, has an empty
/// side, or contains more than one `=`.
pub fn normalize(formula: &str) -> Result<String, Error> {
    let parts: Vec<&str> = formula.split('=').collect();

    let canonical = match parts.as_slice() {
        [expr] => {
            let expr = expr.trim();
            if expr.is_empty() {
                return Err(Malformed::Empty.into());
            }
            expr.to_owned()
        }
        [left, right] => {
            let (left, right) = (left.trim(), right.trim());
            if left.is_empty() && right.is_empty() {
                return Err(Malformed::Empty.into());
            }
            if left.is_empty() {
                return Err(Malformed::EmptyLeft.into());
            }
            if right.is_empty() {
                return Err(Malformed::EmptyRight.into());
            }
            if right == "0" {
                left.to_owned()
            } else {
                format!("{left} - ({right})")
            }
        }
        _ => return Err(Malformed::MultipleEquals(parts.len() - 1).into()),
    };

    let canonical = canonical.replace('^', POW_TOKEN);
    Ok(BARE_CALL.replace_all(&canonical, "${1}(${2})").into_owned())
}
