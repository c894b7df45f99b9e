use thiserror::Error;

/// Errors that can occur while turning a formula into a compiled expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed equation: {0}")]
    MalformedEquation(#[from] Malformed),

    #[error("syntax error in '{expr}': {reason}")]
    Syntax { expr: String, reason: String },
}

impl Error {
    pub(crate) fn syntax(expr: &str, reason: impl Into<String>) -> Self {
        Self::Syntax {
            expr: expr.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Why a formula could not be split into a single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("formula is empty")]
    Empty,

    #[error("formula contains {0} '=' signs, at most one is allowed")]
    MultipleEquals(usize),

    #[error("left side of the equation is empty")]
    EmptyLeft,

    #[error("right side of the equation is empty")]
    EmptyRight,
}
