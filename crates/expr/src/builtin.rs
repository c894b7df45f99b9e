use std::{f64::consts, fmt};

/// The only free variable an expression may reference.
pub const VARIABLE: &str = "x";

/// Named constants available to every expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// Looks up a constant by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Returns the numeric value of the constant.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

/// Single-argument functions available to every expression.
///
/// Each maps a real argument to a real value. Outside its domain a function
/// returns NaN (`sqrt(-1)`, `ln(-1)`) or an infinity (`ln(0)`), which the
/// evaluator classifies instead of reporting as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Exp,
}

impl Builtin {
    /// All builtins, in the order they are documented.
    pub const ALL: [Self; 8] = [
        Self::Ln,
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Abs,
        Self::Exp,
    ];

    /// Looks up a builtin by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Returns the name used to call the builtin.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Exp => "exp",
        }
    }

    /// Applies the builtin to `arg`.
    #[must_use]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Ln => arg.ln(),
            Self::Log => arg.log10(),
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Sqrt => arg.sqrt(),
            Self::Abs => arg.abs(),
            Self::Exp => arg.exp(),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("asin"), None);
        assert_eq!(Builtin::from_name("Sin"), None);
    }

    #[test]
    fn logarithms() {
        assert_relative_eq!(Builtin::Ln.apply(consts::E), 1.0);
        assert_relative_eq!(Builtin::Log.apply(1000.0), 3.0);
        assert!(Builtin::Ln.apply(-1.0).is_nan());
        assert!(Builtin::Log.apply(0.0).is_infinite());
    }

    #[test]
    fn sqrt_is_undefined_for_negative_arguments() {
        assert_relative_eq!(Builtin::Sqrt.apply(16.0), 4.0);
        assert!(Builtin::Sqrt.apply(-4.0).is_nan());
    }

    #[test]
    fn constants() {
        assert_eq!(Constant::from_name("pi"), Some(Constant::Pi));
        assert_eq!(Constant::from_name("PI"), None);
        assert_relative_eq!(Constant::E.value(), consts::E);
    }
}
