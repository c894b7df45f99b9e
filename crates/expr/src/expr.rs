use crate::{
    builtin::{Builtin, Constant, VARIABLE},
    parse::{BinaryOp, Node},
};

/// Syntax tree with every name resolved against the fixed environment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number(f64),
    Variable,
    Constant(Constant),
    Neg(Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Chain(Box<Expr>, Vec<(BinaryOp, Expr)>),
    Call(Builtin, Box<Expr>),
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

impl Expr {
    /// Resolves names in a parsed tree.
    ///
    /// Returns a short description of the first unknown name or bad call.
    pub(crate) fn bind(node: Node) -> Result<Self, String> {
        let expr = match node {
            Node::Number(value) => Expr::Number(value),
            Node::Name(name) if name == VARIABLE => Expr::Variable,
            Node::Name(name) => match Constant::from_name(&name) {
                Some(constant) => Expr::Constant(constant),
                None => return Err(format!("unknown identifier '{name}'")),
            },
            Node::Neg(inner) => Expr::Neg(Box::new(Self::bind(*inner)?)),
            Node::Pow(base, exponent) => Expr::Pow(
                Box::new(Self::bind(*base)?),
                Box::new(Self::bind(*exponent)?),
            ),
            Node::Chain(first, rest) => {
                let rest = rest
                    .into_iter()
                    .map(|(op, node)| Self::bind(node).map(|expr| (op, expr)))
                    .collect::<Result<Vec<_>, String>>()?;
                Expr::Chain(Box::new(Self::bind(*first)?), rest)
            }
            Node::Call(name, args) => {
                let Some(builtin) = Builtin::from_name(&name) else {
                    return Err(format!("unknown function '{name}'"));
                };
                let [arg]: [Node; 1] = args.try_into().map_err(|args: Vec<Node>| {
                    format!(
                        "function '{builtin}' takes 1 argument but {} were given",
                        args.len()
                    )
                })?;
                Expr::Call(builtin, Box::new(Self::bind(arg)?))
            }
        };
        Ok(expr)
    }

    /// Evaluates the tree with the variable bound to `x`.
    ///
    /// IEEE semantics apply throughout: undefined operations yield NaN and
    /// overflow yields an infinity.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Variable => x,
            Expr::Constant(constant) => constant.value(),
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Pow(base, exponent) => base.eval(x).powf(exponent.eval(x)),
            Expr::Chain(first, rest) => rest
                .iter()
                .fold(first.eval(x), |acc, (op, rhs)| op.apply(acc, rhs.eval(x))),
            Expr::Call(builtin, arg) => builtin.apply(arg.eval(x)),
        }
    }
}
