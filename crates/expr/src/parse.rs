//! Grammar for canonical expressions.
//!
//! ```text
//! expr  := term (("+" | "-") term)*
//! term  := unary (("*" | "/") unary)*
//! unary := ("-" | "+") unary | power
//! power := atom ("**" unary)?
//! atom  := number | name "(" args ")" | name | "(" expr ")"
//! ```
//!
//! Runs of `+ -` and `* /` are kept as flat [`Node::Chain`]s, so the depth
//! of the tree follows the nesting of the source, not its length. Nesting
//! (parentheses, call arguments, signs, and exponents) is capped at
//! [`MAX_DEPTH`] levels.
//!
//! Names are not resolved here; see [`Expr::bind`](crate::expr::Expr::bind).

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{map_res, not, opt, recognize, value},
    error::{Error, ErrorKind},
    multi::{many0, many0_count, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::normalize::POW_TOKEN;

/// Deepest nesting accepted by [`parse`].
pub(crate) const MAX_DEPTH: usize = 64;

/// Reason reported when [`MAX_DEPTH`] is exceeded.
pub(crate) const TOO_DEEP: &str = "expression nested too deeply";

/// Left-associative binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Syntax tree with unresolved names.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Name(String),
    Call(String, Vec<Node>),
    Neg(Box<Node>),
    Pow(Box<Node>, Box<Node>),
    /// `first op rhs op rhs ...`, applied left to right.
    Chain(Box<Node>, Vec<(BinaryOp, Node)>),
}

/// Parses a complete expression.
///
/// Returns a short description of the first problem on failure.
pub(crate) fn parse(input: &str) -> Result<Node, String> {
    match terminated(root, multispace0)(input) {
        Ok(("", node)) => Ok(node),
        Ok((rest, _)) => Err(unexpected(rest)),
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => Err(TOO_DEEP.to_owned()),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(unexpected(e.input)),
        Err(nom::Err::Incomplete(_)) => Err("incomplete expression".to_owned()),
    }
}

fn unexpected(rest: &str) -> String {
    let rest = rest.trim();
    if rest.is_empty() {
        "unexpected end of expression".to_owned()
    } else {
        format!("unexpected input at '{rest}'")
    }
}

fn ws<'a, O, P>(parser: P) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(multispace0, parser)
}

/// Runs `parser` one nesting level deeper, failing hard past [`MAX_DEPTH`].
fn nested<'a, P>(input: &'a str, depth: usize, parser: P) -> IResult<&'a str, Node>
where
    P: FnOnce(&'a str, usize) -> IResult<&'a str, Node>,
{
    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    parser(input, depth + 1)
}

fn root(input: &str) -> IResult<&str, Node> {
    expr(input, 0)
}

fn expr(input: &str, depth: usize) -> IResult<&str, Node> {
    chain(input, depth, additive, term)
}

fn term(input: &str, depth: usize) -> IResult<&str, Node> {
    chain(input, depth, multiplicative, unary)
}

fn additive(input: &str) -> IResult<&str, BinaryOp> {
    alt((
        value(BinaryOp::Add, char('+')),
        value(BinaryOp::Sub, char('-')),
    ))(input)
}

fn multiplicative(input: &str) -> IResult<&str, BinaryOp> {
    alt((
        value(BinaryOp::Mul, terminated(char('*'), not(char('*')))),
        value(BinaryOp::Div, char('/')),
    ))(input)
}

fn chain<'a>(
    input: &'a str,
    depth: usize,
    operator: fn(&'a str) -> IResult<&'a str, BinaryOp>,
    operand: fn(&'a str, usize) -> IResult<&'a str, Node>,
) -> IResult<&'a str, Node> {
    let (input, first) = operand(input, depth)?;
    let (input, rest) = many0(pair(ws(operator), |i| operand(i, depth)))(input)?;

    let node = if rest.is_empty() {
        first
    } else {
        Node::Chain(Box::new(first), rest)
    };
    Ok((input, node))
}

fn unary(input: &str, depth: usize) -> IResult<&str, Node> {
    let sign: IResult<&str, char> = ws(one_of("+-"))(input);
    let Ok((rest, sign)) = sign else {
        return power(input, depth);
    };

    let (rest, operand) = nested(rest, depth, unary)?;
    let node = if sign == '-' {
        Node::Neg(Box::new(operand))
    } else {
        operand
    };
    Ok((rest, node))
}

// Right associative: the exponent recurses through `unary`, so
// `2**3**2` is `2**(3**2)` and `x**-1` is accepted.
fn power(input: &str, depth: usize) -> IResult<&str, Node> {
    let (input, base) = atom(input, depth)?;
    let (input, exponent) =
        opt(preceded(ws(tag(POW_TOKEN)), |i| nested(i, depth, unary)))(input)?;

    let node = match exponent {
        Some(exponent) => Node::Pow(Box::new(base), Box::new(exponent)),
        None => base,
    };
    Ok((input, node))
}

fn atom(input: &str, depth: usize) -> IResult<&str, Node> {
    ws(alt((
        number,
        |i| call_or_name(i, depth),
        |i| parens(i, depth),
    )))(input)
}

fn parens(input: &str, depth: usize) -> IResult<&str, Node> {
    delimited(char('('), |i| nested(i, depth, expr), ws(char(')')))(input)
}

// Accepts `12`, `1.5`, `1.`, `.5`, with an optional exponent (`2e-3`).
fn number(input: &str) -> IResult<&str, Node> {
    map_res(
        recognize(pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        )),
        |text: &str| text.parse::<f64>().map(Node::Number),
    )(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        many0_count(satisfy(|c| c.is_ascii_alphanumeric() || c == '_')),
    ))(input)
}

fn call_or_name(input: &str, depth: usize) -> IResult<&str, Node> {
    let (input, name) = name(input)?;
    let (input, args) = opt(delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), |i| nested(i, depth, expr)),
        ws(char(')')),
    ))(input)?;

    let node = match args {
        Some(args) => Node::Call(name.to_owned(), args),
        None => Node::Name(name.to_owned()),
    };
    Ok((input, node))
}
