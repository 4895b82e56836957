//! Tokenization and token classification
//!
//! An expression is a run of whitespace-separated tokens. Tokens are only
//! borrowed slices of the input; classification into numbers and operators
//! happens on demand and is never cached.

use crate::error::EvalError;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,       // +
    Subtract,  // -
    Multiply,  // *
    Divide,    // /
    Remainder, // %
}

/// Every operator the evaluator recognizes.
pub const OPERATORS: [Operator; 5] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Remainder,
];

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
        }
    }

    /// Look up an operator by its exact symbol
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OPERATORS.iter().copied().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A classified token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// A fully parsed numeric operand
    Number(f64),
    /// A member of [`OPERATORS`]
    Operator(Operator),
    /// Neither a number nor an operator
    Invalid(&'a str),
}

/// Lazy sequence of the whitespace-separated tokens of an expression.
///
/// Cloning restarts iteration from the clone point.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (rest, token) = word(self.rest).ok()?;
        self.rest = rest;
        Some(token)
    }
}

/// Parse one token, skipping any whitespace in front of it
fn word(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(char::is_whitespace),
        take_while1(|c: char| !c.is_whitespace()),
    )(input)
}

/// Parse a decimal literal: optional sign, integer or decimal form, optional exponent
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Does the token start like a number (after at most one sign)?
fn looks_numeric(token: &str) -> bool {
    let unsigned = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    let mut chars = unsigned.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().map_or(false, |c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Split an expression into tokens.
///
/// Fails if the expression is empty or only whitespace.
pub fn tokenize(expression: &str) -> Result<Tokens<'_>, EvalError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    Ok(Tokens { rest: trimmed })
}

/// Classify a single token.
///
/// A token that starts like a number but does not parse completely is a
/// [`EvalError::MalformedNumber`], not an [`Token::Invalid`].
pub fn classify(token: &str) -> Result<Token<'_>, EvalError> {
    if let Some(op) = Operator::from_symbol(token) {
        return Ok(Token::Operator(op));
    }

    if let Ok((_, literal)) = all_consuming(number)(token) {
        return literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::MalformedNumber(token.to_string()));
    }

    if looks_numeric(token) {
        return Err(EvalError::MalformedNumber(token.to_string()));
    }

    Ok(Token::Invalid(token))
}
