//! Error taxonomy for postfix evaluation
//!
//! Every failure the evaluator can report is an [`EvalError`] variant. Callers
//! that only care about the broad category match on [`EvalError::kind`].

use crate::lexer::Operator;
use std::fmt;
use thiserror::Error;

/// The three categories an evaluation failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural problems: empty input, bad numbers, operand imbalance
    InvalidExpression,
    /// A token that is neither a number nor a known operator
    InvalidOperator,
    /// Zero right operand for `/` or `%`
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidExpression => "invalid expression",
            ErrorKind::InvalidOperator => "invalid operator",
            ErrorKind::DivisionByZero => "division by zero",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("expression must not be null or empty")]
    EmptyExpression,
    #[error("invalid numeric format: {0}")]
    MalformedNumber(String),
    #[error("insufficient operands for operator '{0}'")]
    InsufficientOperands(Operator),
    #[error("no result produced; expression empty or malformed")]
    NoResult,
    #[error("too many operands remain on the stack / missing operator (stack depth: {0})")]
    TooManyOperands(usize),
    #[error("invalid token in expression: {0}")]
    InvalidToken(String),
    #[error("cannot divide by zero: {left} / {right}")]
    DivisionByZero { left: f64, right: f64 },
    #[error("cannot take remainder by zero: {left} % {right}")]
    RemainderByZero { left: f64, right: f64 },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::EmptyExpression
            | EvalError::MalformedNumber(_)
            | EvalError::InsufficientOperands(_)
            | EvalError::NoResult
            | EvalError::TooManyOperands(_) => ErrorKind::InvalidExpression,
            EvalError::InvalidToken(_) => ErrorKind::InvalidOperator,
            EvalError::DivisionByZero { .. } | EvalError::RemainderByZero { .. } => {
                ErrorKind::DivisionByZero
            }
        }
    }
}
