//! Stack-based reduction of postfix expressions
//!
//! Tokens are consumed strictly left to right. Numbers push themselves onto
//! the operand stack; operators pop two operands and push their result. The
//! first failure ends the evaluation, and the operand stack never outlives the
//! call that created it.

mod stack;
#[cfg(test)]
mod tests;

use crate::error::EvalError;
use crate::lexer::{classify, tokenize, Operator, Token};
use log::{debug, trace};
use stack::OperandStack;

/// Evaluate a postfix expression such as `"5 1 2 + 4 * + 3 -"`.
///
/// # Example
///
/// ```rust
/// use rpncalc::evaluate;
///
/// assert_eq!(evaluate("3 4 +").unwrap(), 7.0);
/// assert!(evaluate("10 0 /").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    debug!("evaluating {:?}", expression);
    let result = tokenize(expression).and_then(reduce);
    if let Err(ref e) = result {
        debug!("evaluation failed ({}): {}", e.kind(), e);
    }
    result
}

/// Reduce an already-split token sequence to a single value
pub fn reduce<'a, I>(tokens: I) -> Result<f64, EvalError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stack = OperandStack::new();

    for word in tokens {
        match classify(word)? {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                let (left, right) = stack.pop_operands(op)?;
                stack.push(apply(op, left, right)?);
            }
            Token::Invalid(word) => return Err(EvalError::InvalidToken(word.to_string())),
        }
        trace!(">>> {} │ {}", word, stack);
    }

    stack.into_result()
}

/// Apply a binary operator.
///
/// `%` is the truncating remainder: the sign of the result follows `left`.
fn apply(op: Operator, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { left, right });
            }
            Ok(left / right)
        }
        Operator::Remainder => {
            if right == 0.0 {
                return Err(EvalError::RemainderByZero { left, right });
            }
            Ok(left % right)
        }
    }
}
