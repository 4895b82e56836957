use crate::error::EvalError;
use crate::lexer::Operator;
use std::fmt;

/// Operand stack for a single evaluation
#[derive(Debug, Default)]
pub(crate) struct OperandStack(Vec<f64>);

impl OperandStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    /// Pop the two operands of a binary operator as `(left, right)`.
    ///
    /// The most recently pushed value is the right operand. The stack is left
    /// untouched when fewer than two values are available.
    pub(crate) fn pop_operands(&mut self, op: Operator) -> Result<(f64, f64), EvalError> {
        if self.0.len() < 2 {
            return Err(EvalError::InsufficientOperands(op));
        }
        let operands = self.0.split_off(self.0.len() - 2);
        Ok((operands[0], operands[1]))
    }

    pub(crate) fn depth(&self) -> usize {
        self.0.len()
    }

    /// Consume the stack, which must hold exactly the final result
    pub(crate) fn into_result(mut self) -> Result<f64, EvalError> {
        match self.depth() {
            0 => Err(EvalError::NoResult),
            1 => self.0.pop().ok_or(EvalError::NoResult),
            depth => Err(EvalError::TooManyOperands(depth)),
        }
    }
}

impl fmt::Display for OperandStack {
    /// Show the top five values, bottom to top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(empty)");
        }
        let skip = self.0.len().saturating_sub(5);
        if skip > 0 {
            f.write_str("... ")?;
        }
        let items: Vec<String> = self.0[skip..].iter().map(|v| v.to_string()).collect();
        f.write_str(&items.join(" "))
    }
}
