//! rpncalc - postfix (Reverse Polish) notation calculator
//!
//! # Overview
//!
//! An expression is a whitespace-separated sequence of numbers and binary
//! operators. Operators follow their operands, so no precedence rules or
//! parentheses are needed.
//!
//! ```text
//! 3 4 +                  # 7
//! 5 1 2 + 4 * + 3 -      # 5 + (1 + 2) * 4 - 3 = 14
//! 5 2 -                  # 3 (the most recent value is the right operand)
//! ```
//!
//! Operators: `+`, `-`, `*`, `/`, `%`. Operands are integers or decimals with
//! an optional sign (`5`, `-2.5`, `100`).
//!
//! # Example
//!
//! ```rust
//! use rpncalc::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("5 1 2 + 4 * + 3 -").unwrap(), 14.0);
//!
//! let err = evaluate("3 +").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidExpression);
//! ```

pub mod display;
pub mod error;
pub mod eval;
pub mod lexer;

// Re-export commonly used items
pub use display::format_result;
pub use error::{ErrorKind, EvalError};
pub use eval::{evaluate, reduce};
pub use lexer::{classify, tokenize, Operator, Token, Tokens, OPERATORS};
