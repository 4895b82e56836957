//! Common test utilities for rpncalc integration tests

pub use rpncalc::{evaluate, ErrorKind, EvalError};

/// Helper to evaluate input and return the formatted result
pub fn eval(input: &str) -> Result<String, String> {
    evaluate(input)
        .map(rpncalc::format_result)
        .map_err(|e| e.to_string())
}

/// Helper to evaluate input that must fail, returning the error kind
#[allow(dead_code)]
pub fn eval_kind(input: &str) -> ErrorKind {
    match evaluate(input) {
        Ok(value) => panic!("expected {:?} to fail, got {}", input, value),
        Err(e) => e.kind(),
    }
}
