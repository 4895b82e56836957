use crate::error::{ErrorKind, EvalError};
use crate::eval::{evaluate, reduce};
use crate::lexer::Operator;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10, "{} != {}", $lhs, $rhs)
    };
}

#[test]
fn eval_addition() {
    assert_eq!(evaluate("3 4 +").unwrap(), 7.0);
}

#[test]
fn eval_nested() {
    assert_eq!(evaluate("5 1 2 + 4 * + 3 -").unwrap(), 14.0);
}

#[test]
fn eval_left_operand_pops_second() {
    assert_eq!(evaluate("5 2 -").unwrap(), 3.0);
    assert_eq!(evaluate("8 2 /").unwrap(), 4.0);
    assert_eq!(evaluate("7 3 %").unwrap(), 1.0);
}

#[test]
fn eval_single_operand() {
    assert_eq!(evaluate("42").unwrap(), 42.0);
    assert_eq!(evaluate("  -2.5  ").unwrap(), -2.5);
}

#[test]
fn eval_decimals() {
    fuzzy_eq!(evaluate("0.1 0.2 +").unwrap(), 0.3);
    fuzzy_eq!(evaluate("1 3 /").unwrap(), 1.0 / 3.0);
    fuzzy_eq!(evaluate("2.5 -4 *").unwrap(), -10.0);
}

#[test]
fn eval_remainder_follows_dividend_sign() {
    assert_eq!(evaluate("-7 3 %").unwrap(), -1.0);
    assert_eq!(evaluate("7 -3 %").unwrap(), 1.0);
    fuzzy_eq!(evaluate("5.5 2 %").unwrap(), 1.5);
}

#[test]
fn eval_overflow_is_not_an_error() {
    assert_eq!(evaluate("1e308 10 *").unwrap(), f64::INFINITY);
}

#[test]
fn eval_division_by_zero() {
    assert_eq!(
        evaluate("10 0 /").unwrap_err(),
        EvalError::DivisionByZero { left: 10.0, right: 0.0 }
    );
    assert_eq!(
        evaluate("1 -0 /").unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
}

#[test]
fn eval_remainder_by_zero() {
    let err = evaluate("10 0 %").unwrap_err();
    assert_eq!(err, EvalError::RemainderByZero { left: 10.0, right: 0.0 });
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn eval_division_by_computed_zero() {
    assert_eq!(
        evaluate("4 2 2 - /").unwrap_err(),
        EvalError::DivisionByZero { left: 4.0, right: 0.0 }
    );
}

#[test]
fn eval_insufficient_operands() {
    assert_eq!(
        evaluate("3 +").unwrap_err(),
        EvalError::InsufficientOperands(Operator::Add)
    );
    assert_eq!(
        evaluate("*").unwrap_err(),
        EvalError::InsufficientOperands(Operator::Multiply)
    );
}

#[test]
fn eval_too_many_operands() {
    let err = evaluate("3 4").unwrap_err();
    assert_eq!(err, EvalError::TooManyOperands(2));
    assert!(err.to_string().contains('2'));
    assert_eq!(evaluate("1 2 3 +").unwrap_err(), EvalError::TooManyOperands(2));
}

#[test]
fn eval_empty() {
    assert_eq!(evaluate("").unwrap_err(), EvalError::EmptyExpression);
    assert_eq!(evaluate("   \t").unwrap_err(), EvalError::EmptyExpression);
}

#[test]
fn eval_invalid_token() {
    let err = evaluate("3 4 x").unwrap_err();
    assert_eq!(err, EvalError::InvalidToken("x".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidOperator);
}

#[test]
fn eval_stops_at_first_failure() {
    // the invalid token comes before the division by zero
    assert_eq!(
        evaluate("1 y 0 /").unwrap_err(),
        EvalError::InvalidToken("y".to_string())
    );
    assert_eq!(
        evaluate("1 0 / z").unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
}

#[test]
fn eval_malformed_number() {
    let err = evaluate("1.2.3 4 +").unwrap_err();
    assert_eq!(err, EvalError::MalformedNumber("1.2.3".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
}

#[test]
fn eval_is_idempotent() {
    for input in ["3 4 +", "10 0 /", "3 +", "3 4 x", ""] {
        let first = evaluate(input);
        for _ in 0..3 {
            assert_eq!(evaluate(input), first, "input: {input}");
        }
    }
}

#[test]
fn reduce_accepts_split_tokens() {
    let tokens = vec!["2", "3", "*", "4", "+"];
    assert_eq!(reduce(tokens.iter().copied()).unwrap(), 10.0);
}

#[test]
fn reduce_empty_sequence_has_no_result() {
    assert_eq!(reduce(Vec::<&str>::new()).unwrap_err(), EvalError::NoResult);
}
