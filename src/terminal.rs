use rpncalc::{evaluate, format_result, EvalError};

/// Evaluate a single line, printing the result to stdout or the error to stderr
pub(crate) fn execute_line(input: &str) -> Result<f64, EvalError> {
    match evaluate(input) {
        Ok(value) => {
            println!("{}", format_result(value));
            Ok(value)
        }
        Err(e) => {
            eprintln!("Error: {}: {}", e.kind(), e);
            Err(e)
        }
    }
}
