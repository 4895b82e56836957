//! Display formatting for evaluation results

/// Format a result for the terminal.
///
/// Integral values print without a fractional part; anything else is shown
/// with one decimal digit, ties rounded away from zero (`0.25` -> `0.3`).
pub fn format_result(n: f64) -> String {
    if !n.is_finite() {
        format!("{}", n)
    } else if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        one_decimal(n)
    }
}

/// Round the shortest decimal form of `n` to one fractional digit
fn one_decimal(n: f64) -> String {
    let digits = format!("{}", n.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut frac = frac_part.chars();
    let tenths = frac.next().unwrap_or('0');
    let round_up = frac.next().map_or(false, |d| d >= '5');

    let mut out: Vec<char> = int_part.chars().chain(std::iter::once(tenths)).collect();
    if round_up {
        increment(&mut out);
    }

    let tenths = out.pop().unwrap_or('0');
    let sign = if n < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, out.into_iter().collect::<String>(), tenths)
}

/// Add one to a decimal digit string, carrying to the left
fn increment(digits: &mut Vec<char>) {
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}
