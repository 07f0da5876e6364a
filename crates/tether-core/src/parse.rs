//! Parse-or-default number parsing for form fields.
//!
//! Input that does not parse becomes zero. This is the only policy: callers
//! never see a parse error.

/// Parses an integer field; anything unparseable is 0.
///
/// Surrounding whitespace is trimmed first, so `" 4"` is 4 rather than 0.
pub fn int_or_default(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

/// Parses a floating point field; anything unparseable or non-finite is 0.0.
///
/// `NaN` and infinities parse in Rust but cannot be carried in JSON, so they
/// count as unparseable here.
pub fn float_or_default(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Renders a float the way a user typed it: `7` rather than `7.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
