//! Numeric input coercion.

/// Coerce free-text numeric input into an amount.
///
/// Anything that is not a finite number becomes `0.0`. Negative values pass
/// through untouched.
pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
