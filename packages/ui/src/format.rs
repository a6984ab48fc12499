//! Display formatting for numbers and timestamps.

/// Two-decimal rendering of the exact binary value, the way JavaScript's
/// `toFixed(2)` does it: `12.345` is stored slightly above 12.345 and shows
/// `"12.35"`, while `1.005` is stored slightly below and shows `"1.00"`.
/// Exact ties (odd multiples of 1/8) round away from zero.
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    if is_exact_tie(value) {
        return format!("{:.2}", value + 0.005f64.copysign(value));
    }
    format!("{value:.2}")
}

/// Whether the third decimal of `value` is exactly 5 with nothing after it.
fn is_exact_tie(value: f64) -> bool {
    let eighths = value.abs() * 8.0;
    eighths.fract() == 0.0 && eighths < 2f64.powi(52) && eighths % 2.0 == 1.0
}

/// Calendar date of an ISO-8601 timestamp (`2024-05-01T10:00:00Z` →
/// `2024-05-01`). Unparseable input is shown as-is.
pub fn upload_date(uploaded_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(uploaded_at) {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => uploaded_at.to_string(),
    }
}
