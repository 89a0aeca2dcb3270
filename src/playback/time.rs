/// Format a position in seconds as `M:SS`.
///
/// Non-finite (unknown) and negative values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Same as [`format_time`] for a duration that may not be known yet.
pub fn format_optional_time(seconds: Option<f64>) -> String {
    format_time(seconds.unwrap_or(f64::NAN))
}
