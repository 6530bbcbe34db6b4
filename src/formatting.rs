pub const DECIMAL_PLACES: usize = 5;

pub const ERROR_MARKER: &str = "Error";
pub const SYNTAX_ERROR_MARKER: &str = "Syntax Error";

/// Formats a value rounded to five decimal places, without trailing zeros.
///
/// Non-finite values never print as numbers; they become [`ERROR_MARKER`].
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.into();
    }

    let fixed = format!("{:.*}", DECIMAL_PLACES, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".into(),
        _ => trimmed.into(),
    }
}

/// The value [`format_number`] displays, so a stored answer matches what was shown.
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", DECIMAL_PLACES, value).parse().unwrap_or(value)
}
