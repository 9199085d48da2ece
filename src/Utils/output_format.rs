use std::time::Duration;

/// Significant digits of the integral value on the result line
pub const RESULT_PRECISION: usize = 15;
/// Digits after the decimal point of the elapsed seconds
pub const ELAPSED_DECIMALS: usize = 6;

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Shortest of fixed/scientific notation with `precision` significant digits and trailing zeros removed,
/// the way printf's %g does it: scientific when the decimal exponent is below -4 or not below the precision.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    // exponent after rounding to `precision` digits
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        strip_trailing_zeros(&fixed).to_string()
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.*}", ELAPSED_DECIMALS, elapsed.as_secs_f64())
}

/// "<result> <elapsed_seconds>"
pub fn format_result_line(result: f32, elapsed: Duration) -> String {
    format!(
        "{} {}",
        format_general(result as f64, RESULT_PRECISION),
        format_elapsed(elapsed)
    )
}
