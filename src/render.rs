// Number rendering for conversion results

/// Largest magnitude still printed in positional form (2^53)
const POSITIONAL_MAX: f64 = 9_007_199_254_740_992.0;
/// Smallest non-zero magnitude printed in positional form
const POSITIONAL_MIN: f64 = 1e-4;

/// Default rendering of a double.
///
/// Shortest text that parses back to the same value. Integral values keep a
/// fractional part ("1.0"), very large or very small magnitudes switch to
/// exponent form with a signed two-digit exponent ("1e-05", "1e+16").
pub fn render_default(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude > POSITIONAL_MAX || magnitude < POSITIONAL_MIN {
        return render_exponent(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Fixed two-decimal rendering used by the time converter
pub fn render_two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// Input echo for the form summary: integral values drop the fraction
pub fn render_plain(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= POSITIONAL_MAX {
        format!("{:.0}", value)
    } else {
        render_default(value)
    }
}

fn render_exponent(value: f64) -> String {
    // `{:e}` gives "1.5e-7"; reformat the exponent as "-07"
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_integral() {
        assert_eq!(render_default(1.0), "1.0");
        assert_eq!(render_default(32.0), "32.0");
        assert_eq!(render_default(-40.0), "-40.0");
        assert_eq!(render_default(0.0), "0.0");
        assert_eq!(render_default(1_000_000.0), "1000000.0");
    }

    #[test]
    fn test_render_default_fractional() {
        assert_eq!(render_default(3.28084), "3.28084");
        assert_eq!(render_default(0.264172), "0.264172");
        assert_eq!(render_default(0.0001), "0.0001");
        assert_eq!(render_default(-2.5), "-2.5");
    }

    #[test]
    fn test_render_default_exponent() {
        assert_eq!(render_default(0.00001), "1e-05");
        assert_eq!(render_default(1e16), "1e+16");
        assert_eq!(render_default(-2.5e-7), "-2.5e-07");
        assert_eq!(render_default(1.5e100), "1.5e+100");
    }

    #[test]
    fn test_render_default_non_finite() {
        assert_eq!(render_default(f64::NAN), "nan");
        assert_eq!(render_default(f64::INFINITY), "inf");
        assert_eq!(render_default(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_render_two_decimals() {
        assert_eq!(render_two_decimals(1.0), "1.00");
        assert_eq!(render_two_decimals(365.25), "365.25");
        assert_eq!(render_two_decimals(1.0 / 3.0), "0.33");
        assert_eq!(render_two_decimals(1234567.0), "1234567.00");
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(1.0), "1");
        assert_eq!(render_plain(-3.0), "-3");
        assert_eq!(render_plain(2.5), "2.5");
    }
}
