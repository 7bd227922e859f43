use std::num::ParseFloatError;

const EXPONENT_SEPARATOR: char = 'E';

/// Compresses a magnitude into a short decimal string.
///
/// Values of 10 or more are scaled down by powers of ten until the mantissa
/// is below 10, and the exponent is appended after an `E`. The mantissa keeps
/// three decimal places. Negative numbers never enter the scaling loop, and are
/// written out as-is, without any rounding. Infinities and NaN come out as
/// `inf`, `-inf` and `NaN`.
pub fn encode(x: f64) -> String {
    let mut mantissa = x;
    let mut exponent = 0;
    while mantissa.is_finite() && mantissa >= 10.0 {
        mantissa *= 0.1;
        exponent += 1;
    }

    // Only magnitudes get truncated; negatives have to survive a round trip
    if mantissa >= 0.0 {
        mantissa = round_to_thousandths(mantissa);
    }

    let mut text = format_decimal(mantissa);
    if exponent > 0 {
        text.push(EXPONENT_SEPARATOR);
        text.push_str(&exponent.to_string());
    }
    text
}

/// Inverse of [`encode`]. Also accepts any plain decimal number.
pub fn decode(s: &str) -> Result<f64, ParseFloatError> {
    match s.split_once(EXPONENT_SEPARATOR) {
        Some((mantissa, exponent)) => {
            let mantissa: f64 = mantissa.parse()?;
            let exponent: f64 = exponent.parse()?;
            Ok(mantissa * 10.0_f64.powf(exponent))
        }
        None => s.parse(),
    }
}

fn round_to_thousandths(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

// Rust prints whole floats without a decimal point; we always want one, so
// that the output reads as a real number.
fn format_decimal(x: f64) -> String {
    let text = x.to_string();
    if x.is_finite() && !text.contains('.') {
        text + ".0"
    } else {
        text
    }
}
