//! Number to text.

use super::NAN_TOKEN;

/// Positional notation is used while the decimal point sits within this many
/// digits of the start; beyond it the exponent form takes over.
const MAX_POSITIONAL_EXPONENT: i32 = 21;
const MIN_POSITIONAL_EXPONENT: i32 = -6;

/// Render a number as the shortest decimal text that reads back as the same
/// value.
///
/// Integral values print without a fractional part (`6`, not `6.0`),
/// negative zero keeps its sign (`-0`), and very large or very small
/// magnitudes switch to exponent form (`1e+21`, `1e-7`).
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if value.is_infinite() {
        let token = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return token.to_string();
    }
    if value == 0.0 {
        let token = if value.is_sign_negative() { "-0" } else { "0" };
        return token.to_string();
    }

    let (digits, point) = shortest_digits(value.abs());
    let body = layout(&digits, point);
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Split a finite, positive value into its significant digits and the
/// position of the decimal point relative to the first digit.
///
/// `{:e}` already yields the shortest round-trip mantissa, e.g. `1.25e-3`.
fn shortest_digits(value: f64) -> (String, i32) {
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent + 1)
}

fn layout(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;

    if count <= point && point <= MAX_POSITIONAL_EXPONENT {
        // 1500 -> "15" padded with zeros
        let zeros = "0".repeat((point - count) as usize);
        return format!("{digits}{zeros}");
    }

    if 0 < point && point <= MAX_POSITIONAL_EXPONENT {
        let (int, frac) = digits.split_at(point as usize);
        return format!("{int}.{frac}");
    }

    if MIN_POSITIONAL_EXPONENT < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        return format!("0.{zeros}{digits}");
    }

    let exponent = point - 1;
    let sign = if exponent < 0 { '-' } else { '+' };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{sign}{}", exponent.abs())
    } else {
        format!("{lead}.{rest}e{sign}{}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(render(6.0), "6");
        assert_eq!(render(-5.0), "-5");
        assert_eq!(render(1500.0), "1500");
        assert_eq!(render(1e20), "100000000000000000000");
        assert_eq!(render(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn zeroes() {
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-0.0), "-0");
    }

    #[test]
    fn fractions() {
        assert_eq!(render(0.5), "0.5");
        assert_eq!(render(-1.25), "-1.25");
        assert_eq!(render(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(render(0.000001), "0.000001");
        assert_eq!(render(123.456), "123.456");
    }

    #[test]
    fn exponent_form() {
        assert_eq!(render(1e21), "1e+21");
        assert_eq!(render(1.5e300), "1.5e+300");
        assert_eq!(render(1e-7), "1e-7");
        assert_eq!(render(-2.5e-8), "-2.5e-8");
        assert_eq!(render(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(render(5e-324), "5e-324");
    }

    #[test]
    fn non_finite() {
        assert_eq!(render(f64::NAN), "NaN");
        assert_eq!(render(f64::INFINITY), "Infinity");
        assert_eq!(render(f64::NEG_INFINITY), "-Infinity");
    }
}
