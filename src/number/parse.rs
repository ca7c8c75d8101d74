//! Text to number.

/// Coerce a line of text to a number.
///
/// Surrounding whitespace and line separators are ignored. Accepted forms
/// are decimal literals (`3`, `-2.5`, `.5`, `1e3`), signed `Infinity`, and
/// unsigned `0x`/`0o`/`0b` radix literals. Everything else, the empty string included, is `NaN`.
pub fn coerce(text: &str) -> f64 {
    parse_literal(text.trim_matches(is_number_space)).unwrap_or(f64::NAN)
}

/// Characters skipped around a numeric literal: the `Zs` space separators,
/// tab, vertical tab, form feed, the byte order mark and the line
/// terminators. `U+0085` is not one of them.
fn is_number_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn parse_literal(s: &str) -> Option<f64> {
    match s {
        "" => return None,
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix('0') {
        let radix = match rest.as_bytes().first().copied() {
            Some(b'x' | b'X') => Some(16),
            Some(b'o' | b'O') => Some(8),
            Some(b'b' | b'B') => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&rest[1..], radix);
        }
    }

    parse_decimal(s)
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        let digit = c.to_digit(radix)?;
        Some(acc * f64::from(radix) + f64::from(digit))
    })
}

// `f64::from_str` also takes `inf`, `infinity` and `nan` in any case; those
// are not numbers here, so anything carrying letters other than an exponent
// marker is rejected before handing off.
fn parse_decimal(s: &str) -> Option<f64> {
    let plain = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !plain {
        return None;
    }
    s.parse().ok()
}
