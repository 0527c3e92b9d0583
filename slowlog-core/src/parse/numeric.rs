use std::borrow::Cow;

/// Parses a 64-bit signed integer, inferring the base from its prefix.
///
/// Accepts an optional sign followed by decimal digits, or `0x`, `0o`, `0b`
/// prefixed digits, or a leading `0` for octal. Single `_` separators may sit
/// between digits (`1_000`, `0x_1F`). Returns `None` on anything else,
/// including overflow.
pub fn parse_int(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let unsigned = if unsigned.contains('_') {
        if !underscores_ok(unsigned) {
            return None;
        }
        Cow::Owned(unsigned.replace('_', ""))
    } else {
        Cow::Borrowed(unsigned)
    };

    let (radix, digits) = split_radix(&unsigned);

    // from_str_radix tolerates a sign of its own; we've already taken it
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn split_radix(text: &str) -> (u32, &str) {
    let prefix = text.get(..2).map(|p| p.to_ascii_lowercase());

    match prefix.as_deref() {
        Some("0x") => (16, &text[2..]),
        Some("0o") => (8, &text[2..]),
        Some("0b") => (2, &text[2..]),
        _ if text.len() > 1 && text.starts_with('0') => (8, &text[1..]),
        _ => (10, text),
    }
}

// Each `_` must follow a digit or the base prefix and be followed by a digit.
fn underscores_ok(text: &str) -> bool {
    let bytes = text.as_bytes();
    let (hex, rest, mut after_digit) = match bytes {
        [b'0', p, rest @ ..] if matches!(p.to_ascii_lowercase(), b'x' | b'o' | b'b') => {
            (p.eq_ignore_ascii_case(&b'x'), rest, true)
        }
        _ => (false, bytes, false),
    };

    let mut after_underscore = false;
    for &b in rest {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            after_digit = true;
            after_underscore = false;
        } else if b == b'_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
            after_underscore = true;
        } else {
            if after_underscore {
                return false;
            }
            after_digit = false;
        }
    }

    !after_underscore
}

/// Parses a floating-point number. `None` if the text is not a number.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
