// src/core/split.rs
// Separator-based slicing used by the location parser.
// A missing separator never errors: segment 0 is then the whole input and
// every later segment is `None`.

/// The `n`th piece of `s` split on `sep`.
#[inline]
pub fn segment<'a>(s: &'a str, sep: &str, n: usize) -> Option<&'a str> {
    s.split(sep).nth(n)
}

/// First piece of `s` split on `sep` (the whole string if `sep` is absent).
#[inline]
pub fn head<'a>(s: &'a str, sep: &str) -> &'a str {
    s.split(sep).next().unwrap_or(s)
}

/// Lenient integer read: leading whitespace and one sign are allowed, then
/// digits up to the first non-digit. `"  4521)"` → 4521, `"x1"` → None.
pub fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 { return None; }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if neg { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_past_missing_separator_is_none() {
        assert_eq!(segment("Trenton 08601", "NJ ", 0), Some("Trenton 08601"));
        assert_eq!(segment("Trenton 08601", "NJ ", 1), None);
    }

    #[test]
    fn segment_takes_piece_between_first_and_second_separator() {
        assert_eq!(segment("a NJ b NJ c", "NJ ", 1), Some("b "));
    }

    #[test]
    fn head_without_separator_is_whole() {
        assert_eq!(head("Trenton NJ", ","), "Trenton NJ");
        assert_eq!(head("Trenton, NJ", ","), "Trenton");
        assert_eq!(head("", ","), "");
    }

    #[test]
    fn leading_int_variants() {
        assert_eq!(leading_int("4521"), Some(4521));
        assert_eq!(leading_int("  186)"), Some(186));
        assert_eq!(leading_int("-7'"), Some(-7));
        assert_eq!(leading_int("+12"), Some(12));
        assert_eq!(leading_int("'abc'"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int("99999999999999999999"), None);
    }
}
