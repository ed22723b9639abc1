/// Check that `s` is a plain decimal real literal.
///
/// Accepts an optional sign, then digits with an optional `.` and fractional
/// digits; at least one digit must be present. Exponent notation, `inf` and
/// `NaN` are rejected even though `f64::from_str` would take them.
pub(crate) fn is_real_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !(int.is_empty() && frac.is_empty()) && is_digits(int) && is_digits(frac)
}

/// Check that `s` consists only of ASCII digits. The empty string passes.
pub(crate) fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
