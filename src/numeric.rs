//! Lenient numeric parsing for stat fields.
//!
//! Every stat lookup goes through here. A field that is absent or has no
//! leading number parses to `None`; callers pick the fallback explicitly
//! (`int_or_zero`/`float_or_zero`) or keep the `None`.

/// Leading base-10 integer: optional sign then digits. `"45*"` is 45, `"12.9"` is 12.
pub fn parse_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let end = signed_digits_end(s, 0)?;
    s[..end].parse::<i64>().ok()
}

/// Longest leading decimal literal, with optional fraction and exponent.
pub fn parse_float(raw: Option<&str>) -> Option<f64> {
    let s = raw?.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits |= frac_end > frac_start;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        if let Some(exp_end) = signed_digits_end(s, end + 1) {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Zero only when the field is absent or blank. A present value with no
/// leading number stays `None`, so threshold checks against it fail.
pub fn float_or_zero_if_absent(raw: Option<&str>) -> Option<f64> {
    match raw {
        None => Some(0.0),
        Some(s) if s.is_empty() => Some(0.0),
        Some(_) => parse_float(raw),
    }
}

pub fn int_or_zero_if_absent(raw: Option<&str>) -> Option<i64> {
    match raw {
        None => Some(0),
        Some(s) if s.is_empty() => Some(0),
        Some(_) => parse_int(raw),
    }
}

pub fn int_or_zero(raw: Option<&str>) -> i64 {
    parse_int(raw).unwrap_or(0)
}

pub fn float_or_zero(raw: Option<&str>) -> f64 {
    parse_float(raw).unwrap_or(0.0)
}

/// Nearest integer with halves rounded up (towards positive infinity).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn signed_digits_end(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > digits_start).then_some(end)
}
