//! Loose scalar coercions for values that arrive as untyped strings from the
//! host settings bag or the gateway callback.

/// Integer value of a loosely typed string.
///
/// Whole numeric strings (`"5"`, `" 7.9 "`, `"1e2"`) are truncated towards zero.
/// Anything else yields its leading integer prefix, or zero when there is none.
pub fn int_value(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(whole) = trimmed.parse::<i64>() {
        return whole;
    }
    if let Ok(float) = trimmed.parse::<f64>()
        && float.is_finite()
    {
        return float.trunc() as i64;
    }

    let mut chars = trimmed.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for digit in chars.map_while(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }
    if negative { -value } else { value }
}

/// True when the string is numerically equal to one (`"1"`, `" 1.0"`, `"01"`).
pub fn is_one(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|v| v == 1.0)
}
