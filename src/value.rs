use crate::error::{SheetError, SheetResult};

/// Check that a cell holds a plain decimal number
///
/// Accepted form is an optional leading minus, at least one digit and an optional fraction made
/// of a single dot followed by at least one digit.
pub fn is_number(value: &[u8]) -> bool {
    let digits = match value.split_first() {
        Some((b'-', rest)) => rest,
        _ => value,
    };
    let (integer, fraction) = match digits.iter().position(|&b| b == b'.') {
        Some(dot) => (&digits[..dot], Some(&digits[dot + 1..])),
        None => (digits, None),
    };
    let all_digits = |part: &[u8]| !part.is_empty() && part.iter().all(u8::is_ascii_digit);
    all_digits(integer) && fraction.map_or(true, all_digits)
}

fn expect_number(value: &[u8]) -> SheetResult<()> {
    if is_number(value) {
        Ok(())
    } else {
        Err(SheetError::InvalidNumber(
            String::from_utf8_lossy(value).into_owned(),
        ))
    }
}

/// Round half away from zero, without fraction digits
pub fn round(value: &[u8]) -> SheetResult<Vec<u8>> {
    expect_number(value)?;
    // Validated above, only ascii digits, minus and dot remain
    let text = std::str::from_utf8(value)
        .map_err(|_| SheetError::InvalidNumber(String::from_utf8_lossy(value).into_owned()))?;
    let number: f64 = text
        .parse()
        .map_err(|_| SheetError::InvalidNumber(text.to_string()))?;
    Ok(format!("{:.0}", number.round()).into_bytes())
}

/// Drop the fraction part without rounding
pub fn truncate(value: &[u8]) -> SheetResult<Vec<u8>> {
    expect_number(value)?;
    let end = value.iter().position(|&b| b == b'.').unwrap_or(value.len());
    Ok(value[..end].to_vec())
}
