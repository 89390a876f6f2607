use crate::error::{DecodeError, Error, Result};
use rug::Integer;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// A share `(x, y)` on the hidden polynomial.
///
/// Two points are equal only when both coordinates match; the interpolator
/// relies on this to decide which points to skip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: Integer,
    y: Integer,
}

impl Point {
    pub fn new(x: Integer, y: Integer) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> &Integer {
        &self.x
    }

    pub fn y(&self) -> &Integer {
        &self.y
    }
}

/// Decodes the share stored at `index` whose y-value is written as `digits`
/// in radix `base`.
pub fn decode_point(index: u64, base: u32, digits: &str) -> Result<Point> {
    let y = parse_radix(digits, base).map_err(|source| Error::Decode { index, source })?;
    Ok(Point::new(Integer::from(index), y))
}

/// Parses a base given as decimal text, e.g. `"16"`.
///
/// Any decimal integer outside 2..=36, including ones too large for a
/// `u32`, is an unsupported base rather than malformed text.
pub fn parse_base(text: &str) -> std::result::Result<u32, DecodeError> {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::MalformedBase(text.to_string()));
    }
    match trimmed.parse::<u32>() {
        Ok(base) if (MIN_RADIX..=MAX_RADIX).contains(&base) => Ok(base),
        _ => Err(DecodeError::UnsupportedBase(trimmed.to_string())),
    }
}

/// Digits are `0-9a-z` in either case, with an optional leading sign.
pub fn parse_radix(digits: &str, base: u32) -> std::result::Result<Integer, DecodeError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base.to_string()));
    }
    let unsigned = digits
        .strip_prefix('-')
        .or_else(|| digits.strip_prefix('+'))
        .unwrap_or(digits);
    if unsigned.is_empty() {
        return Err(DecodeError::Empty);
    }
    // rug tolerates underscores and whitespace, so reject them up front.
    let offset = digits.len() - unsigned.len();
    if let Some((position, digit)) = unsigned
        .char_indices()
        .find(|(_, c)| c.to_digit(base).is_none())
    {
        return Err(DecodeError::InvalidDigit {
            digit,
            position: offset + position,
            base,
        });
    }
    Integer::from_str_radix(digits, base as i32)
        .map_err(|_| DecodeError::Unparsable(digits.to_string()))
}
