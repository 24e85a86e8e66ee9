//! Hex codec: `#rgb`, `#rrggbb`, with or without the `#`.

use crate::color::Hex;
use crate::error::FormatError;

/// Parse a hex string (with or without `#`, 3 or 6 digits).
///
/// Shorthand expands by duplicating each nibble, so `#a1f` is `#aa11ff`.
pub fn parse(text: &str) -> Result<Hex, FormatError> {
    let trimmed = text.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if stripped.len() != 3 && stripped.len() != 6 {
        return Err(FormatError::HexLength {
            input: text.to_string(),
        });
    }
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::HexDigits {
            input: text.to_string(),
        });
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| FormatError::HexDigits {
            input: text.to_string(),
        })
    };
    let hex = if stripped.len() == 3 {
        let r = channel(&stripped[0..1])?;
        let g = channel(&stripped[1..2])?;
        let b = channel(&stripped[2..3])?;
        Hex::new(r * 17, g * 17, b * 17)
    } else {
        Hex::new(
            channel(&stripped[0..2])?,
            channel(&stripped[2..4])?,
            channel(&stripped[4..6])?,
        )
    };
    Ok(hex)
}

/// Whether `text` is exactly 3 or 6 hex digits with no `#`.
pub(crate) fn is_bare_hex(text: &str) -> bool {
    matches!(text.len(), 3 | 6) && text.chars().all(|c| c.is_ascii_hexdigit())
}

impl std::str::FromStr for Hex {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
