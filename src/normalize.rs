//! Normalization: any supported color text in, one target model out.
//!
//! The source model is chosen by [`Color::parse`]. Translucent sources are
//! composited against white, since none of these targets carries alpha.

use crate::color::{Color, classify_hex};
use crate::error::FormatError;
use crate::model::ColorModel;

/// Normalize to hex.
///
/// Hex input that already has its `#` comes back exactly as written, so
/// `#FFF` stays `#FFF`. Names resolve to their table value and bare digits
/// gain a `#`.
pub fn to_hex(text: &str) -> Result<String, FormatError> {
    let text = text.trim();
    match ColorModel::detect(text) {
        ColorModel::Hex => Ok(classify_hex(text)?.to_hex_string()),
        _ => Ok(Color::parse(text)?.to_hex().to_string()),
    }
}

/// Normalize to `rgb(r, g, b)`. RGB input is validated and reformatted.
pub fn to_rgb(text: &str) -> Result<String, FormatError> {
    Ok(Color::parse(text)?.to_opaque_rgb().to_string())
}

/// Normalize to `hsl(h, s%, l%)`. HSL input is validated and reformatted,
/// gaining any missing `%` signs.
pub fn to_hsl(text: &str) -> Result<String, FormatError> {
    Ok(Color::parse(text)?.to_hsl().to_string())
}

/// Normalize to HSV. HSV input keeps the token it was written with; every
/// other model comes out as `hsb(...)`.
pub fn to_hsv(text: &str) -> Result<String, FormatError> {
    Ok(Color::parse(text)?.to_hsv().to_string())
}
