//! HSL and HSLA codecs: `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`.
//!
//! The hue decodes as an integer. Saturation and lightness may be written
//! with or without `%`; they always format with it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Hsl, Hsla};
use crate::error::FormatError;
use crate::model::ColorModel;
use crate::scan;

static HSL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsl\(([^,()]*),([^,()]*),([^,()]*)\)$").expect("Failed to compile hsl regex")
});

static HSLA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsla\(([^,()]*),([^,()]*),([^,()]*),([^,()]*)\)$")
        .expect("Failed to compile hsla regex")
});

/// Decode the shared hue/saturation/lightness fields.
fn decode_hsl(
    model: ColorModel,
    text: &str,
    [h, s, l]: [&str; 3],
) -> Result<Hsl, FormatError> {
    let h = scan::integer(h).ok_or_else(|| FormatError::field(model, "hue", text))?;
    let s = scan::float(s).ok_or_else(|| FormatError::field(model, "saturation", text))?;
    let l = scan::float(l).ok_or_else(|| FormatError::field(model, "lightness", text))?;
    Ok(Hsl::new(h, s, l))
}

/// Parse `hsl(<h>, <s>, <l>)`.
pub fn parse(text: &str) -> Result<Hsl, FormatError> {
    let caps = HSL
        .captures(text.trim())
        .ok_or_else(|| FormatError::grammar(ColorModel::Hsl, text))?;
    decode_hsl(ColorModel::Hsl, text, [&caps[1], &caps[2], &caps[3]])
}

/// Parse `hsla(<h>, <s>, <l>, <a>)`.
pub fn parse_hsla(text: &str) -> Result<Hsla, FormatError> {
    let caps = HSLA
        .captures(text.trim())
        .ok_or_else(|| FormatError::grammar(ColorModel::Hsla, text))?;
    let hsl = decode_hsl(ColorModel::Hsla, text, [&caps[1], &caps[2], &caps[3]])?;
    let a = scan::float(&caps[4]).ok_or_else(|| FormatError::field(ColorModel::Hsla, "alpha", text))?;
    Ok(hsl.with_alpha(a))
}

impl std::str::FromStr for Hsl {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::str::FromStr for Hsla {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hsla(s)
    }
}
