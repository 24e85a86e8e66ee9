//! RGB and RGBA codecs: `rgb(r, g, b)` and `rgba(r, g, b, a)`.
//!
//! Channels are decoded as floats and kept as written; nothing is clamped
//! here. Quantizing to 0–255 happens when a value becomes hex.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Rgb, Rgba};
use crate::error::FormatError;
use crate::model::ColorModel;
use crate::scan;

static RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(([^,()]*),([^,()]*),([^,()]*)\)$").expect("Failed to compile rgb regex")
});

static RGBA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba\(([^,()]*),([^,()]*),([^,()]*),([^,()]*)\)$")
        .expect("Failed to compile rgba regex")
});

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Decode `N` float fields out of `text` with `grammar`, naming the first
/// field that fails.
fn decode<const N: usize>(
    grammar: &Regex,
    model: ColorModel,
    text: &str,
) -> Result<[f64; N], FormatError> {
    let caps = grammar
        .captures(text.trim())
        .ok_or_else(|| FormatError::grammar(model, text))?;
    let mut out = [0.0; N];
    for (idx, slot) in out.iter_mut().enumerate() {
        let field = caps.get(idx + 1).map_or("", |m| m.as_str());
        *slot = scan::float(field).ok_or_else(|| FormatError::field(model, CHANNELS[idx], text))?;
    }
    Ok(out)
}

/// Parse `rgb(<r>, <g>, <b>)`.
pub fn parse(text: &str) -> Result<Rgb, FormatError> {
    let [r, g, b] = decode(&RGB, ColorModel::Rgb, text)?;
    Ok(Rgb::new(r, g, b))
}

/// Parse `rgba(<r>, <g>, <b>, <a>)`.
pub fn parse_rgba(text: &str) -> Result<Rgba, FormatError> {
    let [r, g, b, a] = decode(&RGBA, ColorModel::Rgba, text)?;
    Ok(Rgba::new(r, g, b, a))
}

impl std::str::FromStr for Rgb {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::str::FromStr for Rgba {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgba(s)
    }
}

#[cfg(test)]
#[path = "rgb_test.rs"]
mod tests;
