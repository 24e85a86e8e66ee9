//! Lighten, saturate, and light/dark classification.
//!
//! Every adjustment happens in HSL space: the color is decoded to exact
//! HSL, one component is scaled by `(100 + percent) / 100` and clamped to
//! 0–100, and the result is converted back to the model it came in as.
//! Only that final conversion rounds, so a zero percent leaves RGB and hex
//! colors untouched.
//! Alpha and the `hsv`/`hsb` token survive the trip.
//!
//! A negative percent darkens or desaturates. Percentages of any magnitude
//! are accepted; the clamp turns extreme ones into exactly 0% or 100%.

use crate::color::{Color, Hex, Hsl, Precision, Rgb};
use crate::constants::{LIGHTNESS_THRESHOLD, PERCENT_MAX};
use crate::error::FormatError;
use crate::model::ColorModel;
use crate::{hsl, hsv, math, rgb};

/// Which HSL component an adjustment scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    Lighten,
    Saturate,
}

impl Adjustment {
    fn apply(self, hsl: Hsl, percent: f64) -> Hsl {
        match self {
            Self::Lighten => Hsl {
                l: scale(hsl.l, percent),
                ..hsl
            },
            Self::Saturate => Hsl {
                s: scale(hsl.s, percent),
                ..hsl
            },
        }
    }
}

/// Clamp a percentage to 0–100. Never yields `-0`.
fn clamp_percent(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        value.min(PERCENT_MAX)
    }
}

fn scale(value: f64, percent: f64) -> f64 {
    clamp_percent((PERCENT_MAX + percent) * value / PERCENT_MAX)
}

/// Adjust an opaque RGB color through exact HSL, rounding the result
/// channels only when `precision` asks for it.
fn adjust_rgb(rgb: Rgb, adjustment: Adjustment, percent: f64, precision: Precision) -> Rgb {
    let hsl = math::rgb_to_hsl(rgb, Precision::Exact);
    math::hsl_to_rgb(adjustment.apply(hsl, percent), precision)
}

fn adjust(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    match ColorModel::detect(text) {
        ColorModel::Rgba => adjust_rgba(text, adjustment, percent),
        ColorModel::Hsla => adjust_hsla(text, adjustment, percent),
        ColorModel::Rgb => adjust_rgb_text(text, adjustment, percent),
        ColorModel::Hsl => adjust_hsl(text, adjustment, percent),
        ColorModel::Hsv => adjust_hsv(text, adjustment, percent),
        ColorModel::Hex => adjust_hex(text, adjustment, percent),
    }
}

fn adjust_hsl(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let hsl = hsl::parse(text)?;
    Ok(adjustment.apply(hsl, percent).to_string())
}

fn adjust_hsla(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let hsla = hsl::parse_hsla(text)?;
    Ok(adjustment
        .apply(hsla.hsl(), percent)
        .with_alpha(hsla.a)
        .to_string())
}

fn adjust_rgb_text(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let rgb = rgb::parse(text)?;
    Ok(adjust_rgb(rgb, adjustment, percent, Precision::Rounded).to_string())
}

fn adjust_rgba(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let rgba = rgb::parse_rgba(text)?;
    Ok(adjust_rgb(rgba.rgb(), adjustment, percent, Precision::Rounded)
        .with_alpha(rgba.a)
        .to_string())
}

fn adjust_hex(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let hex = Color::parse(text)?.to_hex();
    Ok(Hex::from_rgb(adjust_rgb(hex.to_rgb(), adjustment, percent, Precision::Rounded)).to_string())
}

fn adjust_hsv(text: &str, adjustment: Adjustment, percent: f64) -> Result<String, FormatError> {
    let hsv = hsv::parse(text)?;
    let exact = math::hsv_to_rgb_with(hsv, Precision::Exact);
    let rgb = adjust_rgb(exact, adjustment, percent, Precision::Exact);
    Ok(math::rgb_to_hsv(rgb).with_token(hsv.token).to_string())
}

/// Lighten any supported color by `percent` (darken when negative),
/// keeping its model.
///
/// Callers without a preference use
/// [`DEFAULT_ADJUST_PERCENT`](crate::constants::DEFAULT_ADJUST_PERCENT).
pub fn lighten(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust(text, Adjustment::Lighten, percent)
}

/// Saturate any supported color by `percent` (desaturate when negative),
/// keeping its model.
pub fn saturate(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust(text, Adjustment::Saturate, percent)
}

/// Lighten a hex color. Names, bare digits, and any other dispatchable
/// color are accepted and come back as `#rrggbb`.
pub fn lighten_hex(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hex(text, Adjustment::Lighten, percent)
}

pub fn lighten_rgb(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_rgb_text(text, Adjustment::Lighten, percent)
}

pub fn lighten_rgba(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_rgba(text, Adjustment::Lighten, percent)
}

pub fn lighten_hsl(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsl(text, Adjustment::Lighten, percent)
}

pub fn lighten_hsla(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsla(text, Adjustment::Lighten, percent)
}

pub fn lighten_hsv(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsv(text, Adjustment::Lighten, percent)
}

/// Saturate a hex color. Accepts the same inputs as [`lighten_hex`].
pub fn saturate_hex(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hex(text, Adjustment::Saturate, percent)
}

pub fn saturate_rgb(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_rgb_text(text, Adjustment::Saturate, percent)
}

pub fn saturate_rgba(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_rgba(text, Adjustment::Saturate, percent)
}

pub fn saturate_hsl(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsl(text, Adjustment::Saturate, percent)
}

pub fn saturate_hsla(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsla(text, Adjustment::Saturate, percent)
}

/// Saturate an HSV color.
///
/// The scaling happens in HSL space like every other model, which holds HSL
/// lightness fixed rather than HSV value: desaturating also lowers the value.
pub fn saturate_hsv(text: &str, percent: f64) -> Result<String, FormatError> {
    adjust_hsv(text, Adjustment::Saturate, percent)
}

/// Whether a color reads as light: its HSL lightness exceeds 40%.
pub fn is_light(text: &str) -> Result<bool, FormatError> {
    let lightness = Color::parse(text)?.to_hsl().l;
    Ok(lightness > LIGHTNESS_THRESHOLD)
}

#[cfg(test)]
#[path = "adjust_test.rs"]
mod tests;
