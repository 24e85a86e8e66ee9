//! String-level conversions between specific models.
//!
//! Each function parses one model's text, converts through [`crate::math`],
//! and returns either the typed tuple (`*_tuple`) or its canonical text.
//! Functions named `hex_to_*` accept anything the dispatcher understands,
//! since every color has a hex form.

use crate::color::{Color, Hex, Hsl, Hsla, Hsv, HsvToken, Precision, Rgb, Rgba};
use crate::error::FormatError;
use crate::{hsl, hsv, math, rgb};

// =============================================================================
// HSL / HSLA
// =============================================================================

pub fn hsl_to_rgb_tuple(text: &str, precision: Precision) -> Result<Rgb, FormatError> {
    Ok(math::hsl_to_rgb(hsl::parse(text)?, precision))
}

/// `hsl(...)` → `rgb(...)`. Exact precision keeps fractional channels.
pub fn hsl_to_rgb(text: &str, precision: Precision) -> Result<String, FormatError> {
    Ok(hsl_to_rgb_tuple(text, precision)?.to_string())
}

/// `hsl(...)` → `hsla(...)` with the given alpha.
pub fn hsl_to_hsla(text: &str, alpha: f64) -> Result<String, FormatError> {
    Ok(hsl::parse(text)?.with_alpha(alpha).to_string())
}

/// `hsla(...)` → rounded RGBA, alpha passed through.
pub fn hsla_to_rgba_tuple(text: &str) -> Result<Rgba, FormatError> {
    let hsla = hsl::parse_hsla(text)?;
    Ok(math::hsl_to_rgb(hsla.hsl(), Precision::Rounded).with_alpha(hsla.a))
}

pub fn hsla_to_rgba(text: &str) -> Result<String, FormatError> {
    Ok(hsla_to_rgba_tuple(text)?.to_string())
}

/// `hsla(...)` → `hsl(...)`, discarding alpha.
pub fn hsla_to_hsl(text: &str) -> Result<String, FormatError> {
    Ok(hsl::parse_hsla(text)?.hsl().to_string())
}

// =============================================================================
// RGB / RGBA
// =============================================================================

pub fn rgb_to_hsl_tuple(text: &str, precision: Precision) -> Result<Hsl, FormatError> {
    Ok(rgb_tuple_to_hsl_tuple(rgb::parse(text)?, precision))
}

/// Numeric RGB → HSL for callers that already hold channels.
pub fn rgb_tuple_to_hsl_tuple(rgb: Rgb, precision: Precision) -> Hsl {
    math::rgb_to_hsl(rgb, precision)
}

/// `rgb(...)` → rounded `hsl(...)`.
pub fn rgb_to_hsl(text: &str) -> Result<String, FormatError> {
    Ok(rgb_to_hsl_tuple(text, Precision::Rounded)?.to_string())
}

pub fn rgb_to_hsv_tuple(text: &str) -> Result<Hsv, FormatError> {
    Ok(math::rgb_to_hsv(rgb::parse(text)?))
}

/// `rgb(...)` → `hsb(...)` or `hsv(...)`, per `token`.
pub fn rgb_to_hsv(text: &str, token: HsvToken) -> Result<String, FormatError> {
    Ok(rgb_to_hsv_tuple(text)?.with_token(token).to_string())
}

/// `rgb(...)` → `#rrggbb`. Channels saturate to 0–255 and fractions are
/// dropped.
pub fn rgb_to_hex(text: &str) -> Result<String, FormatError> {
    Ok(Hex::from_rgb(rgb::parse(text)?).to_string())
}

/// `rgba(...)` → `#rrggbb`.
///
/// With a `reference` color (any text the dispatcher accepts) the RGBA is
/// composited onto it first, so a fully transparent color over white comes
/// out as `#ffffff`. Without one the alpha channel is simply dropped.
pub fn rgba_to_hex(text: &str, reference: Option<&str>) -> Result<String, FormatError> {
    let rgba = rgb::parse_rgba(text)?;
    let rgb = match reference {
        Some(reference) => {
            let backdrop = Color::parse(reference)?.to_opaque_rgb();
            tracing::trace!(reference, %backdrop, "compositing rgba");
            math::composite(rgba, backdrop)
        }
        None => rgba.rgb(),
    };
    Ok(Hex::from_rgb(rgb).to_string())
}

// =============================================================================
// HSV
// =============================================================================

pub fn hsv_to_rgb_tuple(text: &str) -> Result<Rgb, FormatError> {
    Ok(math::hsv_to_rgb(hsv::parse(text)?))
}

/// `hsv(...)`/`hsb(...)` → rounded `rgb(...)`.
pub fn hsv_to_rgb(text: &str) -> Result<String, FormatError> {
    Ok(hsv_to_rgb_tuple(text)?.to_string())
}

// =============================================================================
// Hex
// =============================================================================

fn resolve_hex(text: &str) -> Result<Hex, FormatError> {
    Ok(Color::parse(text)?.to_hex())
}

pub fn hex_to_rgb_tuple(text: &str) -> Result<Rgb, FormatError> {
    Ok(resolve_hex(text)?.to_rgb())
}

/// Hex (or any dispatchable color) → `rgb(...)`.
pub fn hex_to_rgb(text: &str) -> Result<String, FormatError> {
    Ok(hex_to_rgb_tuple(text)?.to_string())
}

pub fn hex_to_hsl_tuple(text: &str, precision: Precision) -> Result<Hsl, FormatError> {
    Ok(math::rgb_to_hsl(hex_to_rgb_tuple(text)?, precision))
}

/// Hex (or any dispatchable color) → rounded `hsl(...)`.
pub fn hex_to_hsl(text: &str) -> Result<String, FormatError> {
    Ok(hex_to_hsl_tuple(text, Precision::Rounded)?.to_string())
}

pub fn hex_to_hsla_tuple(text: &str, alpha: f64) -> Result<Hsla, FormatError> {
    Ok(hex_to_hsl_tuple(text, Precision::Rounded)?.with_alpha(alpha))
}

/// Hex (or any dispatchable color) → rounded `hsla(...)` with the given alpha.
pub fn hex_to_hsla(text: &str, alpha: f64) -> Result<String, FormatError> {
    Ok(hex_to_hsla_tuple(text, alpha)?.to_string())
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
