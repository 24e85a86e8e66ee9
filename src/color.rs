//! Tuple types for every color model, plus the [`Color`] union over them.
//!
//! Each tuple's `Display` impl is its canonical text form: lowercase six
//! digit hex, `rgb(r, g, b)`, percent-suffixed HSL components, and so on.
//! Parsing lives in the per-model codec modules.

use std::fmt;

use crate::constants::{OPAQUE_BACKDROP, RGB_MAX};
use crate::error::FormatError;
use crate::model::ColorModel;
use crate::{hex, hsl, hsv, math, named, rgb};

/// Whether a conversion rounds its output to whole numbers.
///
/// Rounded output is what the string API emits. Exact output keeps the
/// fractional part so chained conversions don't compound rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    #[default]
    Rounded,
    Exact,
}

impl Precision {
    pub(crate) fn apply(self, value: f64) -> f64 {
        match self {
            Self::Rounded => round_half_up(value),
            Self::Exact => value,
        }
    }
}

/// Round to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Fold `-0` into `0` so canonical text never prints a signed zero.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// An opaque 24-bit color, as written in `#rrggbb` form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hex {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize RGB channels: clamp to 0–255, then drop the fraction.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let quantize = |c: f64| c.clamp(0.0, RGB_MAX) as u8;
        Self {
            r: quantize(rgb.r),
            g: quantize(rgb.g),
            b: quantize(rgb.b),
        }
    }

    /// Widen to an [`Rgb`] tuple.
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB with channels in 0–255. Channels may be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            unsigned_zero(self.r),
            unsigned_zero(self.g),
            unsigned_zero(self.b)
        )
    }
}

/// RGB plus alpha in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel without compositing.
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            unsigned_zero(self.r),
            unsigned_zero(self.g),
            unsigned_zero(self.b),
            unsigned_zero(self.a)
        )
    }
}

/// HSL with hue in degrees and saturation/lightness in percent (0–100).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f64) -> Hsla {
        Hsla {
            h: self.h,
            s: self.s,
            l: self.l,
            a,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            unsigned_zero(self.h),
            unsigned_zero(self.s),
            unsigned_zero(self.l)
        )
    }
}

/// HSL plus alpha in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Drop the alpha channel.
    pub fn hsl(self) -> Hsl {
        Hsl::new(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            unsigned_zero(self.h),
            unsigned_zero(self.s),
            unsigned_zero(self.l),
            unsigned_zero(self.a)
        )
    }
}

/// Which function name an HSV value is written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HsvToken {
    #[default]
    Hsb,
    Hsv,
}

impl HsvToken {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hsb => "hsb",
            Self::Hsv => "hsv",
        }
    }
}

/// HSV/HSB with hue in degrees and saturation/value in percent (0–100).
///
/// `token` only affects formatting; two values differing only in token
/// describe the same color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub token: HsvToken,
}

impl Hsv {
    /// An `hsb(...)` value.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h,
            s,
            v,
            token: HsvToken::Hsb,
        }
    }

    #[must_use]
    pub fn with_token(self, token: HsvToken) -> Self {
        Self { token, ..self }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.token.as_str(),
            unsigned_zero(self.h),
            unsigned_zero(self.s),
            unsigned_zero(self.v)
        )
    }
}

/// A decoded color in whichever model its text was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
    Hsv(Hsv),
}

impl Color {
    /// Decode any supported color text.
    ///
    /// Functional forms are routed by [`ColorModel::detect`]; everything else
    /// must be a `#`-prefixed hex color, an HTML color name, or bare hex
    /// digits, tried in that order.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let text = text.trim();
        Ok(match ColorModel::detect(text) {
            ColorModel::Rgb => Self::Rgb(rgb::parse(text)?),
            ColorModel::Rgba => Self::Rgba(rgb::parse_rgba(text)?),
            ColorModel::Hsl => Self::Hsl(hsl::parse(text)?),
            ColorModel::Hsla => Self::Hsla(hsl::parse_hsla(text)?),
            ColorModel::Hsv => Self::Hsv(hsv::parse(text)?),
            ColorModel::Hex => Self::Hex(resolve_hex(text)?),
        })
    }

    pub fn model(&self) -> ColorModel {
        match self {
            Self::Hex(_) => ColorModel::Hex,
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Rgba(_) => ColorModel::Rgba,
            Self::Hsl(_) => ColorModel::Hsl,
            Self::Hsla(_) => ColorModel::Hsla,
            Self::Hsv(_) => ColorModel::Hsv,
        }
    }

    /// The opaque RGB this color is displayed as.
    ///
    /// Translucent colors are composited against white and quantized the way
    /// a hex serialization would be. Plain RGB comes back untouched, every
    /// other model is converted with rounding.
    pub fn to_opaque_rgb(&self) -> Rgb {
        let backdrop = OPAQUE_BACKDROP.to_rgb();
        match *self {
            Self::Hex(hex) => hex.to_rgb(),
            Self::Rgb(rgb) => rgb,
            Self::Rgba(rgba) => Hex::from_rgb(math::composite(rgba, backdrop)).to_rgb(),
            Self::Hsl(hsl) => math::hsl_to_rgb(hsl, Precision::Rounded),
            Self::Hsla(hsla) => {
                let rgba = math::hsl_to_rgb(hsla.hsl(), Precision::Rounded).with_alpha(hsla.a);
                Hex::from_rgb(math::composite(rgba, backdrop)).to_rgb()
            }
            Self::Hsv(hsv) => math::hsv_to_rgb(hsv),
        }
    }

    pub fn to_hex(&self) -> Hex {
        match *self {
            Self::Hex(hex) => hex,
            _ => Hex::from_rgb(self.to_opaque_rgb()),
        }
    }

    /// Rounded HSL, leaving HSL input as written.
    pub fn to_hsl(&self) -> Hsl {
        match *self {
            Self::Hsl(hsl) => hsl,
            _ => math::rgb_to_hsl(self.to_opaque_rgb(), Precision::Rounded),
        }
    }

    /// Rounded HSV, leaving HSV input (and its token) as written.
    pub fn to_hsv(&self) -> Hsv {
        match *self {
            Self::Hsv(hsv) => hsv,
            _ => math::rgb_to_hsv(self.to_opaque_rgb()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(c) => c.fmt(f),
            Self::Rgb(c) => c.fmt(f),
            Self::Rgba(c) => c.fmt(f),
            Self::Hsl(c) => c.fmt(f),
            Self::Hsla(c) => c.fmt(f),
            Self::Hsv(c) => c.fmt(f),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Hex> for Color {
    fn from(c: Hex) -> Self {
        Self::Hex(c)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::Rgba(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Hsla> for Color {
    fn from(c: Hsla) -> Self {
        Self::Hsla(c)
    }
}

impl From<Hsv> for Color {
    fn from(c: Hsv) -> Self {
        Self::Hsv(c)
    }
}

/// Where a hex-model input got its digits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HexSource<'a> {
    /// `#rgb` / `#rrggbb`, already validated.
    Prefixed(&'a str),
    /// An HTML color name; holds the table's hex value.
    Named(&'static str),
    /// Three or six hex digits without the `#`.
    Bare(&'a str),
}

impl HexSource<'_> {
    /// Text of the hex color, always with its `#`.
    pub(crate) fn to_hex_string(self) -> String {
        match self {
            Self::Prefixed(text) => text.to_string(),
            Self::Named(hex) => hex.to_string(),
            Self::Bare(digits) => format!("#{digits}"),
        }
    }
}

/// Run the hex half of the dispatch cascade: `#` hex, name, bare digits.
pub(crate) fn classify_hex(text: &str) -> Result<HexSource<'_>, FormatError> {
    let text = text.trim();
    if text.starts_with('#') {
        hex::parse(text)?;
        tracing::trace!(input = text, "prefixed hex color");
        return Ok(HexSource::Prefixed(text));
    }
    if let Some(hex) = named::lookup(text) {
        tracing::trace!(input = text, hex, "resolved color name");
        return Ok(HexSource::Named(hex));
    }
    if hex::is_bare_hex(text) {
        tracing::trace!(input = text, "bare hex digits");
        return Ok(HexSource::Bare(text));
    }
    Err(FormatError::Undecodable {
        input: text.to_string(),
    })
}

fn resolve_hex(text: &str) -> Result<Hex, FormatError> {
    hex::parse(&classify_hex(text)?.to_hex_string())
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
