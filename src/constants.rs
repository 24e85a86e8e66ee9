//! Channel ranges, thresholds, and defaults shared by the codecs and converters.

use crate::color::Hex;

/// Upper bound of an RGB channel
pub const RGB_MAX: f64 = 255.0;

/// Full turn of the hue circle, in degrees
pub const HUE_MAX: f64 = 360.0;

/// Upper bound of saturation, lightness, and value percentages
pub const PERCENT_MAX: f64 = 100.0;

/// Percentage used by `lighten`/`saturate` callers that have no opinion
pub const DEFAULT_ADJUST_PERCENT: f64 = 10.0;

/// HSL lightness above which a color counts as light
pub const LIGHTNESS_THRESHOLD: f64 = 40.0;

/// Largest packed 24-bit RGB value
#[cfg(feature = "random")]
pub const HEX_MAX: u32 = 0x00ff_ffff;

/// Smallest packed value whose lowercase hex form has six digits
#[cfg(feature = "random")]
pub const HEX_MIN_SIX_DIGITS: u32 = 0x0010_0000;

/// Backdrop translucent inputs are composited against when the target model
/// has no alpha channel
pub const OPAQUE_BACKDROP: Hex = Hex {
    r: 0xff,
    g: 0xff,
    b: 0xff,
};
