//! # color-utils
//!
//! Parse, convert, and adjust CSS-style color strings.
//!
//! Understands hex (`#rrggbb`, `#rgb`, bare digits), `rgb()`, `rgba()`,
//! `hsl()`, `hsla()`, `hsv()`/`hsb()`, and the 140 HTML color names. Any of
//! them can be normalized to another model, lightened or darkened,
//! saturated or desaturated, and classified as light or dark.
//!
//! ## Usage
//!
//! ```rust
//! use color_utils::{is_light, lighten, to_hex, to_rgb};
//!
//! assert_eq!(to_hex("rgb(66, 134, 244)")?, "#4286f4");
//! assert_eq!(to_rgb("antiquewhite")?, "rgb(250, 235, 215)");
//! assert_eq!(lighten("#af0", 10.0)?, "#b2ff1a");
//! assert!(is_light("floralwhite")?);
//! # Ok::<(), color_utils::FormatError>(())
//! ```
//!
//! Typed access goes through [`Color`]:
//!
//! ```rust
//! use color_utils::{Color, ColorModel};
//!
//! let color: Color = "hsla(118, 100%, 52%, 0.56)".parse()?;
//! assert_eq!(color.model(), ColorModel::Hsla);
//! assert_eq!(color.to_hex().to_string(), "#7aff75");
//! # Ok::<(), color_utils::FormatError>(())
//! ```
//!
//! ## Features
//!
//! - `random` (default): `random_*_color` generators.
//! - `serde`: `Serialize`/`Deserialize` for the tuple types.

mod adjust;
mod color;
pub mod constants;
mod convert;
mod error;
pub mod hex;
pub mod hsl;
pub mod hsv;
mod math;
mod model;
pub mod named;
mod normalize;
#[cfg(feature = "random")]
mod random;
pub mod rgb;
mod scan;

pub use adjust::{
    is_light, lighten, lighten_hex, lighten_hsl, lighten_hsla, lighten_hsv, lighten_rgb,
    lighten_rgba, saturate, saturate_hex, saturate_hsl, saturate_hsla, saturate_hsv,
    saturate_rgb, saturate_rgba,
};
pub use color::{Color, Hex, Hsl, Hsla, Hsv, HsvToken, Precision, Rgb, Rgba};
pub use convert::{
    hex_to_hsl, hex_to_hsl_tuple, hex_to_hsla, hex_to_hsla_tuple, hex_to_rgb, hex_to_rgb_tuple,
    hsl_to_hsla, hsl_to_rgb, hsl_to_rgb_tuple, hsla_to_hsl, hsla_to_rgba, hsla_to_rgba_tuple,
    hsv_to_rgb, hsv_to_rgb_tuple, rgb_to_hex, rgb_to_hsl, rgb_to_hsl_tuple, rgb_to_hsv,
    rgb_to_hsv_tuple, rgb_tuple_to_hsl_tuple, rgba_to_hex,
};
pub use error::FormatError;
pub use model::ColorModel;
pub use normalize::{to_hex, to_hsl, to_hsv, to_rgb};
#[cfg(feature = "random")]
pub use random::{random_hex_color, random_hsl_color, random_hsv_color, random_rgb_color};
