//! Random color generation, behind the `random` feature.

use rand::Rng;

use crate::color::{Hex, Precision};
use crate::constants::{HEX_MAX, HEX_MIN_SIX_DIGITS};
use crate::math;

/// Draw a packed 24-bit color whose hex form needs all six digits.
///
/// Candidates below `0x100000` are redrawn rather than zero-padded, so the
/// first digit is never `0`.
fn random_hex() -> Hex {
    let mut rng = rand::rng();
    loop {
        let value = rng.random_range(0..=HEX_MAX);
        if value >= HEX_MIN_SIX_DIGITS {
            let [_, r, g, b] = value.to_be_bytes();
            return Hex::new(r, g, b);
        }
        tracing::trace!(value, "discarding short hex candidate");
    }
}

#[must_use]
pub fn random_hex_color() -> String {
    random_hex().to_string()
}

#[must_use]
pub fn random_rgb_color() -> String {
    random_hex().to_rgb().to_string()
}

#[must_use]
pub fn random_hsl_color() -> String {
    math::rgb_to_hsl(random_hex().to_rgb(), Precision::Rounded).to_string()
}

/// A random color as `hsb(...)`.
#[must_use]
pub fn random_hsv_color() -> String {
    math::rgb_to_hsv(random_hex().to_rgb()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::model::ColorModel;

    #[test]
    fn hex_colors_always_have_six_digits() {
        for _ in 0..1000 {
            let hex = random_hex_color();
            assert_eq!(hex.len(), 7, "{hex}");
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{hex}");
            assert_ne!(&hex[1..2], "0", "{hex}");
        }
    }

    #[test]
    fn every_generator_emits_parseable_text() {
        for _ in 0..100 {
            assert_eq!(Color::parse(&random_rgb_color()).unwrap().model(), ColorModel::Rgb);
            assert_eq!(Color::parse(&random_hsl_color()).unwrap().model(), ColorModel::Hsl);

            let hsv = random_hsv_color();
            assert!(hsv.starts_with("hsb("), "{hsv}");
            assert_eq!(Color::parse(&hsv).unwrap().model(), ColorModel::Hsv);
        }
    }

    #[test]
    fn channels_stay_in_range() {
        for _ in 0..100 {
            let Color::Hsl(hsl) = Color::parse(&random_hsl_color()).unwrap() else {
                panic!("not hsl");
            };
            assert!((0.0..360.0).contains(&hsl.h), "{hsl}");
            assert!((0.0..=100.0).contains(&hsl.s), "{hsl}");
            assert!((0.0..=100.0).contains(&hsl.l), "{hsl}");
        }
    }
}
