//! Color math: numeric conversions between the tuple types.
//!
//! The `*_unit` helpers work on normalized f64 in 0.0–1.0; the public
//! functions take and return tuples in their display ranges (0–255 RGB,
//! degrees, percent).

use crate::color::{Hsl, Hsv, Precision, Rgb, Rgba, round_half_up};
use crate::constants::{HUE_MAX, PERCENT_MAX, RGB_MAX};

/// HSB/HSV → RGB. All values 0.0–1.0.
fn hsv_to_rgb_unit(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Hue of an RGB triple in turns (0.0–1.0), or 0 for grays.
fn hue_unit(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
fn rgb_to_hsv_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue_unit(r, g, b, max, delta), s, v)
}

/// RGB → HSL. All values 0.0–1.0.
fn rgb_to_hsl_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    if delta == 0.0 {
        return (0.0, 0.0, l);
    }
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    (hue_unit(r, g, b, max, delta), s, l)
}

/// One channel of HSL → RGB for a hue position already in 0.0–1.0.
fn hsl_channel(temp1: f64, temp2: f64, t: f64) -> f64 {
    if 6.0 * t < 1.0 {
        temp2 + (temp1 - temp2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        temp1
    } else if 3.0 * t < 2.0 {
        temp2 + (temp1 - temp2) * (2.0 / 3.0 - t) * 6.0
    } else {
        temp2
    }
}

/// Pull a hue position back into 0.0–1.0 with a single correction.
///
/// Only valid for positions within one turn of that range, which holds
/// because hues are wrapped into `[0, 360)` first.
fn unit_wrap(t: f64) -> f64 {
    if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    }
}

/// Fold any hue into `[0, 360)`.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(HUE_MAX)
}

/// RGB channel in 0–255 → 0.0–1.0, saturating outside the range.
fn unit_channel(c: f64) -> f64 {
    c.clamp(0.0, RGB_MAX) / RGB_MAX
}

/// HSL → RGB.
pub fn hsl_to_rgb(hsl: Hsl, precision: Precision) -> Rgb {
    let s = hsl.s / PERCENT_MAX;
    let l = hsl.l / PERCENT_MAX;
    let out = |c: f64| precision.apply(c * RGB_MAX);

    if s == 0.0 {
        return Rgb::new(out(l), out(l), out(l));
    }

    let temp1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let temp2 = 2.0 * l - temp1;
    let hue = wrap_hue(hsl.h) / HUE_MAX;

    let r = hsl_channel(temp1, temp2, unit_wrap(hue + 1.0 / 3.0));
    let g = hsl_channel(temp1, temp2, unit_wrap(hue));
    let b = hsl_channel(temp1, temp2, unit_wrap(hue - 1.0 / 3.0));
    Rgb::new(out(r), out(g), out(b))
}

/// RGB → HSL. Channels outside 0–255 saturate.
pub fn rgb_to_hsl(rgb: Rgb, precision: Precision) -> Hsl {
    let (h, s, l) = rgb_to_hsl_unit(unit_channel(rgb.r), unit_channel(rgb.g), unit_channel(rgb.b));
    Hsl::new(
        precision.apply(h * HUE_MAX),
        precision.apply(s * PERCENT_MAX),
        precision.apply(l * PERCENT_MAX),
    )
}

/// RGB → HSV, rounded to whole degrees and percent.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (h, s, v) = rgb_to_hsv_unit(unit_channel(rgb.r), unit_channel(rgb.g), unit_channel(rgb.b));
    Hsv::new(
        round_half_up(h * HUE_MAX),
        round_half_up(s * PERCENT_MAX),
        round_half_up(v * PERCENT_MAX),
    )
}

/// HSV → RGB, rounded to whole channels.
///
/// Saturation and value outside 0–100 saturate.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    hsv_to_rgb_with(hsv, Precision::Rounded)
}

/// HSV → RGB at the given precision. Adjustments chain on the exact form.
pub(crate) fn hsv_to_rgb_with(hsv: Hsv, precision: Precision) -> Rgb {
    let unit = |p: f64| (p / PERCENT_MAX).clamp(0.0, 1.0);
    let (r, g, b) = hsv_to_rgb_unit(wrap_hue(hsv.h) / HUE_MAX, unit(hsv.s), unit(hsv.v));
    let out = |c: f64| precision.apply(c * RGB_MAX);
    Rgb::new(out(r), out(g), out(b))
}

/// Flatten a translucent color onto an opaque backdrop.
///
/// Each channel is `c * a + backdrop * (1 - a)` with alpha clamped to
/// 0.0–1.0. The result is not rounded.
pub fn composite(rgba: Rgba, backdrop: Rgb) -> Rgb {
    let a = rgba.a.clamp(0.0, 1.0);
    let mix = |c: f64, under: f64| c * a + under * (1.0 - a);
    Rgb::new(
        mix(rgba.r, backdrop.r),
        mix(rgba.g, backdrop.g),
        mix(rgba.b, backdrop.b),
    )
}

#[cfg(test)]
#[path = "math_test.rs"]
mod tests;
