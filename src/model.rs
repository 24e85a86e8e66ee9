//! Color model detection.
//!
//! Every entry point that accepts "any color" decides what it is looking at
//! here, by literal prefix. Longer tokens are tested before the shorter ones
//! they extend, so `hsla(...)` is never mistaken for `hsl(...)` and
//! `rgba(...)` never for `rgb(...)`.

use std::fmt;

/// The textual encodings this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorModel {
    /// `#rrggbb`, `#rgb`, bare hex digits, or an HTML color name.
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    /// Written as either `hsv(...)` or `hsb(...)`.
    Hsv,
}

/// Prefix table in match priority order.
const PREFIXES: [(&str, ColorModel); 6] = [
    ("rgba", ColorModel::Rgba),
    ("hsla", ColorModel::Hsla),
    ("rgb", ColorModel::Rgb),
    ("hsl", ColorModel::Hsl),
    ("hsb", ColorModel::Hsv),
    ("hsv", ColorModel::Hsv),
];

impl ColorModel {
    /// Classify `text` by its leading token.
    ///
    /// Anything without a functional prefix is reported as [`ColorModel::Hex`];
    /// whether it really is a hex color or a color name is for the hex
    /// resolver to decide.
    pub fn detect(text: &str) -> Self {
        let text = text.trim_start();
        let model = PREFIXES
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map_or(Self::Hex, |&(_, model)| model);
        tracing::trace!(input = text, %model, "classified color input");
        model
    }

    /// Whether values of this model carry an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
