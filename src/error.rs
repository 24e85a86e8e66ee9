//! The one error every parse and conversion can fail with.

use crate::model::ColorModel;

/// A color string that could not be decoded.
///
/// Every variant echoes the offending input so callers can surface it as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The text does not have the shape `model(<field>, ...)` requires.
    #[error("couldn't decode an {model} color from the given input: '{input}'")]
    Grammar { model: ColorModel, input: String },

    /// The shape matched but one field is not a number.
    #[error("couldn't decode the '{field}' value of the given {model} color: '{input}'")]
    Field {
        model: ColorModel,
        field: &'static str,
        input: String,
    },

    /// A hex color without 3 or 6 digits after the optional `#`.
    #[error("'{input}' appears to be a hex color but doesn't have 3 or 6 digits")]
    HexLength { input: String },

    /// A hex color of the right length containing a non-hex character.
    #[error("'{input}' appears to be a hex color but contains non-hex digits")]
    HexDigits { input: String },

    /// Nothing in the dispatch cascade recognized the input.
    #[error("couldn't decode color for input: '{input}'")]
    Undecodable { input: String },
}

impl FormatError {
    pub(crate) fn grammar(model: ColorModel, input: &str) -> Self {
        Self::Grammar {
            model,
            input: input.to_string(),
        }
    }

    pub(crate) fn field(model: ColorModel, field: &'static str, input: &str) -> Self {
        Self::Field {
            model,
            field,
            input: input.to_string(),
        }
    }

    /// The text that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            Self::Grammar { input, .. }
            | Self::Field { input, .. }
            | Self::HexLength { input }
            | Self::HexDigits { input }
            | Self::Undecodable { input } => input,
        }
    }
}
