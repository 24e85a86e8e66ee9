//! Numeric field decoding for the functional grammars.
//!
//! Fields decode by their leading numeric prefix, so `50%`, ` 12px` and `.5`
//! are all numbers while `abc` or an empty field are not.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("Failed to compile float prefix regex")
});

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("Failed to compile integer prefix regex"));

/// Decode the leading floating point number of `field`.
pub(crate) fn float(field: &str) -> Option<f64> {
    let field = field.trim();
    let m = FLOAT_PREFIX.find(field)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode the leading integer of `field`, as a float.
pub(crate) fn integer(field: &str) -> Option<f64> {
    let field = field.trim();
    let m = INT_PREFIX.find(field)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}
