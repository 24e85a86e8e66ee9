//! HSV codec, written as either `hsv(h, s, v)` or `hsb(h, s, b)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Hsv, HsvToken};
use crate::error::FormatError;
use crate::model::ColorModel;
use crate::scan;

static HSV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsv\(([^,()]*),([^,()]*),([^,()]*)\)$").expect("Failed to compile hsv regex")
});

static HSB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsb\(([^,()]*),([^,()]*),([^,()]*)\)$").expect("Failed to compile hsb regex")
});

/// Parse `hsv(<h>, <s>, <v>)` or `hsb(<h>, <s>, <b>)`, remembering which.
pub fn parse(text: &str) -> Result<Hsv, FormatError> {
    let trimmed = text.trim();
    let (caps, token) = match HSV.captures(trimmed) {
        Some(caps) => (caps, HsvToken::Hsv),
        None => HSB
            .captures(trimmed)
            .map(|caps| (caps, HsvToken::Hsb))
            .ok_or_else(|| FormatError::grammar(ColorModel::Hsv, text))?,
    };

    let field = |idx: usize, name: &'static str| {
        scan::float(&caps[idx]).ok_or_else(|| FormatError::field(ColorModel::Hsv, name, text))
    };
    let h = field(1, "hue")?;
    let s = field(2, "saturation")?;
    let v = field(3, "value/brightness")?;
    Ok(Hsv::new(h, s, v).with_token(token))
}

impl std::str::FromStr for Hsv {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_tokens() {
        let hsv = parse("hsv(1, 2, 3)").unwrap();
        assert_eq!((hsv.h, hsv.s, hsv.v, hsv.token), (1.0, 2.0, 3.0, HsvToken::Hsv));

        let hsb = parse("hsb(360,100,100)").unwrap();
        assert_eq!((hsb.h, hsb.s, hsb.v, hsb.token), (360.0, 100.0, 100.0, HsvToken::Hsb));
    }

    #[test]
    fn formats_with_its_token() {
        assert_eq!(parse("hsv(50,60,70)").unwrap().to_string(), "hsv(50, 60, 70)");
        assert_eq!(parse("hsb(50, 60, 70)").unwrap().to_string(), "hsb(50, 60, 70)");
        assert_eq!(Hsv::new(117.0, 80.0, 40.0).to_string(), "hsb(117, 80, 40)");
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert!(matches!(parse("hsb()"), Err(FormatError::Grammar { .. })));
        assert!(matches!(parse("hsv()"), Err(FormatError::Grammar { .. })));
        assert!(matches!(parse("hsl(1, 2, 3)"), Err(FormatError::Grammar { .. })));
        assert!(matches!(
            parse("hsv(1, two, 3)"),
            Err(FormatError::Field { field: "saturation", .. })
        ));
        assert!(matches!(
            parse("hsb(1, 2, )"),
            Err(FormatError::Field { field: "value/brightness", .. })
        ));
    }
}
