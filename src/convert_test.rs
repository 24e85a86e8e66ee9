use super::*;

#[test]
fn hsl_to_rgb_strings() {
    let rounded = |input: &str| hsl_to_rgb(input, Precision::Rounded).unwrap();
    assert_eq!(rounded("hsl(50, 100%, 100%)"), "rgb(255, 255, 255)");
    assert_eq!(rounded("hsl(50, 84%, 44%)"), "rgb(206, 175, 18)");
    assert_eq!(rounded("hsl(194, 63%, 8%)"), "rgb(8, 27, 33)");
    assert_eq!(rounded("hsl(194, 63, 8)"), "rgb(8, 27, 33)");
}

#[test]
fn hsl_to_rgb_exact_keeps_fractions() {
    let exact = hsl_to_rgb_tuple("hsl(0, 0%, 50%)", Precision::Exact).unwrap();
    assert_eq!(exact, Rgb::new(127.5, 127.5, 127.5));
    assert_eq!(
        hsl_to_rgb("hsl(0, 0%, 50%)", Precision::Exact).unwrap(),
        "rgb(127.5, 127.5, 127.5)"
    );
}

#[test]
fn hsl_alpha_conversions() {
    assert_eq!(hsl_to_hsla("hsl(50, 100%, 100%)", 1.0).unwrap(), "hsla(50, 100%, 100%, 1)");
    assert_eq!(hsl_to_hsla("hsl(50, 100%, 100%)", 0.5).unwrap(), "hsla(50, 100%, 100%, 0.5)");
    assert_eq!(hsl_to_hsla("hsl(50, 100, 100)", 1.0).unwrap(), "hsla(50, 100%, 100%, 1)");

    assert_eq!(hsla_to_rgba("hsla(118, 100%, 52%, 0.56)").unwrap(), "rgba(18, 255, 10, 0.56)");
    assert_eq!(hsla_to_rgba("hsla(36, 31%, 69%, 0.84)").unwrap(), "rgba(200, 181, 151, 0.84)");
    assert_eq!(hsla_to_rgba("hsla(360, 100%, 100%, 0.00)").unwrap(), "rgba(255, 255, 255, 0)");
    assert_eq!(hsla_to_rgba("hsla(36, 31, 69, 0.84)").unwrap(), "rgba(200, 181, 151, 0.84)");
    assert_eq!(
        hsla_to_rgba_tuple("hsla(118, 100%, 52%, 0.56)").unwrap(),
        Rgba::new(18.0, 255.0, 10.0, 0.56)
    );

    assert_eq!(hsla_to_hsl("hsla(118, 100%, 52%, 0.56)").unwrap(), "hsl(118, 100%, 52%)");
    assert_eq!(hsla_to_hsl("hsla(360, 100%, 100%, 0.00)").unwrap(), "hsl(360, 100%, 100%)");
    assert_eq!(hsla_to_hsl("hsla(36, 31, 69, 0.84)").unwrap(), "hsl(36, 31%, 69%)");
}

#[test]
fn rgb_to_hsl_strings() {
    assert_eq!(rgb_to_hsl("rgb(24, 102, 20)").unwrap(), "hsl(117, 67%, 24%)");
    assert_eq!(rgb_to_hsl("rgb(81, 122, 179)").unwrap(), "hsl(215, 39%, 51%)");
    assert_eq!(rgb_to_hsl("rgb(184, 0, 3)").unwrap(), "hsl(359, 100%, 36%)");
    assert_eq!(
        rgb_tuple_to_hsl_tuple(Rgb::new(184.0, 0.0, 3.0), Precision::Rounded),
        Hsl::new(359.0, 100.0, 36.0)
    );
}

#[test]
fn rgb_to_hsv_strings() {
    assert_eq!(rgb_to_hsv("rgb(24, 102, 20)", HsvToken::Hsb).unwrap(), "hsb(117, 80, 40)");
    assert_eq!(rgb_to_hsv("rgb(81, 122, 179)", HsvToken::Hsb).unwrap(), "hsb(215, 55, 70)");
    assert_eq!(rgb_to_hsv("rgb(184, 0, 3)", HsvToken::Hsv).unwrap(), "hsv(359, 100, 72)");
    assert_eq!(rgb_to_hsv_tuple("rgb(0, 0, 0)").unwrap(), Hsv::new(0.0, 0.0, 0.0));
}

#[test]
fn hsv_to_rgb_strings() {
    assert_eq!(hsv_to_rgb("hsv(10, 5, 50)").unwrap(), "rgb(128, 122, 121)");
    assert_eq!(hsv_to_rgb("hsv(125, 36, 11)").unwrap(), "rgb(18, 28, 19)");
    assert_eq!(hsv_to_rgb("hsb(359, 0, 0)").unwrap(), "rgb(0, 0, 0)");
}

#[test]
fn rgb_to_hex_strings() {
    assert_eq!(rgb_to_hex("rgb(125, 244, 66)").unwrap(), "#7df442");
    assert_eq!(rgb_to_hex("rgb(255, 255, 255)").unwrap(), "#ffffff");
    assert_eq!(rgb_to_hex("rgb(0, 0, 0)").unwrap(), "#000000");
    assert_eq!(rgb_to_hex("rgb(39, 109, 65)").unwrap(), "#276d41");
}

#[test]
fn rgb_to_hex_saturates_and_truncates() {
    assert_eq!(rgb_to_hex("rgb(300, -4, 1.9)").unwrap(), "#ff0001");
}

#[test]
fn rgba_to_hex_without_reference_drops_alpha() {
    assert_eq!(rgba_to_hex("rgba(125, 244, 66, 1)", None).unwrap(), "#7df442");
    assert_eq!(rgba_to_hex("rgba(255, 255, 255, 0.5)", None).unwrap(), "#ffffff");
    assert_eq!(rgba_to_hex("rgba(0, 0, 0, 1)", None).unwrap(), "#000000");
    assert_eq!(rgba_to_hex("rgba(39, 109, 65, 0.8)", None).unwrap(), "#276d41");
}

#[test]
fn rgba_to_hex_composites_onto_reference() {
    assert_eq!(rgba_to_hex("rgba(255, 255, 255, 0)", Some("white")).unwrap(), "#ffffff");
    assert_eq!(rgba_to_hex("rgba(255, 255, 255, 0)", Some("black")).unwrap(), "#000000");
    assert_eq!(rgba_to_hex("rgba(255, 255, 255, 0)", Some("#00f")).unwrap(), "#0000ff");
    assert_eq!(
        rgba_to_hex("rgba(88, 100, 119, 0.5)", Some("rgb(255, 255, 255)")).unwrap(),
        "#abb1bb"
    );
}

#[test]
fn rgba_to_hex_reports_a_bad_reference() {
    assert!(matches!(
        rgba_to_hex("rgba(1, 2, 3, 0.5)", Some("nope")),
        Err(FormatError::Undecodable { .. })
    ));
}

#[test]
fn hex_conversions() {
    assert_eq!(hex_to_rgb("#000000").unwrap(), "rgb(0, 0, 0)");
    assert_eq!(hex_to_rgb("ffffff").unwrap(), "rgb(255, 255, 255)");
    assert_eq!(hex_to_rgb("4286f4").unwrap(), "rgb(66, 134, 244)");
    assert_eq!(hex_to_rgb_tuple("#000000").unwrap(), Rgb::new(0.0, 0.0, 0.0));

    assert_eq!(hex_to_hsl("#87eeca").unwrap(), "hsl(159, 75%, 73%)");
    assert_eq!(hex_to_hsl("#6e64a0").unwrap(), "hsl(250, 24%, 51%)");
    assert_eq!(hex_to_hsl("#1e681d").unwrap(), "hsl(119, 56%, 26%)");

    assert_eq!(hex_to_hsla("#87eeca", 1.0).unwrap(), "hsla(159, 75%, 73%, 1)");
    assert_eq!(hex_to_hsla("#6e64a0", 0.5).unwrap(), "hsla(250, 24%, 51%, 0.5)");
    assert_eq!(hex_to_hsla("#1e681d", 0.0).unwrap(), "hsla(119, 56%, 26%, 0)");
    assert_eq!(
        hex_to_hsla_tuple("#1e681d", 0.25).unwrap(),
        Hsla::new(119.0, 56.0, 26.0, 0.25)
    );
}

#[test]
fn hex_conversions_accept_any_color() {
    assert_eq!(hex_to_rgb("antiquewhite").unwrap(), "rgb(250, 235, 215)");
    assert_eq!(hex_to_rgb("hsl(96, 41%, 78%)").unwrap(), "rgb(194, 222, 176)");
    assert_eq!(hex_to_hsl("rgb(81, 122, 179)").unwrap(), "hsl(215, 39%, 51%)");
}

#[test]
fn hex_to_hsl_exact() {
    let exact = hex_to_hsl_tuple("#808080", Precision::Exact).unwrap();
    assert_eq!((exact.h, exact.s), (0.0, 0.0));
    assert!((exact.l - 50.196).abs() < 0.001, "{exact}");
}

#[test]
fn errors_surface_unchanged() {
    assert!(matches!(hex_to_rgb("#1234"), Err(FormatError::HexLength { .. })));
    assert!(matches!(hex_to_rgb("foobar"), Err(FormatError::Undecodable { .. })));
    assert!(matches!(hsl_to_rgb("hsl()", Precision::Rounded), Err(FormatError::Grammar { .. })));
    assert!(matches!(hsv_to_rgb("hsb(1, x, 2)"), Err(FormatError::Field { field: "saturation", .. })));
    assert!(matches!(rgb_to_hex("rgba(1, 2, 3, 1)"), Err(FormatError::Grammar { .. })));
}
