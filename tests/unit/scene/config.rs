use super::*;

fn base_config() -> RenderConfig {
    RenderConfig {
        text: "Hello world".to_string(),
        width: 512,
        height: 512,
        scheme: ColorSchemeId::Purple,
        shape: ShapeId::Rectangle,
        corner_radius: CornerRadius::Rounded,
        format: OutputFormat::Png,
    }
}

#[test]
fn validate_accepts_base_config() {
    base_config().validate().unwrap();
}

#[test]
fn validate_rejects_empty_text() {
    let mut cfg = base_config();
    cfg.text = "   ".to_string();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, TextcardError::InvalidInput(_)));
}

#[test]
fn validate_rejects_over_length_text() {
    let mut cfg = base_config();
    cfg.text = "x".repeat(MAX_TEXT_CHARS + 1);
    assert!(cfg.validate().is_err());

    // Exactly at the limit is fine.
    cfg.text = "x".repeat(MAX_TEXT_CHARS);
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_out_of_range_dimensions() {
    for (w, h) in [(0, 512), (99, 512), (512, 2049), (512, 0)] {
        let mut cfg = base_config();
        cfg.width = w;
        cfg.height = h;
        assert!(cfg.validate().is_err(), "expected rejection for {w}x{h}");
    }
}

#[test]
fn length_limit_counts_chars_not_bytes() {
    let mut cfg = base_config();
    // 128 multi-byte characters are within the limit even though the byte
    // length is larger.
    cfg.text = "ä".repeat(MAX_TEXT_CHARS);
    cfg.validate().unwrap();
}

#[test]
fn config_json_defaults_apply() {
    let cfg: RenderConfig =
        serde_json::from_str(r#"{ "text": "Hi", "width": 256, "height": 256 }"#).unwrap();
    assert_eq!(cfg.scheme, ColorSchemeId::Purple);
    assert_eq!(cfg.shape, ShapeId::Rectangle);
    assert_eq!(cfg.corner_radius, CornerRadius::Rounded);
    assert_eq!(cfg.format, OutputFormat::Png);
}

#[test]
fn config_json_full_roundtrip() {
    let cfg: RenderConfig = serde_json::from_str(
        r#"{
            "text": "Hi",
            "width": 300,
            "height": 200,
            "scheme": "midnight",
            "shape": "rounded",
            "corner_radius": "very-rounded",
            "format": "jpeg"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.scheme, ColorSchemeId::Midnight);
    assert_eq!(cfg.shape, ShapeId::Rounded);
    assert_eq!(cfg.corner_radius, CornerRadius::VeryRounded);
    assert_eq!(cfg.format, OutputFormat::Jpeg);

    let json = serde_json::to_string(&cfg).unwrap();
    let back: RenderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shape, cfg.shape);
    assert_eq!(back.corner_radius, cfg.corner_radius);
}

#[test]
fn enum_names_parse_back() {
    use std::str::FromStr as _;

    for id in ColorSchemeId::ALL {
        assert_eq!(ColorSchemeId::from_str(id.name()).unwrap(), id);
    }
    for id in ShapeId::ALL {
        assert_eq!(ShapeId::from_str(id.name()).unwrap(), id);
    }
    for r in CornerRadius::ALL {
        assert_eq!(CornerRadius::from_str(r.name()).unwrap(), r);
    }
    assert!(ShapeId::from_str("blob").is_err());
    assert_eq!(OutputFormat::from_str("jpg").unwrap(), OutputFormat::Jpeg);
}

#[test]
fn corner_radius_pixel_table() {
    assert_eq!(CornerRadius::Sharp.radius_px(512, 512), 0.0);
    assert_eq!(CornerRadius::Slight.radius_px(512, 512), 8.0);
    assert_eq!(CornerRadius::Rounded.radius_px(512, 512), 16.0);
    assert_eq!(CornerRadius::VeryRounded.radius_px(512, 512), 32.0);
    assert_eq!(CornerRadius::Pill.radius_px(512, 256), 128.0);
}

#[test]
fn mime_types_match_formats() {
    assert_eq!(OutputFormat::Png.mime_type(), "image/png");
    assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
}
