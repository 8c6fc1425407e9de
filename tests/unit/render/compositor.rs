use super::*;

#[test]
fn unpremultiply_inverts_opaque_and_zero() {
    let mut px = vec![10, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_scales_partial_alpha() {
    // Premultiplied (64, 32, 0) at alpha 128 is straight (128, 64, 0).
    let mut px = vec![64, 32, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px[0], 128);
    assert_eq!(px[1], 64);
    assert_eq!(px[2], 0);
    assert_eq!(px[3], 128);
}

#[test]
fn shadow_color_flips_on_text_color() {
    let dark = shadow_color(Rgba8::rgb(255, 255, 255));
    let light = shadow_color(Rgba8::rgb(0x33, 0x33, 0x33));
    assert_ne!(dark, light);
    let dark8 = dark.to_rgba8();
    let light8 = light.to_rgba8();
    assert_eq!((dark8.r, dark8.g, dark8.b, dark8.a), (0, 0, 0, SHADOW_ALPHA));
    assert_eq!(
        (light8.r, light8.g, light8.b, light8.a),
        (255, 255, 255, SHADOW_ALPHA)
    );
}

#[test]
fn bezpath_conversion_preserves_elements() {
    let mut path = kurbo::BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.quad_to((10.0, 10.0), (0.0, 10.0));
    path.curve_to((0.0, 5.0), (2.0, 2.0), (0.0, 0.0));
    path.close_path();

    let cpu = bezpath_to_cpu(&path);
    assert_eq!(cpu.elements().len(), path.elements().len());
}

#[test]
fn pixmap_from_premul_bytes_validates_len() {
    assert!(pixmap_from_premul_bytes(&[0u8; 4], 2, 2).is_err());
    assert!(pixmap_from_premul_bytes(&[0u8; 16], 2, 2).is_ok());
}
