use super::*;

#[test]
fn mul_div255_identity_at_255() {
    for x in [0u16, 1, 17, 128, 254, 255] {
        assert_eq!(mul_div255_u8(x, 255), x as u8);
    }
}

#[test]
fn mul_div255_zero_annihilates() {
    for x in [0u16, 1, 128, 255] {
        assert_eq!(mul_div255_u8(x, 0), 0);
    }
}

#[test]
fn mul_div255_rounds_to_nearest() {
    // 128 * 128 / 255 = 64.25 -> 64
    assert_eq!(mul_div255_u8(128, 128), 64);
    // 255 * 128 / 255 = 128
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn lerp_u8_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(10, 250, 0.0), 10);
    assert_eq!(lerp_u8(10, 250, 1.0), 250);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
}
