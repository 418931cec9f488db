use super::*;

#[test]
fn fnv_is_stable() {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn approach_never_overshoots() {
    assert_eq!(approach(0.98, 1.0, 0.05), 1.0);
    assert_eq!(approach(0.02, 0.0, 0.03), 0.0);
    assert_eq!(approach(0.5, 0.5, 0.1), 0.5);
    assert!((approach(0.2, 1.0, 0.05) - 0.25).abs() < 1e-12);
}

#[test]
fn clamp01_handles_nan() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(2.0), 1.0);
    assert_eq!(clamp01(-2.0), 0.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
}
