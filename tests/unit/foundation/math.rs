use super::*;

#[test]
fn lerp_is_exact_at_endpoints() {
    for (a, b) in [(0.1, 0.7), (-3.3, 12.9), (1e9, -1e-9)] {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}

#[test]
fn lerp_extrapolates_past_one() {
    assert_eq!(lerp(0.0, 2.0, 1.5), 3.0);
}

#[test]
fn lerp_rgba_interpolates_each_channel() {
    let c = lerp_rgba(Rgba::new(0.0, 1.0, 0.0, 1.0), Rgba::new(1.0, 0.0, 0.5, 0.0), 0.5);
    assert_eq!(c, Rgba::new(0.5, 0.5, 0.25, 0.5));
}

#[test]
fn lerp_vec2_axes_uses_independent_parameters() {
    let v = lerp_vec2_axes(Vec2::new(1.0, 1.0), Vec2::new(3.0, 5.0), 0.5, 1.0);
    assert_eq!(v, Vec2::new(2.0, 5.0));
}

#[test]
fn rotate_quarter_turn() {
    let v = rotate_vec2(Vec2::new(1.0, 0.0), 90.0);
    assert!(v.x.abs() < 1e-12);
    assert!((v.y - 1.0).abs() < 1e-12);
}
