use super::*;

#[test]
fn rgba8_quantization_clamps_and_rounds() {
    assert_eq!(Rgba::WHITE.to_rgba8(), [255, 255, 255, 255]);
    assert_eq!(Rgba::new(0.5, -1.0, 2.0, 0.0).to_rgba8(), [128, 0, 255, 0]);
}

#[test]
fn array_conversion_keeps_channel_order() {
    let c = Rgba::from_array([0.1, 0.2, 0.3, 0.4]);
    assert_eq!(c.r, 0.1);
    assert_eq!(c.a, 0.4);
    assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn default_color_is_opaque_white() {
    assert_eq!(Rgba::default(), Rgba::WHITE);
}
