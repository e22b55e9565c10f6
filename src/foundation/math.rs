use crate::foundation::core::{Rgba, Vec2};

/// `a*(1-t) + b*t`; exact at `t == 0` and `t == 1`, and unclamped so overshoot
/// progressions can travel past `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Componentwise [`lerp`].
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Per-axis [`lerp`] with independent parameters.
#[inline]
pub fn lerp_vec2_axes(a: Vec2, b: Vec2, tx: f64, ty: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, tx), lerp(a.y, b.y, ty))
}

/// Each RGBA channel interpolated independently.
#[inline]
pub fn lerp_rgba(a: Rgba, b: Rgba, t: f64) -> Rgba {
    Rgba::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

/// Rotate `v` counter-clockwise by `degrees`.
#[inline]
pub fn rotate_vec2(v: Vec2, degrees: f64) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Componentwise product.
#[inline]
pub fn mul_vec2(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
