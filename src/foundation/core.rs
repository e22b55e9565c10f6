pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight-alpha RGBA color with channels nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Opaque white, the color of an element without a color track.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from its four channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a `[r, g, b, a]` array.
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Return the channels as a `[r, g, b, a]` array.
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to straight-alpha RGBA8, clamping every channel to `[0, 1]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Uniform scale of one, the scale of an element without a zoom track.
pub const UNIT_SCALE: Vec2 = Vec2::new(1.0, 1.0);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
