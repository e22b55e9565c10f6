//! Pure transform composition.
//!
//! Each active spatial transform owns one nesting level, outermost first per the element's
//! [`TransformOrder`](crate::element::order::TransformOrder). A pivoted transform `X` around `p`
//! must act as `T(p) * X * T(-p)`:
//!
//! - a pivoted level with a child sits at `p` (plus whatever its parent handed down) and hands
//!   `-p` to the child, which adds it to its own position;
//! - the innermost pivoted level has no child, so it folds the correction into its own position
//!   as `p - X(p)`;
//! - a move level absorbs any pending compensation and hands nothing down.
//!
//! With no active spatial track there is still one identity level carrying the visual.

use crate::element::model::Element;
use crate::element::order::TransformKind;
use crate::foundation::core::{Affine, Point, Rgba, UNIT_SCALE, Vec2};
use crate::foundation::math::{mul_vec2, rotate_vec2};

/// Local state of one nesting level.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LevelState {
    /// Transform that owns the level; `None` for the identity level of a static element.
    pub kind: Option<TransformKind>,
    /// Translation relative to the parent level.
    pub position: Vec2,
    /// Non-uniform scale.
    pub scale: Vec2,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
}

impl LevelState {
    fn identity(kind: Option<TransformKind>) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            scale: UNIT_SCALE,
            rotation_deg: 0.0,
        }
    }

    /// `translate(position) * rotate(rotation) * scale`.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.position)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

/// Everything needed to draw one element at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedElement {
    /// Element name.
    pub name: String,
    /// Nesting levels, outermost first; never empty.
    pub levels: Vec<LevelState>,
    /// Color applied to the visual.
    pub color: Rgba,
}

impl ComposedElement {
    /// Product of all level transforms, outermost first.
    pub fn local_to_world(&self) -> Affine {
        self.levels
            .iter()
            .fold(Affine::IDENTITY, |acc, level| acc * level.affine())
    }

    /// Map a point in the element's local space to world space.
    pub fn transform_point(&self, local: Point) -> Point {
        self.local_to_world() * local
    }
}

/// Number of nesting levels `element` needs; fixed for the element's lifetime.
pub fn level_count(element: &Element) -> usize {
    element.active_kinds().len().max(1)
}

/// Sample every track of `element` at `t` and compose the nesting levels.
pub fn compose_element(element: &Element, t: f64) -> ComposedElement {
    let active = element.active_kinds();
    let color = element
        .color()
        .map_or(Rgba::WHITE, |track| track.sample(t));

    if active.is_empty() {
        return ComposedElement {
            name: element.name().to_owned(),
            levels: vec![LevelState::identity(None)],
            color,
        };
    }

    let mut levels = Vec::with_capacity(active.len());
    let mut carry = Vec2::ZERO;
    for (i, kind) in active.iter().copied().enumerate() {
        let innermost = i + 1 == active.len();
        let mut level = LevelState::identity(Some(kind));
        match kind {
            TransformKind::Move => {
                let at = element.movement().map_or(Vec2::ZERO, |m| m.sample(t));
                level.position = at + carry;
                carry = Vec2::ZERO;
            }
            TransformKind::Zoom => {
                let (scale, pivot) = element
                    .zoom()
                    .map_or((UNIT_SCALE, Vec2::ZERO), |z| (z.sample(t), z.pivot_at(t)));
                level.scale = scale;
                if innermost {
                    level.position = carry + pivot - mul_vec2(scale, pivot);
                } else {
                    level.position = carry + pivot;
                    carry = -pivot;
                }
            }
            TransformKind::Rotate => {
                let (degrees, pivot) = element
                    .rotation()
                    .map_or((0.0, Vec2::ZERO), |r| (r.sample(t), r.pivot_at(t)));
                level.rotation_deg = degrees;
                if innermost {
                    level.position = carry + pivot - rotate_vec2(pivot, degrees);
                } else {
                    level.position = carry + pivot;
                    carry = -pivot;
                }
            }
        }
        levels.push(level);
    }

    ComposedElement {
        name: element.name().to_owned(),
        levels,
        color,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/compose.rs"]
mod tests;
