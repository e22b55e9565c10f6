use crate::animation::track::{ColorTrack, MoveTrack, RotateTrack, ZoomTrack};
use crate::element::order::{TransformKind, TransformOrder};

/// Shape drawn for an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Ellipse inscribed in the visual's box.
    Circle,
    /// Axis-aligned box.
    Rect,
}

/// Render-facing payload of an element, centred on its local origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Visual {
    /// Shape to draw.
    pub shape: ShapeKind,
    /// Width in world units before any zoom.
    pub width: f64,
    /// Height in world units before any zoom.
    pub height: f64,
}

impl Visual {
    /// Circle with the given diameter.
    pub fn circle(diameter: f64) -> Self {
        Self {
            shape: ShapeKind::Circle,
            width: diameter,
            height: diameter,
        }
    }

    /// Rectangle with the given size.
    pub fn rect(width: f64, height: f64) -> Self {
        Self {
            shape: ShapeKind::Rect,
            width,
            height,
        }
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::circle(1.0)
    }
}

/// An animated shape: a visual plus up to one track per property.
///
/// Tracks are fixed once the element is built; per-frame state is always recomputed from them.
#[derive(Clone, Debug)]
pub struct Element {
    name: String,
    visual: Visual,
    order: TransformOrder,
    movement: Option<MoveTrack>,
    color: Option<ColorTrack>,
    zoom: Option<ZoomTrack>,
    rotation: Option<RotateTrack>,
}

impl Element {
    /// Start building an element called `name`.
    pub fn builder(name: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(name)
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual payload.
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Nesting order of the spatial transforms.
    pub fn order(&self) -> TransformOrder {
        self.order
    }

    /// Movement track, if any.
    pub fn movement(&self) -> Option<&MoveTrack> {
        self.movement.as_ref()
    }

    /// Color track, if any.
    pub fn color(&self) -> Option<&ColorTrack> {
        self.color.as_ref()
    }

    /// Zoom track, if any.
    pub fn zoom(&self) -> Option<&ZoomTrack> {
        self.zoom.as_ref()
    }

    /// Rotation track, if any.
    pub fn rotation(&self) -> Option<&RotateTrack> {
        self.rotation.as_ref()
    }

    /// Whether the track behind `kind` is present.
    pub fn has(&self, kind: TransformKind) -> bool {
        match kind {
            TransformKind::Move => self.movement.is_some(),
            TransformKind::Rotate => self.rotation.is_some(),
            TransformKind::Zoom => self.zoom.is_some(),
        }
    }

    /// Spatial transforms that have a track, outermost first.
    pub fn active_kinds(&self) -> Vec<TransformKind> {
        self.order
            .kinds()
            .into_iter()
            .filter(|k| self.has(*k))
            .collect()
    }

    /// Longest of the element's tracks, or `0` without any.
    pub fn duration(&self) -> f64 {
        [
            self.movement.as_ref().map(|t| t.duration()),
            self.color.as_ref().map(|t| t.duration()),
            self.zoom.as_ref().map(|t| t.duration()),
            self.rotation.as_ref().map(|t| t.duration()),
        ]
        .into_iter()
        .flatten()
        .fold(0.0, f64::max)
    }
}

/// Builder for [`Element`].
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    inner: Element,
}

impl ElementBuilder {
    /// Element called `name` with a unit circle, the default order and no tracks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Element {
                name: name.into(),
                visual: Visual::default(),
                order: TransformOrder::default(),
                movement: None,
                color: None,
                zoom: None,
                rotation: None,
            },
        }
    }

    /// Set the visual.
    pub fn visual(mut self, visual: Visual) -> Self {
        self.inner.visual = visual;
        self
    }

    /// Set the transform order.
    pub fn order(mut self, order: TransformOrder) -> Self {
        self.inner.order = order;
        self
    }

    /// Set the movement track.
    pub fn movement(mut self, track: MoveTrack) -> Self {
        self.inner.movement = Some(track);
        self
    }

    /// Set the color track.
    pub fn color(mut self, track: ColorTrack) -> Self {
        self.inner.color = Some(track);
        self
    }

    /// Set the zoom track.
    pub fn zoom(mut self, track: ZoomTrack) -> Self {
        self.inner.zoom = Some(track);
        self
    }

    /// Set the rotation track.
    pub fn rotation(mut self, track: RotateTrack) -> Self {
        self.inner.rotation = Some(track);
        self
    }

    /// Finish the element.
    pub fn build(self) -> Element {
        self.inner
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/model.rs"]
mod tests;
