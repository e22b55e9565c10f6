//! JSON timeline documents.
//!
//! A document lists elements and their track segments plus an optional `render` section. Every
//! definition is lowered through the validating runtime constructors, so a bad duration in JSON
//! fails the same way it would in code.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::animation::function::Function;
use crate::animation::path::{FunctionPath, ParametricPath, Path as MotionPath};
use crate::animation::progression::Progression;
use crate::animation::track::{ColorTrack, MoveTrack, RotateTrack, ZoomTrack};
use crate::element::model::{Element, Visual};
use crate::element::order::TransformOrder;
use crate::encode::capture::PngCapture;
use crate::foundation::core::{Rgba, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::export::ExportSettings;

/// Root of a timeline document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDoc {
    /// Output settings.
    #[serde(default)]
    pub render: RenderDef,
    /// Elements in draw order.
    pub elements: Vec<ElementDef>,
}

impl TimelineDoc {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> ReelResult<Self> {
        serde_json::from_str(json).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Read and parse a document file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> ReelResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read timeline json '{}'", path.display()))?;
        let doc = Self::from_json_str(&text)?;
        doc.validate()?;
        tracing::debug!(elements = doc.elements.len(), "loaded timeline document");
        Ok(doc)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Check invariants that JSON parsing alone cannot express.
    pub fn validate(&self) -> ReelResult<()> {
        self.render.validate()?;
        let mut seen = std::collections::BTreeSet::new();
        for (i, e) in self.elements.iter().enumerate() {
            if e.name.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "elements[{i}] must have a non-empty name"
                )));
            }
            if !seen.insert(e.name.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate element name '{}'",
                    e.name
                )));
            }
            if !(e.visual.width > 0.0 && e.visual.height > 0.0) {
                return Err(ReelError::validation(format!(
                    "element '{}' visual width/height must be > 0",
                    e.name
                )));
            }
        }
        Ok(())
    }

    /// Build runtime elements.
    pub fn to_elements(&self) -> ReelResult<Vec<Element>> {
        self.elements.iter().map(ElementDef::to_element).collect()
    }
}

/// Output settings of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDef {
    /// Frames per second.
    pub fps: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Video bitrate in Mbit/s.
    pub bitrate_mbps: u32,
    /// Pixels per world unit.
    pub pixels_per_unit: f64,
    /// Background color.
    pub background: ColorDef,
    /// Frame file prefix.
    pub name: String,
}

impl Default for RenderDef {
    fn default() -> Self {
        Self {
            fps: 30.0,
            width: 1280,
            height: 720,
            bitrate_mbps: 8,
            pixels_per_unit: 100.0,
            background: ColorDef::from(Rgba::BLACK),
            name: "frame".to_owned(),
        }
    }
}

impl RenderDef {
    /// Check the settings shared by every export path.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ReelError::validation("render.fps must be finite and > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("render.width/height must be non-zero"));
        }
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(ReelError::validation(
                "render.pixels_per_unit must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Rasterizer configured from these settings.
    pub fn png_capture(&self) -> PngCapture {
        PngCapture {
            width: self.width,
            height: self.height,
            pixels_per_unit: self.pixels_per_unit,
            background: self.background.into(),
        }
    }

    /// Export settings writing frames to `frames_dir` and the video to `out_path`.
    pub fn export_settings(
        &self,
        frames_dir: impl Into<std::path::PathBuf>,
        out_path: impl Into<std::path::PathBuf>,
    ) -> ExportSettings {
        ExportSettings {
            fps: self.fps,
            width: self.width,
            height: self.height,
            bitrate_mbps: self.bitrate_mbps,
            name: self.name.clone(),
            ..ExportSettings::new(frames_dir, out_path)
        }
    }
}

/// 2D vector written as `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2Def {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl<'de> Deserialize<'de> for Vec2Def {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Straight-alpha color written as `[r, g, b, a]`, `[r, g, b]` or `{"r": .., ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Rgba([f64; 4]),
            Rgb([f64; 3]),
            Obj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "opaque")]
                a: f64,
            },
        }

        fn opaque() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Rgba([r, g, b, a]) => Ok(Self { r, g, b, a }),
            Repr::Rgb([r, g, b]) => Ok(Self { r, g, b, a: 1.0 }),
            Repr::Obj { r, g, b, a } => Ok(Self { r, g, b, a }),
        }
    }
}

impl From<Rgba> for ColorDef {
    fn from(c: Rgba) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<ColorDef> for Rgba {
    fn from(c: ColorDef) -> Self {
        Rgba::new(c.r, c.g, c.b, c.a)
    }
}

/// Timing of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionDef {
    /// Linear.
    Constant {
        /// Seconds.
        duration: f64,
    },
    /// Quadratic ramps at both ends.
    EaseInOut {
        /// Seconds.
        duration: f64,
        /// Ramp length in seconds.
        ease: f64,
    },
    /// Overshoot and settle.
    RubberBand {
        /// Seconds.
        duration: f64,
        /// Overshoot time in seconds.
        overshoot: f64,
    },
}

impl ProgressionDef {
    /// Build the runtime progression.
    pub fn to_progression(self) -> ReelResult<Progression> {
        match self {
            Self::Constant { duration } => Progression::constant(duration),
            Self::EaseInOut { duration, ease } => Progression::ease_in_out(ease, duration),
            Self::RubberBand {
                duration,
                overshoot,
            } => Progression::rubber_band(overshoot, duration),
        }
    }
}

/// Base curve of a [`FunctionDef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDef {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `csc`
    Csc,
    /// `sec`
    Sec,
    /// `cot`
    Cot,
    /// `x^2`
    Quadratic,
    /// `a*x^2 + b*x + c`
    QuadraticCoefficients {
        /// `x^2` coefficient.
        a: f64,
        /// `x` coefficient.
        b: f64,
        /// Constant term.
        c: f64,
    },
    /// `sqrt`
    Sqrt,
    /// Ascending coefficients.
    Polynomial(Vec<f64>),
    /// `e^x`
    Exp,
    /// `base^x`
    Exponential(f64),
    /// Natural log.
    Ln,
    /// `log_base(x)`
    Log(f64),
}

/// A base curve plus optional shift/stretch overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Base curve.
    pub base: BaseDef,
    /// Vertical shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_shift: Option<f64>,
    /// Horizontal shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_shift: Option<f64>,
    /// Vertical stretch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_stretch: Option<f64>,
    /// Horizontal stretch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_stretch: Option<f64>,
}

impl FunctionDef {
    /// Build the runtime function; overrides replace whatever the base set.
    pub fn to_function(&self) -> Function {
        let mut f = match &self.base {
            BaseDef::Sin => Function::sin(),
            BaseDef::Cos => Function::cos(),
            BaseDef::Tan => Function::tan(),
            BaseDef::Csc => Function::csc(),
            BaseDef::Sec => Function::sec(),
            BaseDef::Cot => Function::cot(),
            BaseDef::Quadratic => Function::quadratic(),
            BaseDef::QuadraticCoefficients { a, b, c } => {
                Function::quadratic_from_coefficients(*a, *b, *c)
            }
            BaseDef::Sqrt => Function::sqrt(),
            BaseDef::Polynomial(coefficients) => Function::polynomial(coefficients.clone()),
            BaseDef::Exp => Function::exp(),
            BaseDef::Exponential(base) => Function::exponential(*base),
            BaseDef::Ln => Function::ln(),
            BaseDef::Log(base) => Function::log(*base),
        };
        if let Some(v) = self.vertical_shift {
            f = f.vertical_shift(v);
        }
        if let Some(v) = self.horizontal_shift {
            f = f.horizontal_shift(v);
        }
        if let Some(v) = self.vertical_stretch {
            f = f.vertical_stretch(v);
        }
        if let Some(v) = self.horizontal_stretch {
            f = f.horizontal_stretch(v);
        }
        f
    }
}

/// Shape of a movement segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathDef {
    /// Fixed point.
    Still(Vec2Def),
    /// Straight line.
    Linear {
        /// Start.
        from: Vec2Def,
        /// End.
        to: Vec2Def,
    },
    /// `y = f(x)`.
    Function {
        /// Curve.
        function: FunctionDef,
        /// `x` at the start.
        x_start: f64,
        /// `x` at the end.
        x_end: f64,
    },
    /// `(x(t), y(t))`.
    Parametric {
        /// Horizontal component.
        x: FunctionDef,
        /// Vertical component.
        y: FunctionDef,
        /// `t` at the start.
        t_start: f64,
        /// `t` at the end.
        t_end: f64,
    },
}

impl PathDef {
    /// Build the runtime path.
    pub fn to_path(&self) -> MotionPath {
        match self {
            Self::Still(at) => MotionPath::still((*at).into()),
            Self::Linear { from, to } => MotionPath::linear((*from).into(), (*to).into()),
            Self::Function {
                function,
                x_start,
                x_end,
            } => FunctionPath::new(function.to_function(), *x_start, *x_end).into(),
            Self::Parametric {
                x,
                y,
                t_start,
                t_end,
            } => ParametricPath::new(x.to_function(), y.to_function(), *t_start, *t_end).into(),
        }
    }
}

/// One movement segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDef {
    /// Timing.
    pub progression: ProgressionDef,
    /// Shape.
    pub path: PathDef,
}

/// One color segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSegmentDef {
    /// Fade between two colors.
    Fade {
        /// Timing.
        progression: ProgressionDef,
        /// Start color.
        from: ColorDef,
        /// End color.
        to: ColorDef,
    },
    /// Keep one color.
    Hold {
        /// Color to keep.
        color: ColorDef,
        /// Seconds.
        duration: f64,
    },
}

/// One zoom segment; `height_progression` defaults to `progression`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomDef {
    /// Timing of the width, and of the height unless overridden.
    pub progression: ProgressionDef,
    /// Separate timing of the height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_progression: Option<ProgressionDef>,
    /// Start size.
    pub from: Vec2Def,
    /// End size.
    pub to: Vec2Def,
    /// Fixed point.
    #[serde(default)]
    pub pivot: Vec2Def,
}

/// One rotation segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotateDef {
    /// Timing.
    pub progression: ProgressionDef,
    /// Start angle in degrees.
    pub from: f64,
    /// End angle in degrees.
    pub to: f64,
    /// Fixed point.
    #[serde(default)]
    pub pivot: Vec2Def,
}

/// One element; empty segment lists mean "no track".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    /// Unique name.
    pub name: String,
    /// Shape and size.
    #[serde(default)]
    pub visual: Visual,
    /// Nesting order of spatial transforms.
    #[serde(default)]
    pub order: TransformOrder,
    /// Movement segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movement: Vec<MoveDef>,
    /// Color segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<ColorSegmentDef>,
    /// Zoom segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zoom: Vec<ZoomDef>,
    /// Rotation segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rotation: Vec<RotateDef>,
}

impl ElementDef {
    /// Build the runtime element.
    pub fn to_element(&self) -> ReelResult<Element> {
        let mut b = Element::builder(self.name.clone())
            .visual(self.visual)
            .order(self.order);

        if !self.movement.is_empty() {
            let mut t = MoveTrack::builder();
            for seg in &self.movement {
                t = t.path(seg.progression.to_progression()?, seg.path.to_path());
            }
            b = b.movement(t.build()?);
        }

        if !self.color.is_empty() {
            let mut t = ColorTrack::builder();
            for seg in &self.color {
                t = match seg {
                    ColorSegmentDef::Fade {
                        progression,
                        from,
                        to,
                    } => t.fade(progression.to_progression()?, (*from).into(), (*to).into()),
                    ColorSegmentDef::Hold { color, duration } => {
                        t.hold((*color).into(), *duration)?
                    }
                };
            }
            b = b.color(t.build()?);
        }

        if !self.zoom.is_empty() {
            let mut t = ZoomTrack::builder();
            for seg in &self.zoom {
                let width = seg.progression.to_progression()?;
                let height = match seg.height_progression {
                    Some(p) => p.to_progression()?,
                    None => width,
                };
                t = t.zoom_axes(width, height, seg.from.into(), seg.to.into(), seg.pivot.into());
            }
            b = b.zoom(t.build()?);
        }

        if !self.rotation.is_empty() {
            let mut t = RotateTrack::builder();
            for seg in &self.rotation {
                t = t.rotate_around(
                    seg.progression.to_progression()?,
                    seg.from,
                    seg.to,
                    seg.pivot.into(),
                );
            }
            b = b.rotation(t.build()?);
        }

        Ok(b.build())
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
