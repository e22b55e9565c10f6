//! Piecewise tracks: ordered segments sampled by absolute elapsed time.

use crate::animation::path::Path;
use crate::animation::progression::Progression;
use crate::foundation::core::{Rgba, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::{lerp, lerp_rgba, lerp_vec2_axes};

/// One timed piece of a [`Track`].
pub trait Segment {
    /// Sampled quantity.
    type Value: Copy;

    /// Track kind, used in diagnostics.
    const KIND: &'static str;

    /// Length of the segment in seconds.
    fn duration(&self) -> f64;

    /// Value at local time `time`, with `0 <= time < duration()` in normal use.
    fn sample_local(&self, time: f64) -> Self::Value;

    /// Value at the start of the segment.
    fn start_value(&self) -> Self::Value;

    /// Nominal value at the end of the segment.
    fn end_value(&self) -> Self::Value;

    /// Point that zoom/rotation happens around, if the segment has one.
    fn pivot(&self) -> Option<Vec2> {
        None
    }
}

/// Immutable ordered sequence of segments.
///
/// A segment's window is `[cumulative_start, cumulative_start + duration)`. Queries at or
/// before `0` land exactly on the first start value and queries at or after
/// [`Track::duration`] land exactly on the last end value.
#[derive(Clone, Debug, PartialEq)]
pub struct Track<S> {
    // Non-empty by construction.
    segments: Vec<S>,
    duration: f64,
}

impl<S: Segment> Track<S> {
    /// Start an empty builder.
    pub fn builder() -> TrackBuilder<S> {
        TrackBuilder::new()
    }

    /// Sum of all segment durations.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `true` once `t` has reached the end of the track.
    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.duration
    }

    /// Segments in time order.
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    /// Sampled value at absolute time `t`.
    pub fn sample(&self, t: f64) -> S::Value {
        if t <= 0.0 {
            return self.segments[0].start_value();
        }
        if t >= self.duration {
            return self.last().end_value();
        }
        let mut remaining = t;
        for seg in &self.segments {
            let d = seg.duration();
            if remaining < d {
                return seg.sample_local(remaining);
            }
            remaining -= d;
        }
        // Accumulated rounding can leave `t` a hair past the last window.
        self.last().end_value()
    }

    /// Pivot of the segment containing `t`; pivots switch discretely at segment boundaries.
    pub fn pivot_at(&self, t: f64) -> Vec2 {
        self.segment_at(t).pivot().unwrap_or(Vec2::ZERO)
    }

    fn segment_at(&self, t: f64) -> &S {
        if t <= 0.0 {
            return &self.segments[0];
        }
        let mut remaining = t;
        for seg in &self.segments {
            let d = seg.duration();
            if remaining < d {
                return seg;
            }
            remaining -= d;
        }
        self.last()
    }

    fn last(&self) -> &S {
        &self.segments[self.segments.len() - 1]
    }
}

/// Collects segments and produces an immutable [`Track`].
#[derive(Clone, Debug)]
pub struct TrackBuilder<S> {
    segments: Vec<S>,
}

impl<S> Default for TrackBuilder<S> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<S: Segment> TrackBuilder<S> {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment after every segment added so far.
    pub fn segment(mut self, segment: S) -> Self {
        self.segments.push(segment);
        self
    }

    /// Finish the track; fails with [`ReelError::EmptyTrack`] when nothing was added.
    pub fn build(self) -> ReelResult<Track<S>> {
        if self.segments.is_empty() {
            return Err(ReelError::EmptyTrack(S::KIND));
        }
        let duration: f64 = self.segments.iter().map(S::duration).sum();
        Ok(Track {
            segments: self.segments,
            duration,
        })
    }
}

/// Movement along a [`Path`].
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSegment {
    /// Timing.
    pub progression: Progression,
    /// Shape.
    pub path: Path,
}

impl Segment for MoveSegment {
    type Value = Vec2;
    const KIND: &'static str = "move";

    fn duration(&self) -> f64 {
        self.progression.duration()
    }

    fn sample_local(&self, time: f64) -> Vec2 {
        self.path.position(self.progression.percent(time))
    }

    fn start_value(&self) -> Vec2 {
        self.path.position(0.0)
    }

    fn end_value(&self) -> Vec2 {
        self.path.position(1.0)
    }
}

/// Channel-wise fade between two colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSegment {
    /// Timing.
    pub progression: Progression,
    /// Color at the start.
    pub from: Rgba,
    /// Color at the end.
    pub to: Rgba,
}

impl Segment for ColorSegment {
    type Value = Rgba;
    const KIND: &'static str = "color";

    fn duration(&self) -> f64 {
        self.progression.duration()
    }

    fn sample_local(&self, time: f64) -> Rgba {
        lerp_rgba(self.from, self.to, self.progression.percent(time))
    }

    fn start_value(&self) -> Rgba {
        self.from
    }

    fn end_value(&self) -> Rgba {
        self.to
    }
}

/// Width/height change around a pivot.
///
/// Width and height run on their own progressions; the segment lasts as long as the longer one
/// and the shorter axis holds its end size for the remainder.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomSegment {
    /// Timing of the width.
    pub width: Progression,
    /// Timing of the height.
    pub height: Progression,
    /// Size at the start.
    pub from: Vec2,
    /// Size at the end.
    pub to: Vec2,
    /// Fixed point of the zoom.
    pub pivot: Vec2,
}

impl Segment for ZoomSegment {
    type Value = Vec2;
    const KIND: &'static str = "zoom";

    fn duration(&self) -> f64 {
        self.width.duration().max(self.height.duration())
    }

    fn sample_local(&self, time: f64) -> Vec2 {
        lerp_vec2_axes(
            self.from,
            self.to,
            self.width.percent(time),
            self.height.percent(time),
        )
    }

    fn start_value(&self) -> Vec2 {
        self.from
    }

    fn end_value(&self) -> Vec2 {
        self.to
    }

    fn pivot(&self) -> Option<Vec2> {
        Some(self.pivot)
    }
}

/// Rotation in degrees around a pivot; positive is counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct RotateSegment {
    /// Timing.
    pub progression: Progression,
    /// Angle at the start.
    pub from_deg: f64,
    /// Angle at the end.
    pub to_deg: f64,
    /// Fixed point of the rotation.
    pub pivot: Vec2,
}

impl Segment for RotateSegment {
    type Value = f64;
    const KIND: &'static str = "rotate";

    fn duration(&self) -> f64 {
        self.progression.duration()
    }

    fn sample_local(&self, time: f64) -> f64 {
        lerp(self.from_deg, self.to_deg, self.progression.percent(time))
    }

    fn start_value(&self) -> f64 {
        self.from_deg
    }

    fn end_value(&self) -> f64 {
        self.to_deg
    }

    fn pivot(&self) -> Option<Vec2> {
        Some(self.pivot)
    }
}

/// Position over time.
pub type MoveTrack = Track<MoveSegment>;
/// Color over time.
pub type ColorTrack = Track<ColorSegment>;
/// Size over time, with a pivot.
pub type ZoomTrack = Track<ZoomSegment>;
/// Angle over time, with a pivot.
pub type RotateTrack = Track<RotateSegment>;

impl TrackBuilder<MoveSegment> {
    /// Move along `path` with `progression` timing.
    pub fn path(self, progression: Progression, path: Path) -> Self {
        self.segment(MoveSegment { progression, path })
    }
}

impl TrackBuilder<ColorSegment> {
    /// Fade from `from` to `to`.
    pub fn fade(self, progression: Progression, from: Rgba, to: Rgba) -> Self {
        self.segment(ColorSegment {
            progression,
            from,
            to,
        })
    }

    /// Keep `color` for `duration` seconds.
    pub fn hold(self, color: Rgba, duration: f64) -> ReelResult<Self> {
        Ok(self.fade(Progression::constant(duration)?, color, color))
    }
}

impl TrackBuilder<ZoomSegment> {
    /// Resize around the origin.
    pub fn zoom(self, progression: Progression, from: Vec2, to: Vec2) -> Self {
        self.zoom_around(progression, from, to, Vec2::ZERO)
    }

    /// Resize around `pivot`, both axes sharing one progression.
    pub fn zoom_around(self, progression: Progression, from: Vec2, to: Vec2, pivot: Vec2) -> Self {
        self.zoom_axes(progression, progression, from, to, pivot)
    }

    /// Resize around `pivot` with independent width and height timing.
    pub fn zoom_axes(
        self,
        width: Progression,
        height: Progression,
        from: Vec2,
        to: Vec2,
        pivot: Vec2,
    ) -> Self {
        self.segment(ZoomSegment {
            width,
            height,
            from,
            to,
            pivot,
        })
    }
}

impl TrackBuilder<RotateSegment> {
    /// Rotate around the origin.
    pub fn rotate(self, progression: Progression, from_deg: f64, to_deg: f64) -> Self {
        self.rotate_around(progression, from_deg, to_deg, Vec2::ZERO)
    }

    /// Rotate around `pivot`.
    pub fn rotate_around(
        self,
        progression: Progression,
        from_deg: f64,
        to_deg: f64,
        pivot: Vec2,
    ) -> Self {
        self.segment(RotateSegment {
            progression,
            from_deg,
            to_deg,
            pivot,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
