//! shapereel turns declarative 2D shape animations into deterministic per-frame state.
//!
//! Each [`Element`] carries up to one track per property (movement, color, zoom, rotation). A
//! track is an ordered list of timed segments; sampling it at any time is a pure function. Zoom
//! and rotation happen around pivots, and the spatial tracks of an element are nested in a
//! configurable [`TransformOrder`] so every pivot stays where it belongs.
//!
//! - Build elements in code or load a [`TimelineDoc`] from JSON
//! - Drive them through a [`Timeline`] bound to a [`SceneGraph`] (e.g. [`SceneTree`])
//! - Export frames through a [`FrameCapture`] (e.g. [`PngCapture`]) and encode them with a
//!   [`VideoEncoder`] (e.g. [`FfmpegEncoder`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// JSON timeline documents.
pub mod document;
pub(crate) mod element;
/// Frame capture and video encoding.
pub mod encode;
pub(crate) mod scene;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, Point, Rect, Rgba, UNIT_SCALE, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::function::{Function, FunctionKind};
pub use crate::animation::path::{FunctionPath, ParametricPath, Path};
pub use crate::animation::progression::Progression;
pub use crate::animation::track::{
    ColorSegment, ColorTrack, MoveSegment, MoveTrack, RotateSegment, RotateTrack, Segment, Track,
    TrackBuilder, ZoomSegment, ZoomTrack,
};
pub use crate::document::TimelineDoc;
pub use crate::element::binding::RenderBinding;
pub use crate::element::compose::{ComposedElement, LevelState, compose_element, level_count};
pub use crate::element::model::{Element, ElementBuilder, ShapeKind, Visual};
pub use crate::element::order::{TransformKind, TransformOrder};
pub use crate::encode::capture::{
    FrameCapture, PngCapture, clear_frames, clear_videos, frame_file_name, frame_pattern,
    padding_digits, remove_frame_files,
};
pub use crate::encode::ffmpeg::{
    EncodeJob, FfmpegEncoder, VideoEncoder, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use crate::scene::graph::{NodeId, SceneGraph};
pub use crate::scene::tree::{SceneNode, SceneTree, WorldVisual};
pub use crate::timeline::export::{
    ExportProgress, ExportReport, ExportSettings, FrameSchedule, ScheduledFrame, frame_schedule,
    render_to_mp4,
};
pub use crate::timeline::playback::{PlayState, Timeline};
pub use crate::timeline::readout::{PlaybackStatus, TimeDisplay, frame_count};
