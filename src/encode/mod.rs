//! Frame capture and video encoding collaborators used by exports.

/// Frame capture trait, PNG rasterizer and frame-file helpers.
pub mod capture;
/// `ffmpeg`-based video encoding.
pub mod ffmpeg;
