//! Frame-by-frame export: sample, capture, then hand the sequence to an encoder.

use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::encode::capture::{
    FrameCapture, frame_file_name, frame_pattern, padding_digits, remove_frame_files,
};
use crate::encode::ffmpeg::{EncodeJob, VideoEncoder};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::graph::SceneGraph;
use crate::timeline::playback::Timeline;
use crate::timeline::readout::frame_count;

/// One sample time of an export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledFrame {
    /// Zero-based frame index.
    pub index: u64,
    /// Sample time in seconds, `index / fps`.
    pub time: f64,
}

/// Evenly spaced sample times: `round(fps * duration)` frames at `i / fps`.
#[derive(Clone, Debug)]
pub struct FrameSchedule {
    fps: f64,
    next: u64,
    count: u64,
}

impl Iterator for FrameSchedule {
    type Item = ScheduledFrame;

    fn next(&mut self) -> Option<ScheduledFrame> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(ScheduledFrame {
            index,
            time: index as f64 / self.fps,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameSchedule {}

/// Sample times for exporting `duration` seconds at `fps`.
pub fn frame_schedule(fps: f64, duration: f64) -> FrameSchedule {
    FrameSchedule {
        fps,
        next: 0,
        count: frame_count(fps, duration),
    }
}

/// Everything an export needs: frame sampling, frame files and the encoded video.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSettings {
    /// Frames per second.
    pub fps: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Video bitrate in Mbit/s.
    pub bitrate_mbps: u32,
    /// Directory the frame files are written to.
    pub frames_dir: PathBuf,
    /// Frame file prefix.
    pub name: String,
    /// Encoded video path.
    pub out_path: PathBuf,
    /// Overwrite `out_path` if it exists.
    pub overwrite: bool,
    /// Keep frame files after a successful encode.
    pub keep_frames: bool,
}

impl ExportSettings {
    /// Defaults of 30 fps, 1280x720 at 8 Mbit/s, frames named `frame<N>.png`.
    pub fn new(frames_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            fps: 30.0,
            width: 1280,
            height: 720,
            bitrate_mbps: 8,
            frames_dir: frames_dir.into(),
            name: "frame".to_owned(),
            out_path: out_path.into(),
            overwrite: true,
            keep_frames: false,
        }
    }

    /// Check the settings used while capturing frames.
    pub fn validate_frames(&self) -> ReelResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ReelError::validation(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }
        if self.name.is_empty() || self.name.contains(['/', '\\', '%']) {
            return Err(ReelError::validation(format!(
                "frame name '{}' must be non-empty and must not contain '/', '\\' or '%'",
                self.name
            )));
        }
        Ok(())
    }

    /// Check every setting, including the ones only the encoder uses.
    pub fn validate(&self) -> ReelResult<()> {
        self.validate_frames()?;
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ReelError::validation(
                "width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.bitrate_mbps == 0 {
            return Err(ReelError::validation("bitrate must be non-zero"));
        }
        Ok(())
    }
}

/// Progress reported after each captured frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportProgress {
    /// Index of the frame just captured.
    pub frame: u64,
    /// Frames in the whole export.
    pub total_frames: u64,
    /// Sample time of the frame.
    pub time: f64,
    /// File the frame was written to.
    pub path: PathBuf,
}

/// Result of a completed frame export.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportReport {
    /// Frames written.
    pub frame_count: u64,
    /// Digits in each frame index.
    pub padding: usize,
    /// Directory holding the frames.
    pub frames_dir: PathBuf,
    /// Encoder input pattern, e.g. `frame%03d.png`.
    pub pattern: String,
}

impl<S: SceneGraph> Timeline<S> {
    /// Sample and capture every scheduled frame in increasing time order.
    ///
    /// Each frame's state is fully applied to the scene before `capture` sees it. `progress`
    /// runs after every frame; returning `Break` stops the export with
    /// [`ReelError::Cancelled`] before the next frame.
    #[tracing::instrument(skip_all, fields(fps = settings.fps, dir = %settings.frames_dir.display()))]
    pub fn export_frames<C, F>(
        &mut self,
        settings: &ExportSettings,
        capture: &mut C,
        mut progress: F,
    ) -> ReelResult<ExportReport>
    where
        C: FrameCapture<S> + ?Sized,
        F: FnMut(&ExportProgress) -> ControlFlow<()>,
    {
        settings.validate_frames()?;
        let schedule = frame_schedule(settings.fps, self.max_duration());
        let total_frames = schedule.len() as u64;
        let padding = padding_digits(total_frames);

        std::fs::create_dir_all(&settings.frames_dir).with_context(|| {
            format!(
                "failed to create frames directory '{}'",
                settings.frames_dir.display()
            )
        })?;

        self.pause();
        tracing::info!(frames = total_frames, padding, "exporting frames");
        for frame in schedule {
            self.set_time(frame.time);
            let path = settings
                .frames_dir
                .join(frame_file_name(&settings.name, frame.index, padding));
            capture.capture_frame(self.scene(), &path, frame.index, padding)?;

            let report = ExportProgress {
                frame: frame.index,
                total_frames,
                time: frame.time,
                path,
            };
            if progress(&report).is_break() && frame.index + 1 < total_frames {
                tracing::info!(frame = frame.index + 1, "export cancelled");
                return Err(ReelError::Cancelled {
                    frame: frame.index + 1,
                });
            }
        }
        tracing::info!(frames = total_frames, "frame export finished");

        Ok(ExportReport {
            frame_count: total_frames,
            padding,
            frames_dir: settings.frames_dir.clone(),
            pattern: frame_pattern(&settings.name, padding),
        })
    }
}

/// Export every frame, encode them into a video and, unless `keep_frames` is set, delete the
/// frame files afterwards.
#[tracing::instrument(skip_all, fields(out = %settings.out_path.display()))]
pub fn render_to_mp4<S, C, E, F>(
    timeline: &mut Timeline<S>,
    settings: &ExportSettings,
    capture: &mut C,
    encoder: &E,
    progress: F,
) -> ReelResult<ExportReport>
where
    S: SceneGraph,
    C: FrameCapture<S> + ?Sized,
    E: VideoEncoder + ?Sized,
    F: FnMut(&ExportProgress) -> ControlFlow<()>,
{
    settings.validate()?;
    if timeline.max_duration() <= 0.0 {
        return Err(ReelError::validation(
            "timeline has no duration; nothing to encode",
        ));
    }
    let report = timeline.export_frames(settings, capture, progress)?;
    if report.frame_count == 0 {
        return Err(ReelError::validation(
            "timeline is shorter than one frame; nothing to encode",
        ));
    }

    let job = EncodeJob {
        frames_dir: report.frames_dir.clone(),
        pattern: report.pattern.clone(),
        width: settings.width,
        height: settings.height,
        fps: settings.fps,
        frame_count: report.frame_count,
        bitrate_mbps: settings.bitrate_mbps,
        out_path: settings.out_path.clone(),
        overwrite: settings.overwrite,
    };
    encoder.encode_frames(&job)?;

    if !settings.keep_frames {
        let removed = remove_frame_files(
            &report.frames_dir,
            &settings.name,
            report.frame_count,
            report.padding,
        )?;
        tracing::debug!(removed, "cleared frame files");
    }
    tracing::info!(frames = report.frame_count, "video written");
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/export.rs"]
mod tests;
