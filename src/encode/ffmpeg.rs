use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{ReelError, ReelResult};

/// A finished frame sequence to encode into one video.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeJob {
    /// Directory holding the frames.
    pub frames_dir: PathBuf,
    /// Frame file pattern inside `frames_dir`, e.g. `frame%03d.png`.
    pub pattern: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: f64,
    /// Frames to read.
    pub frame_count: u64,
    /// Video bitrate in Mbit/s.
    pub bitrate_mbps: u32,
    /// Output video path.
    pub out_path: PathBuf,
    /// Overwrite `out_path` if it already exists.
    pub overwrite: bool,
}

impl EncodeJob {
    /// Check the job before anything is spawned.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ReelError::validation("fps must be finite and > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation(
                "encoder width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ReelError::validation(
                "encoder width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.frame_count == 0 {
            return Err(ReelError::validation("no frames to encode"));
        }
        if self.bitrate_mbps == 0 {
            return Err(ReelError::validation("bitrate must be non-zero"));
        }
        if !self.overwrite && self.out_path.exists() {
            return Err(ReelError::validation(format!(
                "output file '{}' already exists",
                self.out_path.display()
            )));
        }
        Ok(())
    }
}

/// Turns a frame sequence on disk into a video file.
pub trait VideoEncoder {
    /// Encode `job`, blocking until the video is written.
    fn encode_frames(&self, job: &EncodeJob) -> ReelResult<()>;
}

/// [`VideoEncoder`] that runs the system `ffmpeg` (H.264, yuv420p, MP4).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl FfmpegEncoder {
    /// Encoder running `program`, normally `ffmpeg` resolved through `PATH`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this encoder runs.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Build the command for `job` without running it.
    pub fn command(&self, job: &EncodeJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if job.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }
        cmd.args(["-loglevel", "error", "-framerate"])
            .arg(format_fps(job.fps))
            .arg("-i")
            .arg(job.frames_dir.join(&job.pattern))
            .args(["-frames:v", &job.frame_count.to_string()])
            .args(["-s", &format!("{}x{}", job.width, job.height)])
            // Output: h264 + yuv420p for broad compatibility.
            .args(["-c:v", "libx264", "-pix_fmt", "yuv420p"])
            .args(["-b:v", &format!("{}M", job.bitrate_mbps)])
            .args(["-movflags", "+faststart"])
            .arg(&job.out_path);
        cmd
    }
}

impl VideoEncoder for FfmpegEncoder {
    #[tracing::instrument(skip_all, fields(out = %job.out_path.display(), frames = job.frame_count))]
    fn encode_frames(&self, job: &EncodeJob) -> ReelResult<()> {
        job.validate()?;
        ensure_parent_dir(&job.out_path)?;

        let output = self.command(job).output().map_err(|e| ReelError::EncodeFailed {
            exit_code: None,
            stderr: format!(
                "failed to spawn '{}' (is it installed and on PATH?): {e}",
                self.program.display()
            ),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            tracing::warn!(status = %output.status, %stderr, "encoder exited with failure");
            return Err(ReelError::EncodeFailed {
                exit_code: output.status.code(),
                stderr,
            });
        }
        tracing::debug!(stdout = %String::from_utf8_lossy(&output.stdout).trim(), "encoder finished");
        Ok(())
    }
}

fn format_fps(fps: f64) -> String {
    if fps.fract() == 0.0 {
        format!("{}", fps as u64)
    } else {
        fps.to_string()
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
