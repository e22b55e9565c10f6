//! Time and frame readouts for a playback position.

/// Snapshot of a playback position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackStatus {
    /// Current time in seconds.
    pub time: f64,
    /// Total duration in seconds.
    pub total: f64,
    /// `time / total`, `0` for an empty timeline.
    pub progress: f64,
    /// Current frame, `round(progress * total_frames)`.
    pub frame: u64,
    /// Frames in the whole timeline, `round(total * fps)`.
    pub total_frames: u64,
}

impl PlaybackStatus {
    /// Status at `time` of a `total`-second timeline counted at `fps`.
    pub fn new(time: f64, total: f64, fps: f64) -> Self {
        let progress = if total > 0.0 {
            (time / total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let total_frames = frame_count(fps, total);
        Self {
            time,
            total,
            progress,
            frame: (progress * total_frames as f64).round() as u64,
            total_frames,
        }
    }
}

/// `round(fps * duration)`, saturating at zero for non-positive or non-finite inputs.
pub fn frame_count(fps: f64, duration: f64) -> u64 {
    let n = (fps * duration).round();
    if n.is_finite() && n > 0.0 { n as u64 } else { 0 }
}

/// How a [`PlaybackStatus`] is rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeDisplay {
    /// `M:SS`
    #[default]
    Time,
    /// `M:SS.ss` over the total.
    TimeTotal,
    /// Frame number.
    Frame,
    /// Frame number over the total.
    FrameTotal,
}

impl TimeDisplay {
    /// The next mode in the cycle `Time -> TimeTotal -> Frame -> FrameTotal -> Time`.
    pub fn next(self) -> Self {
        match self {
            Self::Time => Self::TimeTotal,
            Self::TimeTotal => Self::Frame,
            Self::Frame => Self::FrameTotal,
            Self::FrameTotal => Self::Time,
        }
    }

    /// Readout counted from the start.
    pub fn elapsed(self, status: &PlaybackStatus) -> String {
        match self {
            Self::Time => clock(status.time),
            Self::TimeTotal => format!("{}\n/{}", precise_clock(status.time), precise_clock(status.total)),
            Self::Frame => status.frame.to_string(),
            Self::FrameTotal => format!("{}\n/{}", status.frame, status.total_frames),
        }
    }

    /// Readout counted back from the end.
    pub fn remaining(self, status: &PlaybackStatus) -> String {
        let left = (status.total - status.time).abs();
        let frames_left = status.frame as i64 - status.total_frames as i64;
        match self {
            Self::Time => format!("-{}", clock(left)),
            Self::TimeTotal => format!("-{}\n/{}", precise_clock(left), precise_clock(status.total)),
            Self::Frame => frames_left.to_string(),
            Self::FrameTotal => format!("{frames_left}\n/{}", status.total_frames),
        }
    }
}

fn split_minutes(seconds: f64) -> (u64, f64) {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor();
    (minutes as u64, seconds - minutes * 60.0)
}

fn clock(seconds: f64) -> String {
    let (m, s) = split_minutes(seconds);
    format!("{m}:{:02}", s.floor() as u64)
}

fn precise_clock(seconds: f64) -> String {
    let (m, s) = split_minutes(seconds);
    format!("{m}:{s:05.2}")
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/readout.rs"]
mod tests;
