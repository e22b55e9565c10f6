//! The shared time axis: playback control, readouts and frame export.

pub(crate) mod export;
pub(crate) mod playback;
pub(crate) mod readout;
