use crate::foundation::error::{ReelError, ReelResult};

/// Maps elapsed time within a segment to a normalized progress value.
///
/// `percent(0) == 0` and `percent(duration) == 1` hold exactly for every variant. Inputs are
/// clamped to `[0, duration]`. [`Progression::RubberBand`] overshoots past `1` near its end before
/// settling; the other variants stay within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progression {
    /// Linear progress.
    Constant {
        /// Total time in seconds.
        duration: f64,
    },
    /// Quadratic ramp up, linear middle, quadratic ramp down.
    EaseInOut {
        /// Total time in seconds.
        duration: f64,
        /// Length of each ramp, already clamped to `duration / 2`.
        ease: f64,
    },
    /// Linear rise followed by a parabola that overshoots `1` and settles back.
    RubberBand {
        /// Total time in seconds.
        duration: f64,
        /// Half the requested overshoot time, clamped to `duration / 3`.
        rubber: f64,
    },
}

impl Progression {
    /// Linear progression over `duration` seconds.
    pub fn constant(duration: f64) -> ReelResult<Self> {
        Ok(Self::Constant {
            duration: checked_duration(duration)?,
        })
    }

    /// Eased progression; `ease` is clamped to `duration / 2`.
    ///
    /// A non-positive `ease` behaves like [`Progression::constant`].
    pub fn ease_in_out(ease: f64, duration: f64) -> ReelResult<Self> {
        let duration = checked_duration(duration)?;
        let ease = ease.min(duration / 2.0);
        if ease.is_nan() || ease <= 0.0 {
            return Ok(Self::Constant { duration });
        }
        Ok(Self::EaseInOut { duration, ease })
    }

    /// Overshoot-and-settle progression.
    ///
    /// `overshoot` is halved and then clamped to `duration / 3`. A non-positive `overshoot`
    /// behaves like [`Progression::constant`].
    pub fn rubber_band(overshoot: f64, duration: f64) -> ReelResult<Self> {
        let duration = checked_duration(duration)?;
        let rubber = (overshoot / 2.0).min(duration / 3.0);
        if rubber.is_nan() || rubber <= 0.0 {
            return Ok(Self::Constant { duration });
        }
        Ok(Self::RubberBand { duration, rubber })
    }

    /// Total time of the progression in seconds.
    pub fn duration(&self) -> f64 {
        match *self {
            Self::Constant { duration }
            | Self::EaseInOut { duration, .. }
            | Self::RubberBand { duration, .. } => duration,
        }
    }

    /// Progress at `time` seconds into the progression.
    pub fn percent(&self, time: f64) -> f64 {
        let duration = self.duration();
        if time <= 0.0 {
            return 0.0;
        }
        if time >= duration {
            return 1.0;
        }

        match *self {
            Self::Constant { duration } => time / duration,
            Self::EaseInOut { duration, ease } => {
                let denom = 2.0 * ease * duration - 2.0 * ease * ease;
                if time <= ease {
                    time * time / denom
                } else if time <= duration - ease {
                    (2.0 * ease * time - ease * ease) / denom
                } else {
                    let rest = time - duration;
                    (denom - rest * rest) / denom
                }
            }
            Self::RubberBand { duration, rubber } => {
                let denom = 2.0 * rubber * duration - 4.0 * rubber * rubber;
                if time <= duration - 2.0 * rubber {
                    2.0 * rubber * time / denom
                } else {
                    let off = time - duration + rubber;
                    (2.0 * rubber * duration - 3.0 * rubber * rubber - off * off) / denom
                }
            }
        }
    }
}

fn checked_duration(duration: f64) -> ReelResult<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ReelError::InvalidDuration(duration));
    }
    Ok(duration)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progression.rs"]
mod tests;
