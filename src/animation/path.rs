use crate::animation::function::Function;
use crate::foundation::core::Vec2;
use crate::foundation::math::{lerp, lerp_vec2};

/// Shape of a movement, independent of its timing.
///
/// A path maps a progress value (normally `[0, 1]`, briefly outside it under a rubber-band
/// progression) to a position. Every variant is a pure function of progress.
#[derive(Clone, Debug, PartialEq)]
pub enum Path {
    /// Always the same point.
    Still(Vec2),
    /// Straight line from `from` to `to`.
    Linear {
        /// Position at progress `0`.
        from: Vec2,
        /// Position at progress `1`.
        to: Vec2,
    },
    /// Graph of `y = f(x)` with `x` swept across a range.
    Function(FunctionPath),
    /// `(fx(t), fy(t))` with `t` swept across a range.
    Parametric(ParametricPath),
}

impl Path {
    /// A path that stays at `at`.
    pub fn still(at: Vec2) -> Self {
        Self::Still(at)
    }

    /// A straight path from `from` to `to`.
    pub fn linear(from: Vec2, to: Vec2) -> Self {
        Self::Linear { from, to }
    }

    /// Position at `percent`.
    ///
    /// Out-of-domain function evaluations fall back to the origin.
    pub fn position(&self, percent: f64) -> Vec2 {
        match self {
            Self::Still(at) => *at,
            Self::Linear { from, to } => lerp_vec2(*from, *to, percent),
            Self::Function(p) => p.position(percent),
            Self::Parametric(p) => p.position(percent),
        }
    }
}

impl From<FunctionPath> for Path {
    fn from(p: FunctionPath) -> Self {
        Self::Function(p)
    }
}

impl From<ParametricPath> for Path {
    fn from(p: ParametricPath) -> Self {
        Self::Parametric(p)
    }
}

/// Traces `y = function(x)` for `x` from `x_start` to `x_end`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionPath {
    /// Curve to trace.
    pub function: Function,
    /// `x` at progress `0`.
    pub x_start: f64,
    /// `x` at progress `1`.
    pub x_end: f64,
}

impl FunctionPath {
    /// Trace `function` over `[x_start, x_end]`.
    pub fn new(function: Function, x_start: f64, x_end: f64) -> Self {
        Self {
            function,
            x_start,
            x_end,
        }
    }

    /// Position at `percent`, or the origin when the curve is undefined there.
    pub fn position(&self, percent: f64) -> Vec2 {
        let x = lerp(self.x_start, self.x_end, percent);
        match self.function.evaluate(x) {
            Some(y) => Vec2::new(x, y),
            None => Vec2::ZERO,
        }
    }
}

/// Traces `(x(t), y(t))` for `t` from `t_start` to `t_end`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParametricPath {
    /// Horizontal component.
    pub x: Function,
    /// Vertical component.
    pub y: Function,
    /// `t` at progress `0`.
    pub t_start: f64,
    /// `t` at progress `1`.
    pub t_end: f64,
}

impl ParametricPath {
    /// Trace `(x(t), y(t))` over `[t_start, t_end]`.
    pub fn new(x: Function, y: Function, t_start: f64, t_end: f64) -> Self {
        Self {
            x,
            y,
            t_start,
            t_end,
        }
    }

    /// Position at `percent`, or the origin when either component is undefined.
    pub fn position(&self, percent: f64) -> Vec2 {
        let t = lerp(self.t_start, self.t_end, percent);
        match (self.x.evaluate(t), self.y.evaluate(t)) {
            (Some(x), Some(y)) => Vec2::new(x, y),
            _ => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
