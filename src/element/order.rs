use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ReelError, ReelResult};

/// One of the three spatial transforms an element can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Translation from a movement track.
    Move,
    /// Rotation around a pivot.
    Rotate,
    /// Scale around a pivot.
    Zoom,
}

impl TransformKind {
    /// Lowercase name, as used in order strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Rotate => "rotate",
            Self::Zoom => "zoom",
        }
    }
}

/// Order in which an element's spatial transforms nest, outermost first.
///
/// Always a permutation of `{Move, Rotate, Zoom}`. Kinds whose track is absent are skipped when
/// the nesting chain is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransformOrder([TransformKind; 3]);

impl TransformOrder {
    /// Move outermost, zoom innermost.
    pub const MOVE_ROTATE_ZOOM: Self = Self([
        TransformKind::Move,
        TransformKind::Rotate,
        TransformKind::Zoom,
    ]);
    /// Move outermost, rotate innermost.
    pub const MOVE_ZOOM_ROTATE: Self = Self([
        TransformKind::Move,
        TransformKind::Zoom,
        TransformKind::Rotate,
    ]);
    /// Rotate outermost, zoom innermost.
    pub const ROTATE_MOVE_ZOOM: Self = Self([
        TransformKind::Rotate,
        TransformKind::Move,
        TransformKind::Zoom,
    ]);
    /// Rotate outermost, move innermost.
    pub const ROTATE_ZOOM_MOVE: Self = Self([
        TransformKind::Rotate,
        TransformKind::Zoom,
        TransformKind::Move,
    ]);
    /// Zoom outermost, rotate innermost.
    pub const ZOOM_MOVE_ROTATE: Self = Self([
        TransformKind::Zoom,
        TransformKind::Move,
        TransformKind::Rotate,
    ]);
    /// Zoom outermost, move innermost.
    pub const ZOOM_ROTATE_MOVE: Self = Self([
        TransformKind::Zoom,
        TransformKind::Rotate,
        TransformKind::Move,
    ]);

    /// All six orders.
    pub const ALL: [Self; 6] = [
        Self::MOVE_ROTATE_ZOOM,
        Self::MOVE_ZOOM_ROTATE,
        Self::ROTATE_MOVE_ZOOM,
        Self::ROTATE_ZOOM_MOVE,
        Self::ZOOM_MOVE_ROTATE,
        Self::ZOOM_ROTATE_MOVE,
    ];

    /// Build an order from three kinds; fails unless each kind appears exactly once.
    pub fn new(kinds: [TransformKind; 3]) -> ReelResult<Self> {
        let [a, b, c] = kinds;
        if a == b || b == c || a == c {
            return Err(ReelError::validation(format!(
                "transform order must name move, rotate and zoom exactly once, got {}-{}-{}",
                a.as_str(),
                b.as_str(),
                c.as_str()
            )));
        }
        Ok(Self(kinds))
    }

    /// Kinds, outermost first.
    pub fn kinds(&self) -> [TransformKind; 3] {
        self.0
    }

    /// Nesting depth of `kind`, `0` being outermost.
    pub fn position(&self, kind: TransformKind) -> usize {
        self.0.iter().position(|k| *k == kind).unwrap_or(0)
    }
}

impl Default for TransformOrder {
    fn default() -> Self {
        Self::MOVE_ROTATE_ZOOM
    }
}

impl fmt::Display for TransformOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a.as_str(), b.as_str(), c.as_str())
    }
}

impl FromStr for TransformOrder {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_kind = |part: &str| match part.trim().to_ascii_lowercase().as_str() {
            "move" => Ok(TransformKind::Move),
            "rotate" => Ok(TransformKind::Rotate),
            "zoom" => Ok(TransformKind::Zoom),
            other => Err(ReelError::validation(format!(
                "unknown transform kind '{other}' in order '{s}'"
            ))),
        };
        let parts: Vec<&str> = s.split(['-', '_', ',']).collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(ReelError::validation(format!(
                "transform order '{s}' must list exactly three kinds"
            )));
        };
        Self::new([parse_kind(a)?, parse_kind(b)?, parse_kind(c)?])
    }
}

impl TryFrom<String> for TransformOrder {
    type Error = ReelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransformOrder> for String {
    fn from(order: TransformOrder) -> Self {
        order.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/order.rs"]
mod tests;
