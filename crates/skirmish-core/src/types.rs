//! Fundamental grid and player identity types.

use std::cmp::Ordering;
use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::InvalidPlayerId;

/// A cell on the board. (0, 0) is the top-left corner, x grows right, y grows down.
///
/// Coordinates are signed so off-board targets can be expressed and rejected
/// with `OutOfBounds` rather than failing to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn from_ivec2(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Component-wise offset from `self` to `other`.
    pub fn delta_to(self, other: GridPos) -> IVec2 {
        other.as_ivec2() - self.as_ivec2()
    }

    /// |dx| + |dy|.
    pub fn manhattan_to(self, other: GridPos) -> u32 {
        let d = self.delta_to(other);
        d.x.unsigned_abs() + d.y.unsigned_abs()
    }

    /// The cell reached by moving `steps` times along `offset`.
    pub fn offset(self, offset: IVec2, steps: i32) -> GridPos {
        Self::from_ivec2(self.as_ivec2() + offset * steps)
    }
}

/// Row-major ordering (y first, then x), so sorted sets read like the board.
impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the two seats at the board. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The opponent.
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(InvalidPlayerId(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.number()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}
