//! Board model: grid bounds, distance, and line-of-sight predicates.
//!
//! Pure coordinate logic. Knows nothing about players or energy.

use serde::{Deserialize, Serialize};

use crate::enums::{AlignmentRule, Direction};
use crate::types::GridPos;

/// A square board of `size` × `size` cells with a configured alignment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardModel {
    pub size: i32,
    pub alignment: AlignmentRule,
}

impl BoardModel {
    pub fn new(size: i32, alignment: AlignmentRule) -> Self {
        Self { size, alignment }
    }

    /// `0 <= x, y < size`.
    pub fn is_in_bounds(&self, pos: GridPos) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    pub fn manhattan_distance(&self, a: GridPos, b: GridPos) -> u32 {
        a.manhattan_to(b)
    }

    /// Same row or column, plus same diagonal when the rule allows it.
    pub fn is_aligned(&self, a: GridPos, b: GridPos) -> bool {
        match self.alignment {
            AlignmentRule::Orthogonal => Self::is_orthogonal(a, b),
            AlignmentRule::OrthogonalAndDiagonal => {
                let d = a.delta_to(b).abs();
                Self::is_orthogonal(a, b) || d.x == d.y
            }
        }
    }

    /// Same row or same column. Movement always uses this, whatever the
    /// configured alignment rule.
    pub fn is_orthogonal(a: GridPos, b: GridPos) -> bool {
        a.x == b.x || a.y == b.y
    }

    /// In-bounds cells on the origin's row and column, at distance
    /// `1..=max_distance`. Excludes the origin.
    pub fn cells_in_line(&self, origin: GridPos, max_distance: u32) -> Vec<GridPos> {
        let reach = i32::try_from(max_distance).unwrap_or(i32::MAX).min(self.size);
        let mut cells = Vec::new();
        for direction in Direction::ALL {
            for step in 1..=reach {
                let cell = origin.offset(direction.offset(), step);
                if !self.is_in_bounds(cell) {
                    break;
                }
                cells.push(cell);
            }
        }
        cells
    }
}
