//! Enumeration types used throughout the engine.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are still choosing stats; no session exists yet.
    #[default]
    Allocating,
    /// The active player may move, attack, shield or end the turn.
    AwaitingAction,
    /// A drag/preview move is held and awaits confirm or undo.
    PendingMoveConfirm,
    /// A player reached 0 HP. Terminal.
    GameOver,
}

/// Which cell pairs count as "in a straight line" for attacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentRule {
    /// Same row or same column.
    #[default]
    Orthogonal,
    /// Same row, same column, or same diagonal.
    OrthogonalAndDiagonal,
}

/// Shield mechanics variant. Exactly one is active per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldMode {
    /// Flat energy cost; raises a flag that reduces the next hit by a
    /// percentage of shield strength.
    #[default]
    Fixed,
    /// The player commits an amount of energy; the stored value is
    /// `shield_strength * energy` and is subtracted from the next hit.
    Scaled,
}

/// Single-step movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset on the board (y grows downward).
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// The five allocatable stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Attack,
    EnergyPerTurn,
    ShieldStrength,
    Agility,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::EnergyPerTurn,
        StatKind::ShieldStrength,
        StatKind::Agility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Attack => "attack",
            StatKind::EnergyPerTurn => "energy per turn",
            StatKind::ShieldStrength => "shield strength",
            StatKind::Agility => "agility",
        }
    }
}
