//! Error taxonomy.
//!
//! Every error here is non-fatal. Rejected actions and allocations leave the
//! game untouched and are reported back to the caller with the specific reason.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::StatKind;
use crate::types::{GridPos, PlayerId};

/// Stat allocation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{player}: {} must be at least {min}, got {value}", .stat.label())]
    StatTooLow {
        player: PlayerId,
        stat: StatKind,
        value: i32,
        min: i32,
    },

    #[error("{player}: allocated {total} points, cap is {cap}")]
    OverBudget {
        player: PlayerId,
        total: i64,
        cap: u32,
    },

    #[error("stats were already allocated for this session")]
    AlreadyAllocated,
}

/// Why the engine refused an action. The game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum ActionRejection {
    #[error("target {target} is outside the board")]
    OutOfBounds { target: GridPos },

    #[error("{target} is not in a straight line from {origin}")]
    NotAligned { origin: GridPos, target: GridPos },

    #[error("needs {required} energy, only {available} available")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("it is not {player}'s turn")]
    WrongTurn { player: PlayerId },

    #[error("shield energy must be between 1 and {available}, got {requested}")]
    InvalidShieldAmount { requested: u32, available: u32 },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("stats have not been allocated yet")]
    NotStarted,

    #[error("{at} is occupied by the opponent")]
    CellOccupied { at: GridPos },

    #[error("already standing on {at}")]
    SamePosition { at: GridPos },

    #[error("a move preview is pending; confirm or undo it first")]
    MovePending,

    #[error("there is no pending move")]
    NoPendingMove,
}

/// Rules configuration that cannot produce a playable game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least {min}, got {size}")]
    BoardTooSmall { size: i32, min: i32 },

    #[error("board size must be at most {max}, got {size}")]
    BoardTooLarge { size: i32, max: i32 },

    #[error("stat cap {cap} cannot fit {count} stats of at least 1")]
    StatCapTooSmall { cap: u32, count: usize },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A player number other than 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player id must be 1 or 2, got {0}")]
pub struct InvalidPlayerId(pub u8);
