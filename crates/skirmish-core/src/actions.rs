//! Player actions submitted by the presentation layer to the engine.
//!
//! Actions are validated by the engine and either applied in full or rejected
//! with no effect.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::types::GridPos;

/// Everything a player can ask the engine to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    // --- Movement ---
    /// Propose a destination (drag/preview mode). Held until confirmed or undone.
    Move { to: GridPos },
    /// Move exactly one cell and commit immediately (single-step mode).
    Step { direction: Direction },
    /// Commit the pending move.
    ConfirmMove,
    /// Discard the pending move at no cost.
    UndoMove,

    // --- Combat ---
    /// Attack the opponent along the configured line of sight. Ends the turn.
    Attack,
    /// Raise a shield. Ends the turn. `energy` is the amount committed in the
    /// scaled variant and is ignored by the fixed variant.
    Shield {
        #[serde(default)]
        energy: Option<u32>,
    },

    // --- Turn control ---
    /// Hand the turn to the opponent.
    EndTurn,
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move { .. } => "move",
            Action::Step { .. } => "step",
            Action::ConfirmMove => "confirm_move",
            Action::UndoMove => "undo_move",
            Action::Attack => "attack",
            Action::Shield { .. } => "shield",
            Action::EndTurn => "end_turn",
        }
    }
}
