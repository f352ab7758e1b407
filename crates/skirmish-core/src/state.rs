//! Game state snapshot, the read-only view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::TurnEvent;
use crate::game::PendingMove;
use crate::player::ShieldState;
use crate::stats::PlayerStats;
use crate::types::{GridPos, PlayerId};

/// Complete visible state after an accepted action (or on request).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub phase: GamePhase,
    pub board_size: i32,
    pub alignment: AlignmentRule,
    pub shield_mode: ShieldMode,
    pub turn: u32,
    /// `None` while allocating and once the game is over.
    pub active_player: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    /// Empty while allocating.
    pub players: Vec<PlayerView>,
    pub pending_move: Option<PendingMove>,
    /// Events produced by the most recent accepted action.
    pub events: Vec<TurnEvent>,
}

/// One player's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub position: GridPos,
    pub hp: i64,
    pub max_hp: u32,
    pub energy: u32,
    pub shield: ShieldState,
    /// Energy cost of moving one cell.
    pub move_cost_per_step: u32,
    pub stats: PlayerStats,
}

impl GameStateSnapshot {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}
