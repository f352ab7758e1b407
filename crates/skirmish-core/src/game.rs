//! The authoritative game state of one session.
//!
//! A single owned value. Engine rule functions receive it explicitly;
//! nothing here is global, so any number of sessions can coexist.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::player::PlayerState;
use crate::types::{GridPos, PlayerId};

/// A proposed, uncommitted move awaiting confirm or undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub from: GridPos,
    pub to: GridPos,
    /// Energy that confirming will deduct.
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board_size: i32,
    pub players: [PlayerState; 2],
    /// Meaningless once `phase` is `GameOver`.
    pub active_player: PlayerId,
    pub phase: GamePhase,
    pub pending_move: Option<PendingMove>,
    pub winner: Option<PlayerId>,
    /// Starts at 1, incremented on every handoff.
    pub turn: u32,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    pub fn active(&self) -> &PlayerState {
        self.player(self.active_player)
    }

    pub fn active_mut(&mut self) -> &mut PlayerState {
        self.player_mut(self.active_player)
    }

    /// The player waiting for their turn.
    pub fn opponent(&self) -> &PlayerState {
        self.player(self.active_player.other())
    }

    /// Mutable access to the active player and the opponent at once.
    pub fn active_and_opponent_mut(&mut self) -> (&mut PlayerState, &mut PlayerState) {
        let [one, two] = &mut self.players;
        match self.active_player {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
