//! Per-player mutable state owned by the engine.

use serde::{Deserialize, Serialize};

use crate::stats::PlayerStats;
use crate::types::{GridPos, PlayerId};

/// A player's shield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ShieldState {
    #[default]
    Down,
    /// Fixed variant: reduces the next hit by a share of shield strength.
    Flag,
    /// Scaled variant: absorbs up to this much of the next hit.
    Value(u32),
}

impl ShieldState {
    pub fn is_up(self) -> bool {
        !matches!(self, ShieldState::Down)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub stats: PlayerStats,
    pub position: GridPos,
    /// Starts at `stats.hp`. Zero or below means defeated.
    pub current_hp: i64,
    pub energy: u32,
    pub shield: ShieldState,
}

impl PlayerState {
    pub fn new(id: PlayerId, stats: PlayerStats, position: GridPos, energy: u32) -> Self {
        Self {
            id,
            stats,
            position,
            current_hp: i64::from(stats.hp),
            energy,
            shield: ShieldState::Down,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp <= 0
    }

    /// Energy regained at the start of each of this player's turns.
    pub fn turn_income(&self, base_energy: u32) -> u32 {
        base_energy.saturating_add(self.stats.energy_per_turn)
    }
}
