//! Stat allocation: raw player input in, validated immutable stats out.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_STAT_VALUE;
use crate::enums::StatKind;
use crate::error::ValidationError;
use crate::types::PlayerId;

/// Stats exactly as a player entered them. May be zero, negative or over budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAllocation {
    pub hp: i32,
    pub attack: i32,
    pub energy_per_turn: i32,
    pub shield_strength: i32,
    pub agility: i32,
}

impl StatAllocation {
    pub fn new(hp: i32, attack: i32, energy_per_turn: i32, shield_strength: i32, agility: i32) -> Self {
        Self {
            hp,
            attack,
            energy_per_turn,
            shield_strength,
            agility,
        }
    }

    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::EnergyPerTurn => self.energy_per_turn,
            StatKind::ShieldStrength => self.shield_strength,
            StatKind::Agility => self.agility,
        }
    }

    /// Sum of all five stats, widened so extreme input cannot overflow.
    pub fn total(&self) -> i64 {
        StatKind::ALL.iter().map(|&s| i64::from(self.get(s))).sum()
    }
}

/// Validated stats. Every field is at least 1 and the sum fits the cap.
/// Never mutated after allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hp: u32,
    pub attack: u32,
    pub energy_per_turn: u32,
    pub shield_strength: u32,
    pub agility: u32,
}

impl PlayerStats {
    /// Energy cost of moving one cell: `ceil(numerator / agility)`, never below 1.
    pub fn move_cost_per_step(&self, numerator: u32) -> u32 {
        numerator.div_ceil(self.agility.max(1)).max(1)
    }
}

/// Validate one player's allocation against `cap`.
pub fn allocate(
    player: PlayerId,
    raw: &StatAllocation,
    cap: u32,
) -> Result<PlayerStats, ValidationError> {
    for stat in StatKind::ALL {
        let value = raw.get(stat);
        if value < MIN_STAT_VALUE {
            return Err(ValidationError::StatTooLow {
                player,
                stat,
                value,
                min: MIN_STAT_VALUE,
            });
        }
    }

    let total = raw.total();
    if total > i64::from(cap) {
        return Err(ValidationError::OverBudget { player, total, cap });
    }

    Ok(PlayerStats {
        hp: raw.hp.unsigned_abs(),
        attack: raw.attack.unsigned_abs(),
        energy_per_turn: raw.energy_per_turn.unsigned_abs(),
        shield_strength: raw.shield_strength.unsigned_abs(),
        agility: raw.agility.unsigned_abs(),
    })
}

/// Validate both players. All-or-nothing: on any failure neither is returned.
pub fn allocate_pair(
    first: &StatAllocation,
    second: &StatAllocation,
    cap: u32,
) -> Result<[PlayerStats; 2], ValidationError> {
    let one = allocate(PlayerId::One, first, cap)?;
    let two = allocate(PlayerId::Two, second, cap)?;
    Ok([one, two])
}

/// Points left to spend, as shown while a player edits their stats.
/// Negative when over budget.
pub fn points_remaining(raw: &StatAllocation, cap: u32) -> i64 {
    i64::from(cap) - raw.total()
}
