//! Rules configuration for a session.
//!
//! The three prototypes this game grew out of disagree on line of sight and
//! shield formulas. Those choices are explicit fields here rather than merged.

use serde::{Deserialize, Serialize};

use crate::board::BoardModel;
use crate::constants::*;
use crate::enums::{AlignmentRule, ShieldMode};
use crate::error::ConfigError;

/// Tunable rules. Missing JSON fields fall back to [`RulesConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Board edge length in cells.
    pub board_size: i32,
    /// Per-player stat budget.
    pub stat_cap: u32,
    /// Flat energy credited at game start and every turn.
    pub base_energy: u32,
    /// Numerator of the per-cell move cost.
    pub move_cost_numerator: u32,
    /// Line-of-sight predicate for attacks.
    pub alignment: AlignmentRule,
    /// Shield variant.
    pub shield: ShieldMode,
    /// Energy cost of the fixed shield.
    pub shield_cost: u32,
    /// Energy cost of an attack.
    pub attack_energy_cost: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            stat_cap: STAT_CAP,
            base_energy: BASE_ENERGY,
            move_cost_numerator: MOVE_COST_NUMERATOR,
            alignment: AlignmentRule::default(),
            shield: ShieldMode::default(),
            shield_cost: SHIELD_COST,
            attack_energy_cost: ATTACK_ENERGY_COST,
        }
    }
}

impl RulesConfig {
    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if (self.stat_cap as usize) < STAT_COUNT {
            return Err(ConfigError::StatCapTooSmall {
                cap: self.stat_cap,
                count: STAT_COUNT,
            });
        }
        if self.move_cost_numerator == 0 {
            return Err(ConfigError::InvalidValue {
                field: "move_cost_numerator",
                reason: "must be at least 1 so every move costs energy".into(),
            });
        }
        if self.shield == ShieldMode::Fixed && self.shield_cost == 0 {
            return Err(ConfigError::InvalidValue {
                field: "shield_cost",
                reason: "the fixed shield needs a non-zero cost".into(),
            });
        }
        Ok(())
    }

    /// Board model for this configuration.
    pub fn board(&self) -> BoardModel {
        BoardModel::new(self.board_size, self.alignment)
    }
}
