//! Shield actions for both variants.

use skirmish_core::config::RulesConfig;
use skirmish_core::enums::ShieldMode;
use skirmish_core::error::ActionRejection;
use skirmish_core::events::TurnEvent;
use skirmish_core::game::GameState;
use skirmish_core::player::ShieldState;

use super::{ensure_no_pending_move, TurnFlow};

/// Raise the active player's shield and end the turn.
///
/// Fixed variant: pays `shield_cost`, `requested` is ignored.
/// Scaled variant: pays `requested` (1..=energy) and stores
/// `shield_strength * requested`.
pub fn raise_shield(
    state: &mut GameState,
    config: &RulesConfig,
    requested: Option<u32>,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    ensure_no_pending_move(state)?;

    let player = state.active_mut();
    let available = player.energy;

    let (spent, shield) = match config.shield {
        ShieldMode::Fixed => {
            if config.shield_cost > available {
                return Err(ActionRejection::InsufficientEnergy {
                    required: config.shield_cost,
                    available,
                });
            }
            (config.shield_cost, ShieldState::Flag)
        }
        ShieldMode::Scaled => {
            let amount = requested.unwrap_or(0);
            if amount == 0 || amount > available {
                return Err(ActionRejection::InvalidShieldAmount {
                    requested: amount,
                    available,
                });
            }
            let value = player.stats.shield_strength.saturating_mul(amount);
            (amount, ShieldState::Value(value))
        }
    };

    player.energy -= spent;
    player.shield = shield;
    events.push(TurnEvent::ShieldRaised {
        player: player.id,
        energy_spent: spent,
    });
    Ok(TurnFlow::HandOff)
}
