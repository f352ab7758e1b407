//! Attack resolution: line of sight, distance falloff, shield absorption.

use tracing::info;

use skirmish_core::config::RulesConfig;
use skirmish_core::constants::SHIELD_REDUCTION_DIVISOR;
use skirmish_core::enums::GamePhase;
use skirmish_core::error::ActionRejection;
use skirmish_core::events::TurnEvent;
use skirmish_core::game::GameState;
use skirmish_core::player::ShieldState;

use super::{ensure_no_pending_move, TurnFlow};

/// `floor(attack / (distance + 1))`.
pub fn base_damage(attack: u32, distance: u32) -> u32 {
    attack / distance.saturating_add(1)
}

/// Damage absorbed by a shield in the given state.
///
/// The fixed flag is worth `floor(shield_strength * shield_cost / 100)`;
/// a scaled shield absorbs its stored value.
pub fn shield_reduction(shield: ShieldState, shield_strength: u32, config: &RulesConfig) -> u32 {
    match shield {
        ShieldState::Down => 0,
        ShieldState::Flag => {
            shield_strength.saturating_mul(config.shield_cost) / SHIELD_REDUCTION_DIVISOR
        }
        ShieldState::Value(value) => value,
    }
}

/// Attack the opponent. Always ends the turn once accepted, even for 0 damage.
pub fn attack(
    state: &mut GameState,
    config: &RulesConfig,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    ensure_no_pending_move(state)?;

    let board = config.board();
    let origin = state.active().position;
    let target = state.opponent().position;
    let distance = board.manhattan_distance(origin, target);
    if distance == 0 || !board.is_aligned(origin, target) {
        return Err(ActionRejection::NotAligned { origin, target });
    }

    let available = state.active().energy;
    if config.attack_energy_cost > available {
        return Err(ActionRejection::InsufficientEnergy {
            required: config.attack_energy_cost,
            available,
        });
    }

    let (attacker, defender) = state.active_and_opponent_mut();
    attacker.energy -= config.attack_energy_cost;

    let base = base_damage(attacker.stats.attack, distance);
    // Any shield is spent by the hit, whatever is left over.
    let reduction = shield_reduction(defender.shield, defender.stats.shield_strength, config);
    defender.shield = ShieldState::Down;
    let damage = base.saturating_sub(reduction);
    defender.current_hp -= i64::from(damage);

    let attacker_id = attacker.id;
    let defender_id = defender.id;
    let defender_hp = defender.current_hp;
    let defeated = defender.is_defeated();

    events.push(TurnEvent::Attacked {
        attacker: attacker_id,
        defender: defender_id,
        distance,
        base_damage: base,
        reduction,
        damage,
        defender_hp,
    });

    if defeated {
        state.phase = GamePhase::GameOver;
        state.winner = Some(attacker_id);
        events.push(TurnEvent::Victory {
            winner: attacker_id,
        });
        info!(winner = %attacker_id, turn = state.turn, "game over");
        return Ok(TurnFlow::GameOver);
    }

    Ok(TurnFlow::HandOff)
}
