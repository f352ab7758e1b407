//! Turn handoff.

use tracing::info;

use skirmish_core::config::RulesConfig;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::TurnEvent;
use skirmish_core::game::GameState;
use skirmish_core::player::ShieldState;

use super::TurnFlow;

/// Voluntarily end the turn. Allowed with a pending preview, which is discarded.
pub fn end_turn(state: &GameState) -> TurnFlow {
    debug_assert!(!state.is_over());
    TurnFlow::HandOff
}

/// Pass the turn to the opponent.
///
/// Discards any pending preview at no cost, expires the incoming player's
/// unused shield, and credits their turn income. Energy is not capped.
pub fn hand_off(state: &mut GameState, config: &RulesConfig, events: &mut Vec<TurnEvent>) {
    let outgoing = state.active_player;
    let incoming = outgoing.other();

    if let Some(pending) = state.pending_move.take() {
        events.push(TurnEvent::MoveUndone {
            player: outgoing,
            restored: pending.from,
        });
    }

    state.active_player = incoming;
    state.phase = GamePhase::AwaitingAction;
    state.turn += 1;

    let player = state.active_mut();
    if player.shield.is_up() {
        player.shield = ShieldState::Down;
        events.push(TurnEvent::ShieldExpired { player: incoming });
    }

    let income = player.turn_income(config.base_energy);
    player.energy = player.energy.saturating_add(income);
    let energy = player.energy;

    events.push(TurnEvent::TurnEnded {
        from: outgoing,
        to: incoming,
        energy_credited: income,
        turn: state.turn,
    });
    info!(from = %outgoing, to = %incoming, turn = state.turn, energy, "turn handed off");
}
