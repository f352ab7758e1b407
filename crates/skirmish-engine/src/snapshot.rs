//! Snapshot builder: turns the engine's state into a `GameStateSnapshot`.
//!
//! Read-only; never modifies the game.

use skirmish_core::config::RulesConfig;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::TurnEvent;
use skirmish_core::game::GameState;
use skirmish_core::player::PlayerState;
use skirmish_core::state::{GameStateSnapshot, PlayerView};

/// Build a snapshot. `state` is `None` while stats are being allocated.
pub fn build_snapshot(
    config: &RulesConfig,
    state: Option<&GameState>,
    events: Vec<TurnEvent>,
) -> GameStateSnapshot {
    let Some(state) = state else {
        return GameStateSnapshot {
            phase: GamePhase::Allocating,
            board_size: config.board_size,
            alignment: config.alignment,
            shield_mode: config.shield,
            events,
            ..Default::default()
        };
    };

    GameStateSnapshot {
        phase: state.phase,
        board_size: state.board_size,
        alignment: config.alignment,
        shield_mode: config.shield,
        turn: state.turn,
        active_player: (!state.is_over()).then_some(state.active_player),
        winner: state.winner,
        players: state
            .players
            .iter()
            .map(|p| build_player(p, config))
            .collect(),
        pending_move: state.pending_move,
        events,
    }
}

fn build_player(player: &PlayerState, config: &RulesConfig) -> PlayerView {
    PlayerView {
        id: player.id,
        position: player.position,
        hp: player.current_hp,
        max_hp: player.stats.hp,
        energy: player.energy,
        shield: player.shield,
        move_cost_per_step: player.stats.move_cost_per_step(config.move_cost_numerator),
        stats: player.stats,
    }
}
