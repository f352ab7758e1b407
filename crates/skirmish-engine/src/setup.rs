//! Session setup: starting positions, starting energy and turn order.

use skirmish_core::config::RulesConfig;
use skirmish_core::enums::GamePhase;
use skirmish_core::game::GameState;
use skirmish_core::player::PlayerState;
use skirmish_core::stats::PlayerStats;
use skirmish_core::types::{GridPos, PlayerId};

/// Player 1 starts in the top-left corner, player 2 in the bottom-right.
pub fn starting_positions(board_size: i32) -> [GridPos; 2] {
    let far = board_size - 1;
    [GridPos::new(0, 0), GridPos::new(far, far)]
}

/// The player with strictly lower starting HP acts first. Ties go to player 1.
pub fn first_player(stats: &[PlayerStats; 2]) -> PlayerId {
    if stats[1].hp < stats[0].hp {
        PlayerId::Two
    } else {
        PlayerId::One
    }
}

/// Build the opening state from two validated stat blocks.
///
/// Both players start with one turn's worth of energy.
pub fn new_game(config: &RulesConfig, stats: [PlayerStats; 2]) -> GameState {
    let positions = starting_positions(config.board_size);
    let active_player = first_player(&stats);
    let players = PlayerId::ALL.map(|id| {
        let s = stats[id.index()];
        let energy = config.base_energy.saturating_add(s.energy_per_turn);
        PlayerState::new(id, s, positions[id.index()], energy)
    });

    GameState {
        board_size: config.board_size,
        players,
        active_player,
        phase: GamePhase::AwaitingAction,
        pending_move: None,
        winner: None,
        turn: 1,
    }
}
