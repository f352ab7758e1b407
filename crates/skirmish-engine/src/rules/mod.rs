//! Rule functions that resolve actions against a `GameState`.
//!
//! Every function takes the state explicitly, validates the whole action
//! before touching it, and reports what should happen to the turn. A function
//! that returns `Err` has not modified the state.

pub mod combat;
pub mod movement;
pub mod shield;
pub mod turn;

use skirmish_core::enums::GamePhase;
use skirmish_core::error::ActionRejection;
use skirmish_core::game::GameState;
use skirmish_core::types::PlayerId;

/// What the engine does after an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnFlow {
    /// The active player keeps the turn.
    Continue,
    /// Hand the turn to the opponent.
    HandOff,
    /// The game ended; no handoff.
    GameOver,
}

/// Ensure `player` may act at all.
pub fn check_actor(state: &GameState, player: PlayerId) -> Result<(), ActionRejection> {
    if state.is_over() {
        return Err(ActionRejection::GameAlreadyOver);
    }
    if state.active_player != player {
        return Err(ActionRejection::WrongTurn { player });
    }
    Ok(())
}

/// Actions other than move handling are blocked while a preview is held.
pub fn ensure_no_pending_move(state: &GameState) -> Result<(), ActionRejection> {
    if state.phase == GamePhase::PendingMoveConfirm {
        return Err(ActionRejection::MovePending);
    }
    Ok(())
}
