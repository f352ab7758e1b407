//! Movement: per-cell cost, destination checks, single-step and
//! drag/preview moves.
//!
//! Movement is always along a row or column, whatever alignment rule the
//! session uses for attacks.

use std::collections::BTreeSet;

use skirmish_core::board::BoardModel;
use skirmish_core::config::RulesConfig;
use skirmish_core::enums::{Direction, GamePhase};
use skirmish_core::error::ActionRejection;
use skirmish_core::events::TurnEvent;
use skirmish_core::game::{GameState, PendingMove};
use skirmish_core::types::{GridPos, PlayerId};

use super::{ensure_no_pending_move, TurnFlow};

/// Energy the active player pays per cell.
pub fn step_cost(state: &GameState, config: &RulesConfig) -> u32 {
    state
        .active()
        .stats
        .move_cost_per_step(config.move_cost_numerator)
}

/// Check a destination for the active player and return its energy cost.
///
/// Measured from the committed position; a pending preview does not move
/// the origin.
pub fn validate_destination(
    state: &GameState,
    config: &RulesConfig,
    to: GridPos,
) -> Result<u32, ActionRejection> {
    let board = config.board();
    let mover = state.active();
    let from = mover.position;

    if !board.is_in_bounds(to) {
        return Err(ActionRejection::OutOfBounds { target: to });
    }
    if to == from {
        return Err(ActionRejection::SamePosition { at: from });
    }
    if !BoardModel::is_orthogonal(from, to) {
        return Err(ActionRejection::NotAligned {
            origin: from,
            target: to,
        });
    }

    let blocker = state.opponent().position;
    if is_on_segment(from, to, blocker) {
        return Err(ActionRejection::CellOccupied { at: blocker });
    }

    let cost = board
        .manhattan_distance(from, to)
        .saturating_mul(step_cost(state, config));
    if cost > mover.energy {
        return Err(ActionRejection::InsufficientEnergy {
            required: cost,
            available: mover.energy,
        });
    }
    Ok(cost)
}

/// True if `cell` lies on the straight segment `(from, to]`.
/// `from` and `to` must share a row or column.
fn is_on_segment(from: GridPos, to: GridPos, cell: GridPos) -> bool {
    let detour = u64::from(from.manhattan_to(cell)) + u64::from(cell.manhattan_to(to));
    cell != from && detour == u64::from(from.manhattan_to(to))
}

/// Cells the player could reach this turn, for move-preview highlighting.
///
/// Empty unless `player` is the one to act.
pub fn legal_move_range(
    state: &GameState,
    config: &RulesConfig,
    player: PlayerId,
) -> BTreeSet<GridPos> {
    if state.is_over() || state.active_player != player {
        return BTreeSet::new();
    }
    let mover = state.active();
    let reach = mover.energy / step_cost(state, config);
    config
        .board()
        .cells_in_line(mover.position, reach)
        .into_iter()
        .filter(|&cell| validate_destination(state, config, cell).is_ok())
        .collect()
}

/// Single-step mode: move one cell and commit immediately.
pub fn step(
    state: &mut GameState,
    config: &RulesConfig,
    direction: Direction,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    ensure_no_pending_move(state)?;
    let from = state.active().position;
    let to = from.offset(direction.offset(), 1);
    let cost = validate_destination(state, config, to)?;
    Ok(commit(state, from, to, cost, events))
}

/// Drag/preview mode: hold a destination until confirmed or undone.
/// Proposing again while a preview is pending replaces it.
pub fn propose_move(
    state: &mut GameState,
    config: &RulesConfig,
    to: GridPos,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    let cost = validate_destination(state, config, to)?;
    let player = state.active_player;
    let from = state.active().position;

    state.pending_move = Some(PendingMove { from, to, cost });
    state.phase = GamePhase::PendingMoveConfirm;
    events.push(TurnEvent::MoveProposed {
        player,
        from,
        to,
        cost,
    });
    Ok(TurnFlow::Continue)
}

/// Commit the pending preview.
pub fn confirm_move(
    state: &mut GameState,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    let pending = state
        .pending_move
        .take()
        .ok_or(ActionRejection::NoPendingMove)?;
    state.phase = GamePhase::AwaitingAction;
    Ok(commit(state, pending.from, pending.to, pending.cost, events))
}

/// Discard the pending preview. No energy is charged.
pub fn undo_move(
    state: &mut GameState,
    events: &mut Vec<TurnEvent>,
) -> Result<TurnFlow, ActionRejection> {
    let pending = state
        .pending_move
        .take()
        .ok_or(ActionRejection::NoPendingMove)?;
    state.phase = GamePhase::AwaitingAction;
    events.push(TurnEvent::MoveUndone {
        player: state.active_player,
        restored: pending.from,
    });
    Ok(TurnFlow::Continue)
}

/// Pay for and apply a validated move. Running out of energy ends the turn.
fn commit(
    state: &mut GameState,
    from: GridPos,
    to: GridPos,
    cost: u32,
    events: &mut Vec<TurnEvent>,
) -> TurnFlow {
    let player = state.active_player;
    let mover = state.active_mut();
    mover.energy -= cost;
    mover.position = to;
    let exhausted = mover.energy == 0;

    events.push(TurnEvent::Moved {
        player,
        from,
        to,
        cost,
    });

    if exhausted {
        TurnFlow::HandOff
    } else {
        TurnFlow::Continue
    }
}
