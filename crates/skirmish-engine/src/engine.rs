//! Turn engine: the state machine at the center of a game.
//!
//! `TurnEngine` owns one session: the rules, the `GameState` once stats are
//! allocated, and the events of the last accepted action. Every entry point
//! runs to completion synchronously and either applies an action in full or
//! rejects it without side effects.

use std::collections::BTreeSet;

use tracing::debug;

use skirmish_core::actions::Action;
use skirmish_core::config::RulesConfig;
use skirmish_core::enums::GamePhase;
use skirmish_core::error::{ActionRejection, ConfigError, ValidationError};
use skirmish_core::events::TurnEvent;
use skirmish_core::game::GameState;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::stats::{allocate_pair, StatAllocation};
use skirmish_core::types::{GridPos, PlayerId};

use crate::rules::{self, TurnFlow};
use crate::setup;
use crate::snapshot;

/// Outcome of `submit_action`: the new snapshot, or why nothing happened.
pub type ActionResult = Result<GameStateSnapshot, ActionRejection>;

/// One game session.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    config: RulesConfig,
    /// `None` until both players' stats are allocated.
    state: Option<GameState>,
    last_events: Vec<TurnEvent>,
}

impl TurnEngine {
    /// Create a session in the `Allocating` phase.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            last_events: Vec::new(),
        })
    }

    /// Validate both allocations and start the game.
    ///
    /// All-or-nothing: if either allocation is invalid the session stays in
    /// `Allocating` and can be retried.
    pub fn start(
        &mut self,
        first: &StatAllocation,
        second: &StatAllocation,
    ) -> Result<GameStateSnapshot, ValidationError> {
        if self.state.is_some() {
            return Err(ValidationError::AlreadyAllocated);
        }
        let stats = allocate_pair(first, second, self.config.stat_cap)?;
        let state = setup::new_game(&self.config, stats);
        debug!(first = %state.active_player, "game started");
        self.state = Some(state);
        self.last_events.clear();
        Ok(self.snapshot())
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameStateSnapshot {
        snapshot::build_snapshot(
            &self.config,
            self.state.as_ref(),
            self.last_events.clone(),
        )
    }

    /// Cells `player` could move to right now, for highlighting.
    pub fn legal_move_range(&self, player: PlayerId) -> BTreeSet<GridPos> {
        match &self.state {
            Some(state) => rules::movement::legal_move_range(state, &self.config, player),
            None => BTreeSet::new(),
        }
    }

    /// Validate and apply one action on behalf of `player`.
    pub fn submit_action(&mut self, player: PlayerId, action: Action) -> ActionResult {
        match self.apply(player, action) {
            Ok(events) => {
                debug!(%player, action = action.name(), events = events.len(), "action accepted");
                self.last_events = events;
                Ok(self.snapshot())
            }
            Err(rejection) => {
                debug!(%player, action = action.name(), %rejection, "action rejected");
                Err(rejection)
            }
        }
    }

    fn apply(&mut self, player: PlayerId, action: Action) -> Result<Vec<TurnEvent>, ActionRejection> {
        let state = self.state.as_mut().ok_or(ActionRejection::NotStarted)?;
        rules::check_actor(state, player)?;

        let config = &self.config;
        let mut events = Vec::new();
        let flow = match action {
            Action::Move { to } => rules::movement::propose_move(state, config, to, &mut events)?,
            Action::Step { direction } => {
                rules::movement::step(state, config, direction, &mut events)?
            }
            Action::ConfirmMove => rules::movement::confirm_move(state, &mut events)?,
            Action::UndoMove => rules::movement::undo_move(state, &mut events)?,
            Action::Attack => rules::combat::attack(state, config, &mut events)?,
            Action::Shield { energy } => {
                rules::shield::raise_shield(state, config, energy, &mut events)?
            }
            Action::EndTurn => rules::turn::end_turn(state),
        };

        if flow == TurnFlow::HandOff {
            rules::turn::hand_off(state, config, &mut events);
        }
        Ok(events)
    }

    pub fn phase(&self) -> GamePhase {
        self.state
            .as_ref()
            .map_or(GamePhase::Allocating, |state| state.phase)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.as_ref().and_then(|state| state.winner)
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// The authoritative state, once the game has started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Mutable access for tests that need a specific board layout.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }
}
