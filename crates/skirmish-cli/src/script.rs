//! Match scripts: a pair of stat allocations plus a list of actions,
//! replayed through one engine session.
//!
//! ```json
//! {
//!   "players": [
//!     { "hp": 30, "attack": 20, "energy_per_turn": 25, "shield_strength": 5, "agility": 20 },
//!     { "hp": 40, "attack": 10, "energy_per_turn": 30, "shield_strength": 10, "agility": 10 }
//!   ],
//!   "actions": [
//!     { "player": 1, "action": { "type": "Move", "to": { "x": 3, "y": 0 } } },
//!     { "player": 1, "action": { "type": "ConfirmMove" } }
//!   ]
//! }
//! ```
//!
//! `demos/reference_match.json` is written for a 4x4 board and should be run
//! with `--rules demos/small_board.json`; on the default board its attacks
//! are out of line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use skirmish_core::actions::Action;
use skirmish_core::config::RulesConfig;
use skirmish_core::error::{ActionRejection, ConfigError, ValidationError};
use skirmish_core::events::TurnEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::stats::StatAllocation;
use skirmish_core::types::PlayerId;
use skirmish_engine::TurnEngine;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid rules: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid allocation: {0}")]
    Allocation(#[from] ValidationError),
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// A recorded match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScript {
    /// Raw allocations for player 1 and player 2.
    pub players: [StatAllocation; 2],
    #[serde(default)]
    pub actions: Vec<ScriptedAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedAction {
    pub player: PlayerId,
    pub action: Action,
}

/// What happened to one scripted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Zero-based index into the script's actions.
    pub step: usize,
    pub player: PlayerId,
    pub action: Action,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<ActionRejection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TurnEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcomes: Vec<StepOutcome>,
    pub final_snapshot: GameStateSnapshot,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ScriptError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_script(path: &Path) -> Result<MatchScript, ScriptError> {
    read_json(path)
}

/// Load rules from `path`, or the defaults when no file is given.
/// Missing fields fall back to their defaults; the result is validated.
pub fn load_rules(path: Option<&Path>) -> Result<RulesConfig, ScriptError> {
    let rules = match path {
        Some(path) => read_json::<RulesConfig>(path)?,
        None => RulesConfig::default(),
    };
    rules.validate()?;
    Ok(rules)
}

/// Replay a script. Rejected actions are recorded and the replay carries on.
pub fn run_script(rules: RulesConfig, script: &MatchScript) -> Result<MatchReport, ScriptError> {
    let mut engine = TurnEngine::new(rules)?;
    let [first, second] = &script.players;
    engine.start(first, second)?;

    let mut outcomes = Vec::with_capacity(script.actions.len());
    for (step, scripted) in script.actions.iter().enumerate() {
        let outcome = match engine.submit_action(scripted.player, scripted.action) {
            Ok(snapshot) => StepOutcome {
                step,
                player: scripted.player,
                action: scripted.action,
                accepted: true,
                rejection: None,
                events: snapshot.events,
            },
            Err(rejection) => {
                warn!(step, player = %scripted.player, %rejection, "scripted action rejected");
                StepOutcome {
                    step,
                    player: scripted.player,
                    action: scripted.action,
                    accepted: false,
                    rejection: Some(rejection),
                    events: Vec::new(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let final_snapshot = engine.snapshot();
    info!(
        steps = outcomes.len(),
        winner = ?final_snapshot.winner,
        "script finished"
    );
    Ok(MatchReport {
        outcomes,
        final_snapshot,
    })
}
