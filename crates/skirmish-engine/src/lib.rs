//! Turn-resolution engine for SKIRMISH.
//!
//! Owns a single game session, validates and applies player actions,
//! and produces `GameStateSnapshot`s for the presentation layer.

pub mod engine;
pub mod rules;
pub mod setup;
pub mod snapshot;

pub use engine::{ActionResult, TurnEngine};
pub use skirmish_core as core;
