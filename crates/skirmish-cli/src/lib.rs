//! Headless front end for the skirmish engine.
//!
//! Loads rules and match scripts from JSON, replays them through a
//! `TurnEngine`, and reports every outcome as JSON.

pub mod logging;
pub mod script;

pub use skirmish_core as core;
