//! Core types and definitions for the SKIRMISH turn engine.
//!
//! This crate defines the vocabulary shared across the workspace:
//! grid types, rules configuration, stat allocation, the board model,
//! actions, events, state snapshots, and the error taxonomy.
//! It contains no turn-resolution logic and no I/O.

pub mod actions;
pub mod board;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod game;
pub mod player;
pub mod state;
pub mod stats;
pub mod types;
