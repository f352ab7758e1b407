//! Rule constants and default tuning parameters.

// --- Board ---

/// Default board edge length (cells). The board is always square.
pub const DEFAULT_BOARD_SIZE: i32 = 19;

/// Smallest board that can hold two players on distinct cells.
pub const MIN_BOARD_SIZE: i32 = 2;

/// Largest accepted board. Keeps every distance and path cost well inside `u32`.
pub const MAX_BOARD_SIZE: i32 = 1024;

// --- Stat allocation ---

/// Default total budget a player may spread across the five stats.
pub const STAT_CAP: u32 = 100;

/// Minimum value of any single stat.
pub const MIN_STAT_VALUE: i32 = 1;

/// Number of allocatable stats.
pub const STAT_COUNT: usize = 5;

// --- Energy ---

/// Flat energy credited at game start and at the start of every turn,
/// on top of the player's `energy_per_turn` stat.
pub const BASE_ENERGY: u32 = 100;

/// Numerator of the per-cell movement cost: `ceil(MOVE_COST_NUMERATOR / agility)`.
pub const MOVE_COST_NUMERATOR: u32 = 10;

// --- Combat ---

/// Energy spent by the fixed-cost shield. Also the energy-equivalent used
/// for its damage reduction: `floor(shield_strength * SHIELD_COST / 100)`.
pub const SHIELD_COST: u32 = 10;

/// Divisor applied to `shield_strength * SHIELD_COST` in the fixed variant.
pub const SHIELD_REDUCTION_DIVISOR: u32 = 100;

/// Energy spent per attack. Attacks are free by default.
pub const ATTACK_ENERGY_COST: u32 = 0;
