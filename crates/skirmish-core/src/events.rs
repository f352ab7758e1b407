//! Events emitted by the engine for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::types::{GridPos, PlayerId};

/// Something that happened while resolving an accepted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnEvent {
    /// A drag/preview destination is now pending.
    MoveProposed {
        player: PlayerId,
        from: GridPos,
        to: GridPos,
        cost: u32,
    },
    /// A move was committed and paid for.
    Moved {
        player: PlayerId,
        from: GridPos,
        to: GridPos,
        cost: u32,
    },
    /// A pending move was discarded, explicitly or by a handoff.
    MoveUndone { player: PlayerId, restored: GridPos },
    Attacked {
        attacker: PlayerId,
        defender: PlayerId,
        distance: u32,
        base_damage: u32,
        reduction: u32,
        damage: u32,
        defender_hp: i64,
    },
    ShieldRaised {
        player: PlayerId,
        energy_spent: u32,
    },
    /// An unused shield lapsed at the start of its owner's turn.
    ShieldExpired { player: PlayerId },
    TurnEnded {
        from: PlayerId,
        to: PlayerId,
        energy_credited: u32,
        turn: u32,
    },
    Victory { winner: PlayerId },
}
