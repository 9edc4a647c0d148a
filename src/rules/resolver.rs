//! End-of-turn resolution.
//!
//! Misère play: whoever must take the last object loses. The resolver is
//! called exactly once after each validated move and classifies the new
//! state:
//!
//! 1. Remaining count 0: the mover took the last object and loses.
//! 2. Remaining count 1: the opponent is forced to take the sole remaining
//!    object on their turn, so they lose immediately. Declaring this now
//!    instead of playing out the forced turn is deliberate; no further move
//!    is consumed.
//! 3. Otherwise the match continues.
//!
//! A terminal classification is computed once and never revised.

use serde::{Deserialize, Serialize};

use crate::core::Identity;

/// Classification of the state after one validated move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The match proceeds; the players swap roles.
    Continue,
    /// The match is over.
    Ended { winner: Identity, loser: Identity },
}

impl TurnOutcome {
    /// Check whether this outcome ends the match.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, TurnOutcome::Ended { .. })
    }
}

/// Classify the state reached after `current` moved.
///
/// `remaining` is the aggregate object count: the single pile for Classic,
/// the sum over all piles for Marienbad.
#[must_use]
pub fn resolve_turn(current: &Identity, other: &Identity, remaining: u32) -> TurnOutcome {
    match remaining {
        0 => TurnOutcome::Ended {
            winner: other.clone(),
            loser: current.clone(),
        },
        1 => TurnOutcome::Ended {
            winner: current.clone(),
            loser: other.clone(),
        },
        _ => TurnOutcome::Continue,
    }
}
