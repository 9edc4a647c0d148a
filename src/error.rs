//! Error taxonomy.
//!
//! Two tiers, kept as separate types so a fatal fault can never be matched
//! as retryable:
//!
//! - `InvalidMove`: a proposed move failed validation. Recoverable; the
//!   move-collection boundary should solicit a corrected move.
//! - `EngineError`: a bot strategy broke its contract. Unrecoverable; the
//!   match halts and the fault propagates to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Identity;

/// A move rejected by validation. The state it was proposed against is
/// left untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidMove {
    /// Classic: take outside the configured bounds.
    #[error("take of {taken} is outside the allowed range {min}..={max}")]
    OutOfBoundsTake { taken: u32, min: u32, max: u32 },

    /// Classic: take larger than the objects left on the pile.
    #[error("take of {taken} exceeds the {remaining} objects remaining")]
    InsufficientRemaining { taken: u32, remaining: u32 },

    /// Marienbad: pile index outside the layout.
    #[error("stack index {stack} is out of range for {stack_count} stacks")]
    InvalidStackIndex { stack: usize, stack_count: usize },

    /// Marienbad: take of zero, or more than the chosen pile holds.
    #[error("cannot take {taken} from stack {stack} holding {available}")]
    InvalidTakeForStack {
        taken: u32,
        stack: usize,
        available: u32,
    },
}

/// Fatal engine fault.
///
/// Strategies are contractually bound to produce legal moves, so a rejected
/// bot move is a logic defect in the strategy component, not user error.
/// The engine never substitutes a best-effort move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A bot strategy produced a move that failed validation.
    #[error("strategy for {player} produced an illegal move: {source}")]
    StrategyContractViolation {
        player: Identity,
        source: InvalidMove,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove::OutOfBoundsTake {
            taken: 5,
            min: 1,
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "take of 5 is outside the allowed range 1..=4"
        );

        let err = InvalidMove::InvalidStackIndex {
            stack: 7,
            stack_count: 4,
        };
        assert_eq!(err.to_string(), "stack index 7 is out of range for 4 stacks");
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::StrategyContractViolation {
            player: Identity::bot(),
            source: InvalidMove::InsufficientRemaining {
                taken: 4,
                remaining: 2,
            },
        };
        assert_eq!(
            err.to_string(),
            "strategy for bot produced an illegal move: take of 4 exceeds the 2 objects remaining"
        );
    }

    #[test]
    fn test_invalid_move_serialization() {
        let err = InvalidMove::InvalidTakeForStack {
            taken: 9,
            stack: 2,
            available: 5,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: InvalidMove = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
