//! Single-pile bounded-take variant.
//!
//! One pile of objects (21 in the traditional setup); each move removes
//! between `bounds.min` and `bounds.max` objects.

use serde::{Deserialize, Serialize};

use crate::core::ClassicConfig;
use crate::error::InvalidMove;

use super::Ruleset;

/// Classic match state: the count of objects still available.
///
/// `remaining` only ever decreases within a match and never drops below
/// zero; `validate` rejects any move that would violate that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicState {
    /// Objects still on the pile.
    pub remaining: u32,
}

/// A Classic move: how many objects to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicMove {
    /// Objects removed by this move.
    pub taken: u32,
}

impl ClassicMove {
    /// Create a move taking `taken` objects.
    #[must_use]
    pub fn new(taken: u32) -> Self {
        Self { taken }
    }
}

/// The single-pile ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classic {
    config: ClassicConfig,
}

impl Classic {
    /// Create a Classic ruleset from its configuration.
    #[must_use]
    pub fn new(config: ClassicConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ClassicConfig {
        &self.config
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new(ClassicConfig::default())
    }
}

impl Ruleset for Classic {
    type State = ClassicState;
    type Move = ClassicMove;

    fn initial_state(&self) -> ClassicState {
        ClassicState {
            remaining: self.config.initial,
        }
    }

    fn validate(&self, state: &ClassicState, mv: &ClassicMove) -> Result<ClassicState, InvalidMove> {
        let bounds = self.config.bounds;
        if !bounds.contains(mv.taken) {
            return Err(InvalidMove::OutOfBoundsTake {
                taken: mv.taken,
                min: bounds.min,
                max: bounds.max,
            });
        }
        if mv.taken > state.remaining {
            return Err(InvalidMove::InsufficientRemaining {
                taken: mv.taken,
                remaining: state.remaining,
            });
        }
        Ok(ClassicState {
            remaining: state.remaining - mv.taken,
        })
    }

    fn remaining(&self, state: &ClassicState) -> u32 {
        state.remaining
    }

    fn legal_moves(&self, state: &ClassicState) -> Vec<ClassicMove> {
        let bounds = self.config.bounds;
        (bounds.min..=bounds.max.min(state.remaining))
            .map(ClassicMove::new)
            .collect()
    }
}
