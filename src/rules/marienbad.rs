//! Multi-pile variant.
//!
//! Several piles (1-3-5-7 in the traditional layout); each move picks one
//! pile and removes any positive number of objects from it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::MarienbadConfig;
use crate::error::InvalidMove;

use super::Ruleset;

/// Marienbad match state: one counter per pile.
///
/// The pile count is fixed at match start; emptied piles stay in place with
/// a count of zero. The total only ever decreases within a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarienbadState {
    /// Objects on each pile.
    pub stacks: SmallVec<[u32; 4]>,
}

impl MarienbadState {
    /// Total objects across all piles.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.stacks.iter().sum()
    }
}

/// A Marienbad move: which pile, and how many objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarienbadMove {
    /// Pile index (0-based).
    pub stack: usize,
    /// Objects removed from that pile.
    pub taken: u32,
}

impl MarienbadMove {
    /// Create a move taking `taken` objects from pile `stack`.
    #[must_use]
    pub fn new(stack: usize, taken: u32) -> Self {
        Self { stack, taken }
    }
}

/// The multi-pile ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marienbad {
    config: MarienbadConfig,
}

impl Marienbad {
    /// Create a Marienbad ruleset from its configuration.
    #[must_use]
    pub fn new(config: MarienbadConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MarienbadConfig {
        &self.config
    }
}

impl Default for Marienbad {
    fn default() -> Self {
        Self::new(MarienbadConfig::default())
    }
}

impl Ruleset for Marienbad {
    type State = MarienbadState;
    type Move = MarienbadMove;

    fn initial_state(&self) -> MarienbadState {
        MarienbadState {
            stacks: self.config.layout.clone(),
        }
    }

    fn validate(
        &self,
        state: &MarienbadState,
        mv: &MarienbadMove,
    ) -> Result<MarienbadState, InvalidMove> {
        let Some(&available) = state.stacks.get(mv.stack) else {
            return Err(InvalidMove::InvalidStackIndex {
                stack: mv.stack,
                stack_count: state.stacks.len(),
            });
        };
        if mv.taken < 1 || mv.taken > available {
            return Err(InvalidMove::InvalidTakeForStack {
                taken: mv.taken,
                stack: mv.stack,
                available,
            });
        }
        let mut stacks = state.stacks.clone();
        stacks[mv.stack] -= mv.taken;
        Ok(MarienbadState { stacks })
    }

    fn remaining(&self, state: &MarienbadState) -> u32 {
        state.total()
    }

    fn legal_moves(&self, state: &MarienbadState) -> Vec<MarienbadMove> {
        let mut moves = Vec::new();
        for (stack, &count) in state.stacks.iter().enumerate() {
            for taken in 1..=count {
                moves.push(MarienbadMove::new(stack, taken));
            }
        }
        moves
    }
}
