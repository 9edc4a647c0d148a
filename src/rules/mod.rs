//! Rulesets: variant-specific legality and state transitions.
//!
//! The engine drives a `Ruleset` without knowing which variant it is
//! running. Two implementations are provided:
//!
//! - `Classic`: one pile, bounded takes
//! - `Marienbad`: several piles, any positive take from one pile
//!
//! End-of-turn classification is shared across variants and lives in
//! `resolver`.

pub mod classic;
pub mod marienbad;
pub mod resolver;

pub use classic::{Classic, ClassicMove, ClassicState};
pub use marienbad::{Marienbad, MarienbadMove, MarienbadState};
pub use resolver::{resolve_turn, TurnOutcome};

use crate::error::InvalidMove;

/// A game variant.
///
/// Implementations define the state shape, the move shape, and the legality
/// rules. The engine calls these methods during gameplay.
///
/// ## Implementation Notes
///
/// - `validate` is pure: it never mutates the input state. On success it
///   returns the successor state; the caller decides whether to adopt it.
/// - `remaining` is the aggregate object count the resolver classifies on.
/// - `legal_moves` enumerates every move `validate` would accept, used by
///   baseline strategies and property tests.
pub trait Ruleset {
    /// Match state for this variant.
    type State: Clone + std::fmt::Debug + PartialEq;

    /// Move shape for this variant.
    type Move: Clone + std::fmt::Debug + PartialEq;

    /// The state a fresh match starts from.
    fn initial_state(&self) -> Self::State;

    /// Check a proposed move and compute the successor state.
    ///
    /// Returns the new state on success. The input state is left untouched
    /// either way.
    fn validate(&self, state: &Self::State, mv: &Self::Move) -> Result<Self::State, InvalidMove>;

    /// Aggregate count of objects still on the board.
    fn remaining(&self, state: &Self::State) -> u32;

    /// Enumerate every legal move from `state`.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;
}
