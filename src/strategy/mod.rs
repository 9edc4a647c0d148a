//! Bot decision components.
//!
//! Strategies are the pluggable decision seam of the engine: given the
//! current state, produce a move. A strategy is contractually bound to
//! return a move that passes validation; the engine treats a rejected
//! strategy move as a fatal fault, never as something to correct.
//!
//! - `ClassicStrategy`: the modulo-invariant player for the single-pile
//!   variant (near-optimal under the default bounds)
//! - `MarienbadStrategy`: a greedy/endgame heuristic for the multi-pile
//!   variant (deliberately not a nim-sum solver)
//! - `RandomStrategy`: seeded uniform-random baseline

pub mod classic;
pub mod marienbad;
pub mod random;

pub use classic::ClassicStrategy;
pub use marienbad::MarienbadStrategy;
pub use random::RandomStrategy;

use crate::rules::Ruleset;

/// A bot move-decision component for one ruleset.
///
/// `decide` is only invoked on states the resolver classified as ongoing
/// (aggregate count of at least 2), and must return a legal move.
pub trait Strategy<R: Ruleset> {
    /// Choose the bot's move for the given state.
    fn decide(&mut self, state: &R::State) -> R::Move;

    /// Observe an opponent move.
    ///
    /// Called by the engine after each opposing move is applied, so
    /// stateful strategies can track the round. Default: ignore.
    fn observe(&mut self, _mv: &R::Move) {}
}
