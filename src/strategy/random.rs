//! Seeded uniform-random baseline strategy.
//!
//! Picks uniformly among the legal moves of whichever ruleset it is built
//! for. Deterministic: the same seed against the same opponent replays the
//! same match. Useful as a baseline opponent in tests and strategy
//! comparisons.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::rules::Ruleset;

use super::Strategy;

/// Uniform-random legal mover for any ruleset.
#[derive(Clone, Debug)]
pub struct RandomStrategy<R: Ruleset> {
    ruleset: R,
    rng: ChaCha8Rng,
}

impl<R: Ruleset> RandomStrategy<R> {
    /// Create a random strategy for `ruleset` with the given seed.
    #[must_use]
    pub fn new(ruleset: R, seed: u64) -> Self {
        Self {
            ruleset,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Ruleset> Strategy<R> for RandomStrategy<R> {
    fn decide(&mut self, state: &R::State) -> R::Move {
        let moves = self.ruleset.legal_moves(state);
        moves
            .choose(&mut self.rng)
            .expect("decide called on a state with no legal moves")
            .clone()
    }
}
