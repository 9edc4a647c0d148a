//! Greedy/endgame heuristic for the multi-pile variant.
//!
//! This is not a combinatorial-game solution: it never computes the
//! nim-sum of the piles and is beatable by an opponent who does. Endgame
//! positions (2 to 5 objects left in total) are played exactly, by leaving
//! the opponent a single object; everything before that just shrinks the
//! largest pile by one.

use crate::rules::{Marienbad, MarienbadMove, MarienbadState};

use super::Strategy;

/// The heuristic Marienbad bot.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarienbadStrategy;

impl MarienbadStrategy {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Strategy<Marienbad> for MarienbadStrategy {
    fn decide(&mut self, state: &MarienbadState) -> MarienbadMove {
        let stacks = &state.stacks;
        let total = state.total();

        // Endgame: leave the opponent facing exactly one object, if a
        // single pile can supply the whole take.
        if (2..=5).contains(&total) {
            let need = total - 1;
            if let Some(stack) = stacks.iter().position(|&s| s >= need) {
                return MarienbadMove::new(stack, need);
            }
            // No pile holds enough; chip one off the first non-empty pile.
            let stack = stacks
                .iter()
                .position(|&s| s > 0)
                .expect("decide called on an empty board");
            return MarienbadMove::new(stack, 1);
        }

        // Midgame: shrink the largest imbalance. First pile wins ties.
        let mut largest = 0;
        for (stack, &count) in stacks.iter().enumerate() {
            if count > stacks[largest] {
                largest = stack;
            }
        }
        MarienbadMove::new(largest, 1)
    }
}
