//! Modulo-invariant strategy for the single-pile variant.
//!
//! With the default bounds `1..=4`, `min + max == 5`: if the bot answers
//! every opponent take `t` with `5 - t`, each full round removes exactly 5
//! objects and the pile walks the sequence 21, 16, 11, 6, 1. Every value
//! congruent to 1 modulo 5 is a losing position for whoever must move from
//! it, so the opponent can never escape.
//!
//! When the bot has to open the match from 21 it is itself on a losing
//! residue and cannot force the invariant; it takes a single object and
//! waits for a suboptimal reply.

use crate::core::TakeBounds;
use crate::rules::{Classic, ClassicMove, ClassicState};

use super::Strategy;

/// The invariant-chasing Classic bot.
#[derive(Clone, Debug, Default)]
pub struct ClassicStrategy {
    bounds: TakeBounds,
    /// Most recent opponent take, if any. `None` both when the bot opens
    /// the match and as the defensive fallback when no opposing move has
    /// been observed yet.
    last_seen_take: Option<u32>,
}

impl ClassicStrategy {
    /// Create a strategy for the given take bounds.
    #[must_use]
    pub fn new(bounds: TakeBounds) -> Self {
        Self {
            bounds,
            last_seen_take: None,
        }
    }
}

impl Strategy<Classic> for ClassicStrategy {
    fn decide(&mut self, state: &ClassicState) -> ClassicMove {
        let remaining = state.remaining;

        // Endgame: leave the opponent facing exactly one object.
        if remaining >= 2 && remaining <= self.bounds.max + 1 {
            return ClassicMove::new(remaining - 1);
        }

        let taken = match self.last_seen_take {
            // Restore the round total: answer a take of t with min+max-t.
            Some(t) => {
                let target = self.bounds.round_total().saturating_sub(t);
                target.clamp(self.bounds.min, self.bounds.max.min(remaining))
            }
            // Opening move from a losing residue (and the fallback when
            // invoked without a prior opposing move): take as little as
            // possible.
            None => 1.min(remaining),
        };
        ClassicMove::new(taken)
    }

    fn observe(&mut self, mv: &ClassicMove) {
        self.last_seen_take = Some(mv.taken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> ClassicStrategy {
        ClassicStrategy::new(TakeBounds::default())
    }

    #[test]
    fn test_endgame_leaves_exactly_one() {
        for remaining in 2..=5 {
            let mut s = strategy();
            let mv = s.decide(&ClassicState { remaining });
            assert_eq!(mv.taken, remaining - 1, "from {remaining}");
        }
    }

    #[test]
    fn test_endgame_beats_round_answer() {
        // Even with an observed opponent take, the winning endgame move
        // is preferred.
        let mut s = strategy();
        s.observe(&ClassicMove::new(1));
        assert_eq!(s.decide(&ClassicState { remaining: 5 }).taken, 4);
    }

    #[test]
    fn test_second_mover_restores_invariant() {
        // From every losing residue r (21, 16, 11, 6), an opponent take of
        // t leaves r - t; the answer must be 5 - t so the round removes
        // exactly 5.
        for r in [21u32, 16, 11, 6] {
            for t in 1..=4u32 {
                let mut s = strategy();
                s.observe(&ClassicMove::new(t));
                let mv = s.decide(&ClassicState { remaining: r - t });
                assert_eq!(mv.taken, 5 - t, "r={r} t={t}");
                assert_eq!((r - t - mv.taken) % 5, 1);
            }
        }
    }

    #[test]
    fn test_opening_takes_one() {
        let mut s = strategy();
        assert_eq!(s.decide(&ClassicState { remaining: 21 }).taken, 1);
    }

    #[test]
    fn test_fallback_without_observed_move() {
        // Midgame state but no opposing move seen: degrade to the minimal
        // take instead of failing.
        let mut s = strategy();
        assert_eq!(s.decide(&ClassicState { remaining: 13 }).taken, 1);
        assert_eq!(s.decide(&ClassicState { remaining: 1 }).taken, 1);
    }

    #[test]
    fn test_answer_is_clamped_to_bounds() {
        let mut s = ClassicStrategy::new(TakeBounds::new(1, 4));
        s.observe(&ClassicMove::new(4));
        // 5 - 4 = 1, already within bounds
        assert_eq!(s.decide(&ClassicState { remaining: 17 }).taken, 1);
        s.observe(&ClassicMove::new(1));
        assert_eq!(s.decide(&ClassicState { remaining: 16 }).taken, 4);
    }
}
