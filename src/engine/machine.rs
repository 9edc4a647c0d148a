//! The match state machine.
//!
//! One `GameEngine` owns one match: the ruleset, the evolving state, and
//! the two seats. Each step obtains a move for the current seat, validates
//! it, applies it, emits `MoveApplied`, and asks the resolver whether the
//! match is over. `Continue` swaps the seats; `Ended` returns the result.
//!
//! Rejected moves are handled by origin:
//! - Human seat: the validation error goes back to the `MoveProvider`
//!   (whose prompting loop solicits a corrected move) and the engine asks
//!   again. The engine never substitutes a move.
//! - Bot seat: strategies are contractually bound to produce legal moves,
//!   so a rejection is a fatal `StrategyContractViolation`.
//!
//! Single-threaded and synchronous; the only suspension point is
//! `MoveProvider::next_move`. No state survives the match: replay means a
//! fresh engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::core::Identity;
use crate::error::{EngineError, InvalidMove};
use crate::rules::{resolve_turn, Ruleset, TurnOutcome};
use crate::strategy::Strategy;

use super::events::{MatchEvent, OutcomeSink};

/// Source of moves collected outside the engine (a prompting loop, a test
/// script). The engine re-validates whatever it returns.
pub trait MoveProvider<R: Ruleset> {
    /// Produce the next move for `player` facing `state`.
    fn next_move(&mut self, state: &R::State, player: &Identity) -> R::Move;

    /// The previous move was rejected; a corrected one will be requested.
    ///
    /// Default: ignore. Interactive providers surface the error to the
    /// player before re-prompting.
    fn move_rejected(&mut self, _err: &InvalidMove) {}
}

/// Where a seat's moves come from.
pub enum Mover<R: Ruleset> {
    /// An external move-collection boundary.
    Human(Box<dyn MoveProvider<R>>),
    /// A bot strategy. Must only produce legal moves.
    Bot(Box<dyn Strategy<R>>),
}

/// Final classification of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Identity,
    pub loser: Identity,
}

struct Seat<R: Ruleset> {
    identity: Identity,
    mover: Mover<R>,
}

/// The per-match state machine.
///
/// ## Example
///
/// ```no_run
/// use rust_nim::{Classic, ClassicStrategy, GameEngine, Identity, Mover, NullSink, TakeBounds};
/// # struct Prompt;
/// # impl rust_nim::MoveProvider<Classic> for Prompt {
/// #     fn next_move(&mut self, _: &rust_nim::ClassicState, _: &Identity) -> rust_nim::ClassicMove {
/// #         unimplemented!()
/// #     }
/// # }
///
/// let mut engine = GameEngine::new(
///     Classic::default(),
///     (Identity::new("Alice"), Mover::Human(Box::new(Prompt))),
///     (Identity::bot(), Mover::Bot(Box::new(ClassicStrategy::new(TakeBounds::default())))),
/// );
/// let result = engine.run(&mut NullSink).unwrap();
/// println!("{} beats {}", result.winner, result.loser);
/// ```
pub struct GameEngine<R: Ruleset> {
    ruleset: R,
    state: R::State,
    seats: [Seat<R>; 2],
    turn: usize,
    finished: bool,
}

impl<R: Ruleset> GameEngine<R> {
    /// Create an engine for one match. `starter` moves first.
    #[must_use]
    pub fn new(ruleset: R, starter: (Identity, Mover<R>), opponent: (Identity, Mover<R>)) -> Self {
        let state = ruleset.initial_state();
        Self {
            ruleset,
            state,
            seats: [
                Seat {
                    identity: starter.0,
                    mover: starter.1,
                },
                Seat {
                    identity: opponent.0,
                    mover: opponent.1,
                },
            ],
            turn: 0,
            finished: false,
        }
    }

    /// The current match state.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Identity of the participant whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Identity {
        &self.seats[self.turn % 2].identity
    }

    /// Drive the match to completion.
    ///
    /// Loops turn by turn until the resolver declares a terminal state,
    /// emitting `MoveApplied` after every applied move and `MatchEnded`
    /// once at the end. A `StrategyContractViolation` aborts the match.
    ///
    /// The engine is spent afterwards; construct a new one to replay.
    pub fn run(&mut self, sink: &mut dyn OutcomeSink<R>) -> Result<MatchResult, EngineError> {
        assert!(!self.finished, "Engine already ran its match");

        loop {
            let cur = self.turn % 2;
            let other = (self.turn + 1) % 2;
            let current_id = self.seats[cur].identity.clone();
            let other_id = self.seats[other].identity.clone();

            let (mv, next_state) = self.obtain_move(cur, &current_id)?;
            self.state = next_state;

            // Let the opposing strategy see the move before it may be
            // asked to answer it.
            if let Mover::Bot(strategy) = &mut self.seats[other].mover {
                strategy.observe(&mv);
            }

            let remaining = self.ruleset.remaining(&self.state);
            debug!(player = %current_id, mv = ?mv, remaining, "move applied");
            sink.emit(MatchEvent::MoveApplied {
                player: current_id.clone(),
                mv,
                state: self.state.clone(),
            });

            match resolve_turn(&current_id, &other_id, remaining) {
                TurnOutcome::Ended { winner, loser } => {
                    self.finished = true;
                    debug!(%winner, %loser, "match ended");
                    sink.emit(MatchEvent::MatchEnded {
                        winner: winner.clone(),
                        loser: loser.clone(),
                    });
                    return Ok(MatchResult { winner, loser });
                }
                TurnOutcome::Continue => {
                    self.turn += 1;
                }
            }
        }
    }

    /// Obtain and validate a move for the seat at `cur`.
    ///
    /// Human rejections loop back to the provider; bot rejections are
    /// fatal.
    fn obtain_move(
        &mut self,
        cur: usize,
        current_id: &Identity,
    ) -> Result<(R::Move, R::State), EngineError> {
        match &mut self.seats[cur].mover {
            Mover::Human(provider) => loop {
                let mv = provider.next_move(&self.state, current_id);
                match self.ruleset.validate(&self.state, &mv) {
                    Ok(next) => return Ok((mv, next)),
                    Err(err) => {
                        warn!(player = %current_id, %err, "move rejected");
                        provider.move_rejected(&err);
                    }
                }
            },
            Mover::Bot(strategy) => {
                let mv = strategy.decide(&self.state);
                match self.ruleset.validate(&self.state, &mv) {
                    Ok(next) => Ok((mv, next)),
                    Err(source) => {
                        error!(player = %current_id, %source, "strategy contract violation");
                        Err(EngineError::StrategyContractViolation {
                            player: current_id.clone(),
                            source,
                        })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassicConfig, TakeBounds};
    use crate::rules::{Classic, ClassicMove, ClassicState};
    use crate::strategy::ClassicStrategy;

    use std::cell::RefCell;
    use std::rc::Rc;

    /// Plays a fixed script of moves, recording rejections.
    struct Scripted {
        moves: Vec<ClassicMove>,
        next: usize,
        rejections: Rc<RefCell<Vec<InvalidMove>>>,
    }

    impl Scripted {
        fn new(takes: &[u32]) -> Self {
            Self {
                moves: takes.iter().map(|&t| ClassicMove::new(t)).collect(),
                next: 0,
                rejections: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Shared handle to the recorded rejections, usable after the
        /// provider has been boxed into the engine.
        fn rejections(&self) -> Rc<RefCell<Vec<InvalidMove>>> {
            Rc::clone(&self.rejections)
        }
    }

    impl MoveProvider<Classic> for Scripted {
        fn next_move(&mut self, _state: &ClassicState, _player: &Identity) -> ClassicMove {
            let mv = self.moves[self.next];
            self.next += 1;
            mv
        }

        fn move_rejected(&mut self, err: &InvalidMove) {
            self.rejections.borrow_mut().push(err.clone());
        }
    }

    fn bot() -> Mover<Classic> {
        Mover::Bot(Box::new(ClassicStrategy::new(TakeBounds::default())))
    }

    #[test]
    fn test_engine_initial_seating() {
        let engine = GameEngine::new(
            Classic::default(),
            (Identity::new("Alice"), bot()),
            (Identity::bot(), bot()),
        );
        assert_eq!(engine.current_player(), &Identity::new("Alice"));
        assert_eq!(engine.state().remaining, 21);
    }

    #[test]
    fn test_bot_endgame_run() {
        // Starting from 3 with the bot to move: take 2, leave 1, opponent
        // loses without ever being asked for a move.
        let mut engine = GameEngine::new(
            Classic::new(ClassicConfig::new(3)),
            (Identity::bot(), bot()),
            (
                Identity::new("Alice"),
                Mover::Human(Box::new(Scripted::new(&[]))),
            ),
        );
        let result = engine.run(&mut crate::engine::NullSink).unwrap();
        assert_eq!(result.winner, Identity::bot());
        assert_eq!(result.loser, Identity::new("Alice"));
        assert_eq!(engine.state().remaining, 1);
    }

    #[test]
    fn test_human_retry_after_rejection() {
        // Two humans; the first proposes an out-of-bounds take of 5, then
        // corrects to 3. The match goes on from there.
        let first = Scripted::new(&[5, 3]);
        let rejections = first.rejections();
        let mut engine = GameEngine::new(
            Classic::new(ClassicConfig::new(6)),
            (Identity::new("Alice"), Mover::Human(Box::new(first))),
            (
                Identity::new("Bob"),
                Mover::Human(Box::new(Scripted::new(&[2]))),
            ),
        );
        // 6 -(3)-> 3 -(2)-> 1: Bob's move leaves one, Alice loses.
        let result = engine.run(&mut crate::engine::NullSink).unwrap();
        assert_eq!(result.winner, Identity::new("Bob"));
        assert_eq!(result.loser, Identity::new("Alice"));
        assert_eq!(
            rejections.borrow().as_slice(),
            &[InvalidMove::OutOfBoundsTake {
                taken: 5,
                min: 1,
                max: 4
            }]
        );
    }

    #[test]
    fn test_strategy_contract_violation_is_fatal() {
        struct IllegalBot;
        impl Strategy<Classic> for IllegalBot {
            fn decide(&mut self, _state: &ClassicState) -> ClassicMove {
                ClassicMove::new(99)
            }
        }

        let mut engine = GameEngine::new(
            Classic::default(),
            (Identity::bot(), Mover::Bot(Box::new(IllegalBot))),
            (
                Identity::new("Alice"),
                Mover::Human(Box::new(Scripted::new(&[]))),
            ),
        );
        let err = engine.run(&mut crate::engine::NullSink).unwrap_err();
        assert_eq!(
            err,
            EngineError::StrategyContractViolation {
                player: Identity::bot(),
                source: InvalidMove::OutOfBoundsTake {
                    taken: 99,
                    min: 1,
                    max: 4
                },
            }
        );
        // State untouched by the rejected move
        assert_eq!(engine.state().remaining, 21);
    }

    #[test]
    #[should_panic(expected = "Engine already ran its match")]
    fn test_engine_is_spent_after_run() {
        let mut engine = GameEngine::new(
            Classic::new(ClassicConfig::new(3)),
            (Identity::bot(), bot()),
            (Identity::new("Alice"), bot()),
        );
        engine.run(&mut crate::engine::NullSink).unwrap();
        let _ = engine.run(&mut crate::engine::NullSink);
    }
}
