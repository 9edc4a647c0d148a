//! # rust-nim
//!
//! A turn-based match-elimination (Nim family) game engine.
//!
//! Two players alternately remove objects from one or more piles under
//! bounded-take rules; whoever must take the last object loses (misère
//! play). The engine is an in-process library with no I/O of its own:
//! prompting, parsing, and rendering live behind the `MoveProvider` and
//! `OutcomeSink` seams.
//!
//! ## Design Principles
//!
//! 1. **Ruleset-Agnostic Engine**: The state machine never inspects pile
//!    layouts or take bounds. Variants implement the `Ruleset` trait.
//!
//! 2. **Configuration Over Constants**: Take bounds and initial layouts are
//!    explicit immutable config values, so differently-configured matches
//!    can coexist without shared globals.
//!
//! 3. **Pure Validation**: `Ruleset::validate` computes the successor state
//!    without touching the input. The engine owns the one mutable copy.
//!
//! ## Modules
//!
//! - `core`: Participant identities and match configuration
//! - `rules`: The `Ruleset` trait, the Classic and Marienbad variants,
//!   and end-of-turn resolution
//! - `strategy`: Bot decision components (modulo-invariant, greedy
//!   heuristic, seeded random baseline)
//! - `engine`: The match state machine and its event/provider seams
//! - `error`: Recoverable validation errors and fatal engine faults

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{ClassicConfig, Identity, MarienbadConfig, TakeBounds};

pub use crate::rules::{
    resolve_turn, Classic, ClassicMove, ClassicState, Marienbad, MarienbadMove, MarienbadState,
    Ruleset, TurnOutcome,
};

pub use crate::strategy::{ClassicStrategy, MarienbadStrategy, RandomStrategy, Strategy};

pub use crate::engine::{
    GameEngine, MatchEvent, MatchResult, MoveProvider, Mover, NullSink, OutcomeSink,
};

pub use crate::error::{EngineError, InvalidMove};
