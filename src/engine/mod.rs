//! The match state machine and its boundary seams.
//!
//! - `machine`: `GameEngine`, the per-seat `Mover`, and the consumed
//!   `MoveProvider` interface
//! - `events`: `MatchEvent`, the exposed `OutcomeSink` interface

pub mod events;
pub mod machine;

pub use events::{MatchEvent, NullSink, OutcomeSink};
pub use machine::{GameEngine, MatchResult, MoveProvider, Mover};
