//! Structured match events for the presentation layer.
//!
//! The engine carries no formatting or localization logic. It emits these
//! events through an `OutcomeSink` and leaves rendering to the surrounding
//! layer.

use serde::{Deserialize, Serialize};

use crate::core::Identity;
use crate::rules::Ruleset;

/// An event emitted by the engine during a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "R::State: Serialize, R::Move: Serialize",
    deserialize = "R::State: serde::de::DeserializeOwned, R::Move: serde::de::DeserializeOwned"
))]
pub enum MatchEvent<R: Ruleset> {
    /// A validated move was applied.
    MoveApplied {
        player: Identity,
        mv: R::Move,
        state: R::State,
    },
    /// The match ended. Emitted exactly once, last.
    MatchEnded { winner: Identity, loser: Identity },
}

/// Receiver for match events.
pub trait OutcomeSink<R: Ruleset> {
    /// Handle one event.
    fn emit(&mut self, event: MatchEvent<R>);
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl<R: Ruleset> OutcomeSink<R> for NullSink {
    fn emit(&mut self, _event: MatchEvent<R>) {}
}
