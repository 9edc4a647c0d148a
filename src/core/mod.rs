//! Core types: participant identities and match configuration.

pub mod config;
pub mod player;

pub use config::{ClassicConfig, MarienbadConfig, TakeBounds};
pub use player::Identity;
