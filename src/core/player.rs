//! Participant identification.
//!
//! ## Identity
//!
//! Opaque label distinguishing a participant: a human player's name, or the
//! conventional `"bot"` label. The engine compares identities by exact value
//! only. Case or whitespace normalization is a collaborator concern and is
//! never applied here.

use serde::{Deserialize, Serialize};

/// Conventional label for the bot participant.
pub const BOT_LABEL: &str = "bot";

/// Opaque participant label.
///
/// ## Example
///
/// ```
/// use rust_nim::Identity;
///
/// let alice = Identity::new("Alice");
/// let bot = Identity::bot();
///
/// assert_eq!(alice.as_str(), "Alice");
/// assert_ne!(alice, bot);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a label.
    ///
    /// The label is stored as given. `"Alice"` and `"alice"` are distinct.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The bot participant.
    #[must_use]
    pub fn bot() -> Self {
        Self(BOT_LABEL.to_string())
    }

    /// Get the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_exact_equality() {
        assert_eq!(Identity::new("Alice"), Identity::new("Alice"));
        assert_ne!(Identity::new("Alice"), Identity::new("alice"));
        assert_ne!(Identity::new("Alice"), Identity::new("Alice "));
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(format!("{}", Identity::new("Bob")), "Bob");
        assert_eq!(format!("{}", Identity::bot()), "bot");
    }

    #[test]
    fn test_bot_label() {
        assert_eq!(Identity::bot(), Identity::new(BOT_LABEL));
        assert_eq!(Identity::bot().as_str(), "bot");
    }

    #[test]
    fn test_identity_serialization() {
        let id = Identity::new("Carol");
        let json = serde_json::to_string(&id).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
