//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two competitors. Only the values 1 and 2
//! can be constructed, so the two identifiers are never equal and
//! `other()` is always defined.

use serde::{Deserialize, Serialize};

/// Identifier of one of the two players.
///
/// Player numbers are 1-based to match what players see: the first
/// player is `PlayerId::ONE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const ONE: PlayerId = PlayerId(1);

    /// The player who moves second.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player ID from its number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 | 2 => Some(Self(number)),
            _ => None,
        }
    }

    /// Get the player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self.0 {
            1 => Self::TWO,
            _ => Self::ONE,
        }
    }

    /// Iterate over both player IDs in turn order.
    ///
    /// ```
    /// use connect_four::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("player number must be 1 or 2, got {number}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(PlayerId::TWO.number(), 2);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
    }

    #[test]
    fn test_player_id_new() {
        assert_eq!(PlayerId::new(1), Some(PlayerId::ONE));
        assert_eq!(PlayerId::new(2), Some(PlayerId::TWO));
        assert_eq!(PlayerId::new(0), None);
        assert_eq!(PlayerId::new(3), None);
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
        assert_ne!(PlayerId::ONE, PlayerId::ONE.other());
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::TWO).unwrap();
        assert_eq!(json, "2");

        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::TWO);
    }

    #[test]
    fn test_player_id_rejects_invalid_number() {
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
        assert!(serde_json::from_str::<PlayerId>("3").is_err());
    }
}
