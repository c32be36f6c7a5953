//! Seat identification.
//!
//! ## PlayerId
//!
//! Stable seat identifier. Ids are handed out at setup in seating order and
//! never reused, so an id keeps referring to the same player after others
//! have been eliminated.
//!
//! ## PlayerColor
//!
//! Cosmetic seat color chosen at setup.

use serde::{Deserialize, Serialize};

/// Seat identifier, 0-based in seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Seat color. Four seats, four colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Rose,
    Black,
    Blue,
    Green,
}

impl PlayerColor {
    /// All colors in the order they are offered at setup.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Rose,
        PlayerColor::Black,
        PlayerColor::Blue,
        PlayerColor::Green,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Rose => "rose",
            PlayerColor::Black => "black",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p1.0, 1);
        assert_eq!(format!("{}", p1), "Player 1");
        assert!(p0 < p1);
    }

    #[test]
    fn test_colors() {
        assert_eq!(PlayerColor::ALL.len(), 4);
        assert_eq!(PlayerColor::Rose.to_string(), "rose");
        assert_eq!(PlayerColor::Green.name(), "green");
    }
}
