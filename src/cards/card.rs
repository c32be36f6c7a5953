//! Card values.
//!
//! A [`Card`] is immutable: its rank, color and numeric value are fixed when
//! the dealer builds it. The [`CardId`] tells two physical cards apart even
//! when they share rank and color.

use serde::{Deserialize, Serialize};

/// Identifier of a physical card within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rank: thirteen ordinal ranks plus the Joker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen ordinal ranks, lowest first.
    pub const ORDINAL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (Two = 2 .. Ace = 14). The Joker has none.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            Rank::Jack => Some(11),
            Rank::Queen => Some(12),
            Rank::King => Some(13),
            Rank::Ace => Some(14),
            Rank::Joker => None,
        }
    }

    /// Short label used when rendering cards.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JOKER",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card color. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// Alternate colors by copy index: even copies red, odd copies black.
    #[must_use]
    pub const fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

/// A physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    color: CardColor,
    value: Option<u8>,
}

impl Card {
    /// Create a card. The numeric value is derived from the rank here and
    /// never recomputed.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, color: CardColor) -> Self {
        Self {
            id,
            rank,
            color,
            value: rank.value(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.color
    }

    /// Numeric value, `None` for the Joker.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        self.value
    }

    /// Does this card back up a claim of `master`?
    ///
    /// The wildcard satisfies every claim.
    #[must_use]
    pub fn satisfies(&self, master: Rank, wildcard: Rank) -> bool {
        self.rank == wildcard || self.rank == master
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = match self.color {
            CardColor::Red => '\u{2665}',
            CardColor::Black => '\u{2660}',
        };
        write!(f, "{}{}", self.rank, suit)
    }
}
