//! Ordered card collections.
//!
//! One type covers the three places a card can sit during a round:
//!
//! - a player's private **hand** (positional removal)
//! - the shared **play stack** (append only, cleared each round)
//! - the undealt **pool**
//!
//! Index 0 is the oldest card; the last index is the most recently added.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};
use crate::core::{MenteurError, Result};

/// Ordered, duplicate-tolerant sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Append a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the card at `position`.
    pub fn remove_at(&mut self, position: usize) -> Result<Card> {
        if position >= self.cards.len() {
            return Err(MenteurError::selection(format!(
                "position {} out of bounds for {} cards",
                position,
                self.cards.len()
            )));
        }
        Ok(self.cards.remove(position))
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Move every card out, leaving the collection empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// All cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The `count` most recently added cards, without removing them.
    ///
    /// Returns fewer cards if the collection holds fewer than `count`.
    #[must_use]
    pub fn peek_last_play(&self, count: usize) -> &[Card] {
        let start = self.cards.len().saturating_sub(count);
        &self.cards[start..]
    }

    /// Number of cards that back up a claim of `master`.
    #[must_use]
    pub fn count_satisfying(&self, master: Rank, wildcard: Rank) -> usize {
        self.cards.iter().filter(|c| c.satisfies(master, wildcard)).count()
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}
