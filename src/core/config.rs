//! Match configuration.
//!
//! A [`RuleSet`] fixes everything about a match up front: seat bounds, hand
//! size, which ranks the deck is built from, how many cards a play may
//! contain, the wildcard, and the starting life. The only field that moves
//! during a match is the **master rank**, rerolled once per round.
//!
//! ```
//! use menteur::cards::Rank;
//! use menteur::core::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .hand_size(4)
//!     .rank_pool(vec![Rank::Ace, Rank::King])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(rules.hand_size(), 4);
//! assert_eq!(rules.max_cards_played(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{MenteurError, Result};
use super::rng::GameRng;
use crate::cards::Rank;

/// Hard ceiling on seats at one table.
pub const TABLE_SEATS: usize = 4;

/// Card ids are 16-bit, so no deck may hold more cards than this.
pub const MAX_DECK_SIZE: usize = u16::MAX as usize;

/// Per-match rules.
///
/// Deserializing runs the same checks as [`RuleSetBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRuleSet")]
pub struct RuleSet {
    min_players: usize,
    max_players: usize,
    hand_size: usize,
    rank_pool: Vec<Rank>,
    wildcard: Rank,
    wildcard_count: usize,
    max_cards_played: usize,
    initial_life: u8,
    master_rank: Rank,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: TABLE_SEATS,
            hand_size: 5,
            rank_pool: vec![Rank::Ace, Rank::King, Rank::Queen],
            wildcard: Rank::Joker,
            wildcard_count: 2,
            max_cards_played: 3,
            initial_life: 6,
            master_rank: Rank::Ace,
        }
    }
}

impl RuleSet {
    /// Start from the default rules.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder {
            rules: RuleSet::default(),
        }
    }

    #[must_use]
    pub fn min_players(&self) -> usize {
        self.min_players
    }

    #[must_use]
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Cards dealt to each player at the start of a round.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Non-wildcard ranks the deck is built from.
    #[must_use]
    pub fn rank_pool(&self) -> &[Rank] {
        &self.rank_pool
    }

    #[must_use]
    pub fn wildcard(&self) -> Rank {
        self.wildcard
    }

    /// Number of wildcards in the deck.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.wildcard_count
    }

    /// Most cards a single play may contain.
    #[must_use]
    pub fn max_cards_played(&self) -> usize {
        self.max_cards_played
    }

    #[must_use]
    pub fn initial_life(&self) -> u8 {
        self.initial_life
    }

    /// Rank every play this round is claimed to match.
    #[must_use]
    pub fn master_rank(&self) -> Rank {
        self.master_rank
    }

    /// Is `count` a legal number of seats?
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }

    /// Pick a new master rank uniformly from the rank pool.
    ///
    /// Called exactly once at the start of every round.
    pub fn reroll_master_rank(&mut self, rng: &mut GameRng) -> Rank {
        if let Some(&rank) = rng.choose(&self.rank_pool) {
            self.master_rank = rank;
        }
        self.master_rank
    }

    #[cfg(test)]
    pub(crate) fn set_master_rank(&mut self, rank: Rank) {
        self.master_rank = rank;
    }
}

/// Builder for [`RuleSet`]. Validation happens in [`RuleSetBuilder::build`].
#[derive(Clone, Debug)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn player_bounds(mut self, min: usize, max: usize) -> Self {
        self.rules.min_players = min;
        self.rules.max_players = max;
        self
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.rules.hand_size = size;
        self
    }

    #[must_use]
    pub fn rank_pool(mut self, ranks: Vec<Rank>) -> Self {
        self.rules.rank_pool = ranks;
        self
    }

    #[must_use]
    pub fn wildcard(mut self, rank: Rank) -> Self {
        self.rules.wildcard = rank;
        self
    }

    #[must_use]
    pub fn wildcard_count(mut self, count: usize) -> Self {
        self.rules.wildcard_count = count;
        self
    }

    #[must_use]
    pub fn max_cards_played(mut self, count: usize) -> Self {
        self.rules.max_cards_played = count;
        self
    }

    #[must_use]
    pub fn initial_life(mut self, life: u8) -> Self {
        self.rules.initial_life = life;
        self
    }

    /// Validate and produce the rules.
    ///
    /// The master rank starts as the first rank of the pool until the first
    /// round rerolls it.
    pub fn build(self) -> Result<RuleSet> {
        let mut rules = self.rules;

        if rules.min_players < 2 {
            return Err(MenteurError::config("a match needs at least 2 players"));
        }
        if rules.max_players < rules.min_players {
            return Err(MenteurError::config(format!(
                "max players {} below min players {}",
                rules.max_players, rules.min_players
            )));
        }
        if rules.max_players > TABLE_SEATS {
            return Err(MenteurError::config(format!(
                "at most {} seats per table",
                TABLE_SEATS
            )));
        }
        if rules.hand_size == 0 {
            return Err(MenteurError::config("hand size must be positive"));
        }
        if rules.max_cards_played == 0 {
            return Err(MenteurError::config("a play must allow at least one card"));
        }
        if rules.initial_life == 0 {
            return Err(MenteurError::config("initial life must be positive"));
        }
        let deck_bound = rules
            .max_players
            .checked_mul(rules.hand_size)
            .and_then(|n| n.checked_add(rules.wildcard_count))
            .and_then(|n| n.checked_add(rules.rank_pool.len()));
        if !deck_bound.is_some_and(|n| n <= MAX_DECK_SIZE) {
            return Err(MenteurError::config(format!(
                "a deck for {} hands of {} cards exceeds {} cards",
                rules.max_players, rules.hand_size, MAX_DECK_SIZE
            )));
        }
        if rules.rank_pool.contains(&rules.wildcard) {
            return Err(MenteurError::config(format!(
                "rank pool must not contain the wildcard {}",
                rules.wildcard
            )));
        }

        let mut seen = Vec::with_capacity(rules.rank_pool.len());
        rules.rank_pool.retain(|rank| {
            let fresh = !seen.contains(rank);
            seen.push(*rank);
            fresh
        });
        let Some(&first) = rules.rank_pool.first() else {
            return Err(MenteurError::config("rank pool is empty"));
        };
        rules.master_rank = first;

        Ok(rules)
    }
}

/// Unchecked wire form of a [`RuleSet`].
#[derive(Deserialize)]
struct RawRuleSet {
    min_players: usize,
    max_players: usize,
    hand_size: usize,
    rank_pool: Vec<Rank>,
    wildcard: Rank,
    wildcard_count: usize,
    max_cards_played: usize,
    initial_life: u8,
    master_rank: Rank,
}

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = MenteurError;

    fn try_from(raw: RawRuleSet) -> Result<Self> {
        let mut rules = RuleSet::builder()
            .player_bounds(raw.min_players, raw.max_players)
            .hand_size(raw.hand_size)
            .rank_pool(raw.rank_pool)
            .wildcard(raw.wildcard)
            .wildcard_count(raw.wildcard_count)
            .max_cards_played(raw.max_cards_played)
            .initial_life(raw.initial_life)
            .build()?;
        if rules.rank_pool.contains(&raw.master_rank) {
            rules.master_rank = raw.master_rank;
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = RuleSet::builder().build().unwrap();

        assert_eq!(rules.min_players(), 2);
        assert_eq!(rules.max_players(), 4);
        assert_eq!(rules.hand_size(), 5);
        assert_eq!(rules.max_cards_played(), 3);
        assert_eq!(rules.wildcard(), Rank::Joker);
        assert_eq!(rules.wildcard_count(), 2);
        assert_eq!(rules.initial_life(), 6);
        assert_eq!(rules.rank_pool(), &[Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn test_accepts_player_count() {
        let rules = RuleSet::default();
        assert!(!rules.accepts_player_count(1));
        assert!(rules.accepts_player_count(2));
        assert!(rules.accepts_player_count(4));
        assert!(!rules.accepts_player_count(5));
    }

    #[test]
    fn test_reroll_stays_in_pool() {
        let mut rules = RuleSet::default();
        let mut rng = GameRng::new(42);
        let mut seen = Vec::new();

        for _ in 0..200 {
            let rank = rules.reroll_master_rank(&mut rng);
            assert!(rules.rank_pool().contains(&rank));
            assert_ne!(rank, rules.wildcard());
            assert_eq!(rules.master_rank(), rank);
            if !seen.contains(&rank) {
                seen.push(rank);
            }
        }

        assert_eq!(seen.len(), 3, "every pool rank should come up");
    }

    #[test]
    fn test_rejects_bad_configs() {
        let cases = [
            RuleSet::builder().player_bounds(1, 4),
            RuleSet::builder().player_bounds(3, 2),
            RuleSet::builder().player_bounds(2, 5),
            RuleSet::builder().hand_size(0),
            RuleSet::builder().max_cards_played(0),
            RuleSet::builder().initial_life(0),
            RuleSet::builder().rank_pool(vec![]),
            RuleSet::builder().rank_pool(vec![Rank::Ace, Rank::Joker]),
            RuleSet::builder().hand_size(usize::MAX / 2),
            RuleSet::builder().hand_size(20_000),
        ];

        for builder in cases {
            let err = builder.build().unwrap_err();
            assert!(matches!(err, MenteurError::InvalidConfig { .. }), "{err}");
        }
    }

    #[test]
    fn test_master_starts_at_first_pool_rank() {
        let rules = RuleSet::builder()
            .rank_pool(vec![Rank::Seven, Rank::Eight])
            .build()
            .unwrap();
        assert_eq!(rules.master_rank(), Rank::Seven);
    }

    #[test]
    fn test_serde() {
        let mut rules = RuleSet::builder().hand_size(3).build().unwrap();
        rules.set_master_rank(Rank::Queen);
        let json = serde_json::to_string(&rules).unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "min_players": 0,
            "max_players": 300,
            "hand_size": 0,
            "rank_pool": ["Joker"],
            "wildcard": "Joker",
            "wildcard_count": 2,
            "max_cards_played": 0,
            "initial_life": 0,
            "master_rank": "Joker"
        }"#;

        let err = serde_json::from_str::<RuleSet>(json).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"), "{err}");
    }

    #[test]
    fn test_largest_deck_fits_id_space() {
        let rules = RuleSet::builder().hand_size(16_000).build().unwrap();
        let deck = crate::dealer::Dealer::build_deck(&rules).unwrap();
        assert!(deck.len() <= MAX_DECK_SIZE);
    }
}
