//! Deck construction and dealing.

use tracing::debug;

use crate::cards::{Card, CardCollection, CardColor, CardId};
use crate::core::{GameRng, MenteurError, Result, RuleSet, MAX_DECK_SIZE};

/// Hands for every seat plus the leftover pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealtRound {
    /// One hand per seat, in seat order.
    pub hands: Vec<CardCollection>,
    /// Cards nobody received.
    pub pool: CardCollection,
}

/// Builds decks and deals hands.
///
/// The dealer owns its RNG stream: it is the only source of randomness for
/// hand composition, so two dealers seeded alike deal identical rounds.
#[derive(Clone, Debug)]
pub struct Dealer {
    rng: GameRng,
}

impl Dealer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Copies of each pool rank needed so that a full table can be dealt.
    #[must_use]
    pub fn copies_per_rank(rules: &RuleSet) -> usize {
        let needed = rules.max_players().saturating_mul(rules.hand_size());
        let pool = rules.rank_pool().len().max(1);
        needed
            .saturating_sub(rules.wildcard_count())
            .div_ceil(pool)
            .max(1)
    }

    /// Number of cards [`Dealer::build_deck`] produces for `rules`.
    #[must_use]
    pub fn deck_size(rules: &RuleSet) -> usize {
        Self::copies_per_rank(rules)
            .saturating_mul(rules.rank_pool().len())
            .saturating_add(rules.wildcard_count())
    }

    /// Build a fresh deck: the wildcards first, then every pool rank in
    /// pool order. Composition depends only on `rules`.
    pub fn build_deck(rules: &RuleSet) -> Result<CardCollection> {
        let size = Self::deck_size(rules);
        if size > MAX_DECK_SIZE {
            return Err(MenteurError::config(format!("deck of {} cards is too large", size)));
        }

        let mut deck = CardCollection::with_capacity(size);
        for copy in 0..rules.wildcard_count() {
            let id = CardId::new(deck.len() as u16);
            deck.add(Card::new(id, rules.wildcard(), CardColor::alternating(copy)));
        }
        for &rank in rules.rank_pool() {
            for copy in 0..Self::copies_per_rank(rules) {
                let id = CardId::new(deck.len() as u16);
                deck.add(Card::new(id, rank, CardColor::alternating(copy)));
            }
        }

        let needed = rules.max_players().saturating_mul(rules.hand_size());
        if deck.len() < needed {
            return Err(MenteurError::InsufficientCards {
                needed,
                available: deck.len(),
            });
        }

        debug!(cards = deck.len(), "built deck");
        Ok(deck)
    }

    /// Deal `hand_size` cards to each of `nb_players` seats.
    ///
    /// Cards are drawn uniformly at random from `deck` without replacement,
    /// one per seat per pass. What is left in `deck` afterwards is the pool.
    /// When the deck is too small nothing is drawn and `deck` is untouched.
    pub fn deal(
        &mut self,
        deck: &mut CardCollection,
        nb_players: usize,
        hand_size: usize,
    ) -> Result<Vec<CardCollection>> {
        let needed = nb_players.checked_mul(hand_size).unwrap_or(usize::MAX);
        if needed > deck.len() {
            return Err(MenteurError::InsufficientCards {
                needed,
                available: deck.len(),
            });
        }

        let mut hands: Vec<CardCollection> = (0..nb_players)
            .map(|_| CardCollection::with_capacity(hand_size))
            .collect();

        for _ in 0..hand_size {
            for hand in hands.iter_mut() {
                let position = self.rng.gen_index(deck.len());
                hand.add(deck.remove_at(position)?);
            }
        }

        debug!(players = nb_players, hand_size, pool = deck.len(), "dealt hands");
        Ok(hands)
    }

    /// Build a deck for `rules` and deal a hand to each of `nb_players`.
    pub fn deal_round(&mut self, rules: &RuleSet, nb_players: usize) -> Result<DealtRound> {
        if !rules.accepts_player_count(nb_players) {
            return Err(MenteurError::config(format!(
                "cannot deal to {} players, rules allow {} to {}",
                nb_players,
                rules.min_players(),
                rules.max_players()
            )));
        }
        let mut deck = Self::build_deck(rules)?;
        let hands = self.deal(&mut deck, nb_players, rules.hand_size())?;
        Ok(DealtRound { hands, pool: deck })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_default_deck_composition() {
        let rules = RuleSet::default();
        let deck = Dealer::build_deck(&rules).unwrap();

        assert_eq!(deck.len(), 20);
        assert_eq!(Dealer::copies_per_rank(&rules), 6);

        let count = |rank: Rank| deck.iter().filter(|c| c.rank() == rank).count();
        assert_eq!(count(Rank::Joker), 2);
        assert_eq!(count(Rank::Ace), 6);
        assert_eq!(count(Rank::King), 6);
        assert_eq!(count(Rank::Queen), 6);
    }

    #[test]
    fn test_deck_ids_unique() {
        let deck = Dealer::build_deck(&RuleSet::default()).unwrap();
        let ids: FxHashSet<_> = deck.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_deck_is_deterministic() {
        let rules = RuleSet::default();
        assert_eq!(Dealer::build_deck(&rules).unwrap(), Dealer::build_deck(&rules).unwrap());
    }

    #[test]
    fn test_small_hand_deck() {
        let rules = RuleSet::builder().hand_size(1).build().unwrap();
        // 4 seats * 1 card - 2 jokers = 2 cards over 3 ranks -> 1 copy each
        assert_eq!(Dealer::copies_per_rank(&rules), 1);
        assert_eq!(Dealer::deck_size(&rules), 5);
    }

    #[test]
    fn test_deal_counts() {
        let rules = RuleSet::default();
        let mut dealer = Dealer::new(GameRng::new(42));
        let round = dealer.deal_round(&rules, 3).unwrap();

        assert_eq!(round.hands.len(), 3);
        assert!(round.hands.iter().all(|h| h.len() == 5));
        assert_eq!(round.pool.len(), 5);
    }

    #[test]
    fn test_deal_full_table_leaves_empty_pool() {
        let rules = RuleSet::default();
        let mut dealer = Dealer::new(GameRng::new(1));
        let round = dealer.deal_round(&rules, 4).unwrap();
        assert!(round.pool.is_empty());
    }

    #[test]
    fn test_deal_reproducible() {
        let rules = RuleSet::default();
        let a = Dealer::new(GameRng::new(9)).deal_round(&rules, 2).unwrap();
        let b = Dealer::new(GameRng::new(9)).deal_round(&rules, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_too_many_leaves_deck_untouched() {
        let rules = RuleSet::default();
        let mut dealer = Dealer::new(GameRng::new(42));
        let mut deck = Dealer::build_deck(&rules).unwrap();
        let before = deck.clone();

        let err = dealer.deal(&mut deck, 5, 5).unwrap_err();

        assert_eq!(err, MenteurError::InsufficientCards { needed: 25, available: 20 });
        assert_eq!(deck, before);
    }

    #[test]
    fn test_deal_overflowing_request() {
        let mut dealer = Dealer::new(GameRng::new(42));
        let mut deck = Dealer::build_deck(&RuleSet::default()).unwrap();
        let before = deck.clone();

        let err = dealer.deal(&mut deck, usize::MAX, 2).unwrap_err();

        assert_eq!(
            err,
            MenteurError::InsufficientCards {
                needed: usize::MAX,
                available: 20
            }
        );
        assert_eq!(deck, before);
    }

    #[test]
    fn test_deal_round_rejects_seat_count() {
        let mut dealer = Dealer::new(GameRng::new(42));
        let rules = RuleSet::default();

        for seats in [0, 1, 5] {
            let err = dealer.deal_round(&rules, seats).unwrap_err();
            assert!(matches!(err, MenteurError::InvalidConfig { .. }), "{err}");
        }
    }
}
