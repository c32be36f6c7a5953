//! Dealing invariants across rule variations.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use menteur::{Dealer, GameRng, MenteurError, Rank, RuleSet};

fn rules(hand_size: usize, pool: Vec<Rank>, wildcards: usize) -> RuleSet {
    RuleSet::builder()
        .hand_size(hand_size)
        .rank_pool(pool)
        .wildcard_count(wildcards)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn test_deal_conserves_cards(
        seed in any::<u64>(),
        players in 2usize..=4,
        hand_size in 1usize..=8,
        pool_len in 1usize..=5,
        wildcards in 0usize..=4,
    ) {
        let pool = Rank::ORDINAL[Rank::ORDINAL.len() - pool_len..].to_vec();
        let rules = rules(hand_size, pool, wildcards);
        let mut dealer = Dealer::new(GameRng::new(seed));

        let round = dealer.deal_round(&rules, players).unwrap();

        prop_assert_eq!(round.hands.len(), players);
        prop_assert!(round.hands.iter().all(|h| h.len() == hand_size));

        let all: Vec<_> = round
            .hands
            .iter()
            .flat_map(|h| h.iter())
            .chain(round.pool.iter())
            .collect();
        prop_assert_eq!(all.len(), Dealer::deck_size(&rules));

        let ids: FxHashSet<_> = all.iter().map(|c| c.id()).collect();
        prop_assert_eq!(ids.len(), all.len());
    }
}

#[test]
fn test_too_many_seats_for_deck() {
    let rules = rules(5, vec![Rank::Ace], 0);
    let mut deck = Dealer::build_deck(&rules).unwrap();
    let before = deck.clone();
    let mut dealer = Dealer::new(GameRng::new(1));

    let err = dealer.deal(&mut deck, 4, 50).unwrap_err();

    assert!(matches!(err, MenteurError::InsufficientCards { .. }));
    assert_eq!(deck, before, "a failed deal leaves the deck untouched");
}

#[test]
fn test_same_seed_same_hands() {
    let rules = RuleSet::default();
    let a = Dealer::new(GameRng::new(7)).deal_round(&rules, 3).unwrap();
    let b = Dealer::new(GameRng::new(7)).deal_round(&rules, 3).unwrap();
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.pool, b.pool);
}
