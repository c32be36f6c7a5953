//! Whole-match tests driven through the public API.

use menteur::{
    AiPlayer, GameRng, HumanPlayer, MatchController, MenteurError, Phase, PlayerColor, PlayerId,
    RoundEndReason, RuleSet, ScriptedInput, SeatSpec, Strategy, TextRenderer, TurnEvent,
};

fn ai_seats(count: usize) -> Vec<SeatSpec> {
    let mut root = GameRng::new(1234);
    PlayerColor::ALL
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, color)| {
            SeatSpec::new(format!("AI_{}", i + 1), color, Strategy::Ai(AiPlayer::new(root.fork())))
        })
        .collect()
}

fn lives(ctrl: &MatchController) -> Vec<(PlayerId, u8)> {
    let mut all: Vec<_> = ctrl
        .active_players()
        .iter()
        .chain(ctrl.eliminated())
        .map(|p| (p.id(), p.life()))
        .collect();
    all.sort();
    all
}

#[test]
fn test_ai_match_keeps_invariants() {
    for players in 2..=4 {
        let mut ctrl = MatchController::new(RuleSet::default(), ai_seats(players), 99)
            .unwrap()
            .with_renderer(TextRenderer);
        let mut active = ctrl.active_players().len();

        loop {
            let before = lives(&ctrl);
            let event = ctrl.step().unwrap();
            ctrl.audit().unwrap();

            let now = ctrl.active_players().len();
            assert!(now <= active, "active players never come back");
            active = now;

            if let TurnEvent::Challenged(report) = &event {
                let after = lives(&ctrl);
                let changed: Vec<_> = before
                    .iter()
                    .zip(&after)
                    .filter(|(b, a)| b.1 != a.1)
                    .map(|(b, _)| b.0)
                    .collect();
                assert_eq!(changed, vec![report.roller], "one roll per challenge");
                assert!(ctrl.last_play().is_none());
            }

            if let TurnEvent::MatchEnded { winner, .. } = event {
                assert_eq!(ctrl.active_players().len(), 1);
                assert_eq!(ctrl.active_players()[0].id(), winner);
                assert_eq!(ctrl.eliminated().len(), players - 1);
                break;
            }
        }

        assert_eq!(ctrl.phase(), Phase::MatchEnd);
        assert!(matches!(ctrl.step(), Err(MenteurError::IllegalState { .. })));
    }
}

#[test]
fn test_master_rank_comes_from_pool() {
    let mut ctrl = MatchController::new(RuleSet::default(), ai_seats(3), 5).unwrap();

    while !ctrl.is_over() {
        if let TurnEvent::RoundStarted { master_rank, .. } = ctrl.step().unwrap() {
            assert!(ctrl.rules().rank_pool().contains(&master_rank));
            assert_eq!(ctrl.master_rank(), master_rank);
        }
    }
}

#[test]
fn test_same_seed_same_match() {
    let play = |seed| {
        let mut ctrl = MatchController::new(RuleSet::default(), ai_seats(4), seed).unwrap();
        let mut events = Vec::new();
        while !ctrl.is_over() {
            events.push(ctrl.step().unwrap());
        }
        (events, ctrl.outcome())
    };

    let (events, outcome) = play(31);
    assert_eq!(play(31), (events.clone(), outcome.clone()));
    assert!(outcome.is_some());
    assert!(!events.is_empty());
}

#[test]
fn test_winner_takes_all_bets() {
    let seats = ai_seats(3)
        .into_iter()
        .map(|s| s.with_balance(100))
        .collect();
    let mut ctrl = MatchController::new(RuleSet::default(), seats, 17).unwrap();

    ctrl.place_bet(PlayerId::new(0), 10).unwrap();
    ctrl.place_bet(PlayerId::new(1), 20).unwrap();
    ctrl.place_bet(PlayerId::new(2), 30).unwrap();
    assert!(matches!(
        ctrl.place_bet(PlayerId::new(0), 500),
        Err(MenteurError::InsufficientBalance { .. })
    ));

    let outcome = ctrl.run().unwrap();
    assert_eq!(outcome.pot, 60);

    let balances: i64 = ctrl
        .active_players()
        .iter()
        .chain(ctrl.eliminated())
        .map(|p| p.balance())
        .sum();
    assert_eq!(balances, 300, "bets move money, they never create it");

    let winner = ctrl.player(outcome.winner).unwrap();
    assert_eq!(winner.bet(), 0);
    assert!(winner.balance() >= 100 + 60 - 30);
}

#[test]
fn test_scripted_round_between_two_humans() {
    let seat = |name: &str, color, answers: &[i64]| {
        let input = ScriptedInput::new(answers.iter().copied());
        SeatSpec::new(name, color, Strategy::Human(HumanPlayer::new(input)))
    };
    // Ana: play one, decline then play one, play her last card.
    // Bo: decline then play one, let the last play stand.
    let seats = vec![
        seat("Ana", PlayerColor::Rose, &[1, 1, 2, 1, 1]),
        seat("Bo", PlayerColor::Green, &[2, 1, 1, 2]),
    ];
    let rules = RuleSet::builder().hand_size(2).build().unwrap();
    let mut ctrl = MatchController::new(rules, seats, 8).unwrap();
    let (ana, bo) = (PlayerId::new(0), PlayerId::new(1));

    assert!(matches!(ctrl.step().unwrap(), TurnEvent::RoundStarted { round: 1, players: 2, .. }));

    let expected = [
        TurnEvent::Played { player: ana, count: 1, cards_left: 1 },
        TurnEvent::Played { player: bo, count: 1, cards_left: 1 },
        TurnEvent::Played { player: ana, count: 1, cards_left: 0 },
        TurnEvent::Declined { player: bo, accused: ana },
        TurnEvent::RoundEnded { round: 1, reason: RoundEndReason::HandEmptied(ana) },
    ];
    for want in expected {
        assert_eq!(ctrl.step().unwrap(), want);
        ctrl.audit().unwrap();
    }

    assert!(ctrl.active_players().iter().all(|p| p.life() == 6));
    assert_eq!(ctrl.turns(), 4);

    // Both scripts are spent: the next round deals, then the first prompt fails.
    assert!(matches!(ctrl.step().unwrap(), TurnEvent::RoundStarted { round: 2, .. }));
    assert_eq!(ctrl.step().unwrap_err(), MenteurError::PromptCancelled);
    assert_eq!(ctrl.phase(), Phase::RoundEnd);
}
