//! Human decisions through an input provider.
//!
//! The engine never reads a terminal itself. A front end implements
//! [`InputProvider`] and the [`HumanPlayer`] turns its answers into plays
//! and accusations.

use std::collections::VecDeque;

use tracing::warn;

use super::player::{Claim, Decide, PlaySelection};
use crate::cards::{Card, CardCollection};
use crate::core::{MenteurError, Result, RuleSet};

/// Source of integer answers for a human seat.
pub trait InputProvider {
    /// Ask `text` and return a value in `[min, max]`.
    ///
    /// Implementations keep asking until they get a value in range, or give
    /// up with [`MenteurError::PromptCancelled`].
    fn prompt(&mut self, text: &str, min: i64, max: i64) -> Result<i64>;
}

/// Fixed list of answers, handed out in order.
///
/// Returns [`MenteurError::PromptCancelled`] once the answers run out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<i64>,
}

impl ScriptedInput {
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn prompt(&mut self, _text: &str, _min: i64, _max: i64) -> Result<i64> {
        self.answers.pop_front().ok_or(MenteurError::PromptCancelled)
    }
}

/// Human seat backed by an [`InputProvider`].
pub struct HumanPlayer {
    input: Box<dyn InputProvider>,
}

impl std::fmt::Debug for HumanPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer").finish_non_exhaustive()
    }
}

impl HumanPlayer {
    pub fn new(input: impl InputProvider + 'static) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Prompt until the answer lies in `[min, max]`.
    fn ask(&mut self, text: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let answer = self.input.prompt(text, min, max)?;
            if (min..=max).contains(&answer) {
                return Ok(answer);
            }
            warn!(answer, min, max, "answer out of range, asking again");
        }
    }
}

fn render(cards: &[Card]) -> String {
    let labels: Vec<String> = cards.iter().map(ToString::to_string).collect();
    labels.join(" ")
}

impl Decide for HumanPlayer {
    fn choose_play(&mut self, hand: &CardCollection, rules: &RuleSet) -> Result<PlaySelection> {
        if hand.is_empty() {
            return Err(MenteurError::selection("cannot play from an empty hand"));
        }

        let max = rules.max_cards_played().min(hand.len());
        let count = self.ask(
            &format!(
                "Your hand: {}. Claim: {}. How many cards do you play?",
                hand,
                rules.master_rank()
            ),
            1,
            max as i64,
        )?;

        let mut remaining: Vec<Card> = hand.cards().to_vec();
        let mut positions = Vec::with_capacity(count as usize);
        for n in 1..=count {
            let text = format!(
                "Remaining: {}. Position of card {} of {}, counting from the left:",
                render(&remaining),
                n,
                count
            );
            let position = self.ask(&text, 1, remaining.len() as i64)? as usize - 1;
            remaining.remove(position);
            positions.push(position);
        }

        Ok(PlaySelection::new(&positions))
    }

    fn choose_challenge(&mut self, hand: &CardCollection, rules: &RuleSet, claim: &Claim) -> Result<bool> {
        let text = format!(
            "Your hand: {}. {} played {} card(s) as {}. Call the bluff? (1: yes, 2: no)",
            hand,
            claim.player,
            claim.count,
            rules.master_rank()
        );
        Ok(self.ask(&text, 1, 2)? == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, CardId, Rank};
    use crate::core::PlayerId;

    fn hand_of(ranks: &[Rank]) -> CardCollection {
        ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| Card::new(CardId::new(i as u16), r, CardColor::Red))
            .collect()
    }

    fn claim() -> Claim {
        Claim {
            player: PlayerId::new(0),
            count: 2,
            master: Rank::Ace,
        }
    }

    #[test]
    fn test_play_positions_are_zero_based() {
        let rules = RuleSet::default();
        let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Queen]);
        let mut human = HumanPlayer::new(ScriptedInput::new([2, 3, 1]));

        let selection = human.choose_play(&hand, &rules).unwrap();
        assert_eq!(selection.positions(), &[2, 0]);
    }

    #[test]
    fn test_out_of_range_answers_are_asked_again() {
        let rules = RuleSet::default();
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        // 3 cards is over the hand size, 0 is below the minimum.
        let mut human = HumanPlayer::new(ScriptedInput::new([3, 0, 1, 9, 2]));

        let selection = human.choose_play(&hand, &rules).unwrap();
        assert_eq!(selection.positions(), &[1]);
    }

    #[test]
    fn test_challenge_answers() {
        let rules = RuleSet::default();
        let hand = hand_of(&[Rank::Ace]);
        let mut human = HumanPlayer::new(ScriptedInput::new([1, 2, 5, 1]));

        assert!(human.choose_challenge(&hand, &rules, &claim()).unwrap());
        assert!(!human.choose_challenge(&hand, &rules, &claim()).unwrap());
        assert!(human.choose_challenge(&hand, &rules, &claim()).unwrap());
    }

    #[test]
    fn test_exhausted_input_cancels() {
        let rules = RuleSet::default();
        let hand = hand_of(&[Rank::Ace]);
        let mut human = HumanPlayer::new(ScriptedInput::new([]));

        let err = human.choose_challenge(&hand, &rules, &claim()).unwrap_err();
        assert_eq!(err, MenteurError::PromptCancelled);
    }

    #[test]
    fn test_empty_hand_is_invalid() {
        let rules = RuleSet::default();
        let mut human = HumanPlayer::new(ScriptedInput::new([1]));

        let err = human.choose_play(&CardCollection::new(), &rules).unwrap_err();
        assert!(matches!(err, MenteurError::InvalidSelection { .. }));
    }
}
