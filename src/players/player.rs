//! Seated players and the decision contract.
//!
//! A [`Player`] owns its hand, life, and stakes. The choice of *what* to do
//! on a turn is delegated to its [`Strategy`], which is either a human
//! behind an input provider or the built-in AI. Both implement [`Decide`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ai::AiPlayer;
use super::human::HumanPlayer;
use crate::cards::{Card, CardCollection, Rank};
use crate::core::{MenteurError, PlayerColor, PlayerId, Result, RuleSet};

/// Cards a player wants to put on the stack.
///
/// Positions are applied one after another: each indexes the hand as it
/// stands after the previous removals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySelection {
    positions: SmallVec<[usize; 3]>,
}

impl PlaySelection {
    #[must_use]
    pub fn new(positions: &[usize]) -> Self {
        Self {
            positions: SmallVec::from_slice(positions),
        }
    }

    /// Play a single card.
    #[must_use]
    pub fn single(position: usize) -> Self {
        Self::new(&[position])
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The play a challenger would be accusing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Who made the play.
    pub player: PlayerId,
    /// How many cards it put on the stack.
    pub count: usize,
    /// Rank the play is claimed to match.
    pub master: Rank,
}

/// Decision contract shared by humans and the AI.
pub trait Decide {
    /// Pick 1..=`max_cards_played` cards from `hand`. Bluffing is allowed.
    fn choose_play(&mut self, hand: &CardCollection, rules: &RuleSet) -> Result<PlaySelection>;

    /// Accuse the author of `claim` of lying?
    fn choose_challenge(&mut self, hand: &CardCollection, rules: &RuleSet, claim: &Claim) -> Result<bool>;
}

/// How a seat makes decisions.
#[derive(Debug)]
pub enum Strategy {
    Human(HumanPlayer),
    Ai(AiPlayer),
}

impl Decide for Strategy {
    fn choose_play(&mut self, hand: &CardCollection, rules: &RuleSet) -> Result<PlaySelection> {
        match self {
            Strategy::Human(human) => human.choose_play(hand, rules),
            Strategy::Ai(ai) => ai.choose_play(hand, rules),
        }
    }

    fn choose_challenge(&mut self, hand: &CardCollection, rules: &RuleSet, claim: &Claim) -> Result<bool> {
        match self {
            Strategy::Human(human) => human.choose_challenge(hand, rules, claim),
            Strategy::Ai(ai) => ai.choose_challenge(hand, rules, claim),
        }
    }
}

/// Everything needed to seat a player.
#[derive(Debug)]
pub struct SeatSpec {
    pub name: String,
    pub color: PlayerColor,
    pub balance: i64,
    pub strategy: Strategy,
}

impl SeatSpec {
    pub fn new(name: impl Into<String>, color: PlayerColor, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            color,
            balance: 0,
            strategy,
        }
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }
}

/// A seated player.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    balance: i64,
    bet: i64,
    life: u8,
    hand: CardCollection,
    strategy: Strategy,
}

impl Player {
    /// Seat a player with a full life bar and an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, spec: SeatSpec, initial_life: u8) -> Self {
        Self {
            id,
            name: spec.name,
            color: spec.color,
            balance: spec.balance,
            bet: 0,
            life: initial_life,
            hand: CardCollection::new(),
            strategy: spec.strategy,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Amount currently staked.
    #[must_use]
    pub fn bet(&self) -> i64 {
        self.bet
    }

    #[must_use]
    pub fn life(&self) -> u8 {
        self.life
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self.strategy, Strategy::Human(_))
    }

    #[must_use]
    pub fn hand(&self) -> &CardCollection {
        &self.hand
    }

    /// Move `amount` from the balance onto the current bet.
    pub fn place_bet(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(MenteurError::selection(format!("bet must be positive, got {}", amount)));
        }
        if amount > self.balance {
            return Err(MenteurError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Remove and return the current bet.
    pub(crate) fn take_bet(&mut self) -> i64 {
        std::mem::take(&mut self.bet)
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn set_life(&mut self, life: u8) {
        self.life = life;
    }

    /// Replace the hand with a freshly dealt one.
    pub(crate) fn receive_hand(&mut self, hand: CardCollection) {
        self.hand = hand;
    }

    /// Give up every card in hand.
    pub(crate) fn surrender_hand(&mut self) -> Vec<Card> {
        self.hand.take_all()
    }

    pub(crate) fn choose_play(&mut self, rules: &RuleSet) -> Result<PlaySelection> {
        self.strategy.choose_play(&self.hand, rules)
    }

    pub(crate) fn choose_challenge(&mut self, rules: &RuleSet, claim: &Claim) -> Result<bool> {
        self.strategy.choose_challenge(&self.hand, rules, claim)
    }

    /// Remove the selected cards from the hand.
    ///
    /// The whole selection is checked first; on error the hand is unchanged.
    pub(crate) fn commit_play(
        &mut self,
        selection: &PlaySelection,
        rules: &RuleSet,
    ) -> Result<SmallVec<[Card; 3]>> {
        let count = selection.len();
        if count == 0 || count > rules.max_cards_played() {
            return Err(MenteurError::selection(format!(
                "play must contain 1 to {} cards, got {}",
                rules.max_cards_played(),
                count
            )));
        }
        if count > self.hand.len() {
            return Err(MenteurError::selection(format!(
                "cannot play {} cards from a hand of {}",
                count,
                self.hand.len()
            )));
        }
        for (taken, &position) in selection.positions().iter().enumerate() {
            let remaining = self.hand.len() - taken;
            if position >= remaining {
                return Err(MenteurError::selection(format!(
                    "position {} out of bounds for {} cards",
                    position, remaining
                )));
            }
        }

        let mut played = SmallVec::new();
        for &position in selection.positions() {
            played.push(self.hand.remove_at(position)?);
        }
        Ok(played)
    }
}
