//! Built-in AI.
//!
//! The AI never looks at the stack. Its only input is how many of its own
//! cards back up the current master rank:
//!
//! - **Challenge**: roll a die in `0..=6` and accuse when the roll is at
//!   most its confidence. Holding nothing that matches still accuses on a
//!   roll of 0, i.e. one time in seven.
//! - **Play**: always a single card, the first one in hand, whether or not
//!   it matches.

use tracing::trace;

use super::player::{Claim, Decide, PlaySelection};
use crate::cards::CardCollection;
use crate::core::{GameRng, Result, RuleSet};

/// Highest face of the accusation die (the die is `0..=ACCUSATION_DIE_MAX`).
pub const ACCUSATION_DIE_MAX: u32 = 6;

/// Computer-controlled strategy with its own RNG stream.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    rng: GameRng,
}

impl AiPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Cards in `hand` that match the master rank or are wildcards.
    #[must_use]
    pub fn confidence(hand: &CardCollection, rules: &RuleSet) -> usize {
        hand.count_satisfying(rules.master_rank(), rules.wildcard())
    }
}

impl Decide for AiPlayer {
    fn choose_play(&mut self, _hand: &CardCollection, _rules: &RuleSet) -> Result<PlaySelection> {
        Ok(PlaySelection::single(0))
    }

    fn choose_challenge(&mut self, hand: &CardCollection, rules: &RuleSet, claim: &Claim) -> Result<bool> {
        let confidence = Self::confidence(hand, rules);
        let roll = self.rng.roll(0..=ACCUSATION_DIE_MAX);
        let accuse = roll as usize <= confidence;
        trace!(accused = %claim.player, confidence, roll, accuse, "ai challenge decision");
        Ok(accuse)
    }
}
