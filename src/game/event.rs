//! Match phases and the events a step produces.

use serde::{Deserialize, Serialize};

use super::life::LifeRoll;
use crate::cards::{Card, Rank};
use crate::core::PlayerId;

/// Where the match controller is in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Next step rerolls the master rank and deals.
    RoundStart,
    /// Next step asks the current player to challenge or play.
    PlayerTurn,
    /// Next step closes the round.
    RoundEnd,
    /// Terminal.
    MatchEnd,
}

/// Why a round closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// This player played the last card of their hand.
    HandEmptied(PlayerId),
    /// Eliminations left fewer than two players.
    TooFewPlayers,
    /// A decision failed and the round was abandoned.
    Halted,
}

/// What happened during a challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeReport {
    pub accuser: PlayerId,
    pub accused: PlayerId,
    /// The accused play, face up.
    pub revealed: Vec<Card>,
    /// Every revealed card matched the master rank or was a wildcard.
    pub truthful: bool,
    /// Who took the life-chance roll.
    pub roller: PlayerId,
    pub roll: LifeRoll,
}

/// Result of one [`step`](super::MatchController::step).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    RoundStarted {
        round: u32,
        master_rank: Rank,
        players: usize,
    },
    Played {
        player: PlayerId,
        count: usize,
        cards_left: usize,
    },
    /// The player let the final play of a round stand.
    Declined { player: PlayerId, accused: PlayerId },
    Challenged(ChallengeReport),
    RoundEnded { round: u32, reason: RoundEndReason },
    MatchEnded { winner: PlayerId, pot: i64 },
}

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    /// Rounds dealt.
    pub rounds: u32,
    /// Completed turns (plays, challenges, and declined final calls).
    pub turns: u64,
    /// Eliminated players, first out first.
    pub eliminated: Vec<PlayerId>,
    /// Sum of all bets paid to the winner.
    pub pot: i64,
}
