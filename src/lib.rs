//! # menteur
//!
//! Engine for Menteur, a bluffing card game for two to four players.
//!
//! Each round a master rank is drawn. Players take turns laying one to
//! three cards face down while claiming they all match it; jokers match
//! anything. The next player may accept the claim or call it. A called play
//! is revealed and whoever was wrong takes a life-chance roll, which
//! eliminates with probability `1/life`. The last player standing wins.
//!
//! ## Design
//!
//! - **Step-driven**: [`MatchController::step`] performs one transition and
//!   returns a [`TurnEvent`], so a front end can drive the match at its own
//!   pace. [`MatchController::run`] loops to the end.
//!
//! - **Pluggable decisions**: human and computer players implement the
//!   same [`Decide`] trait. Humans answer through an [`InputProvider`].
//!
//! - **Deterministic**: every random draw comes from a seeded [`GameRng`],
//!   so a seed plus scripted input replays a match exactly.
//!
//! ## Modules
//!
//! - `core`: player ids, rules, RNG, errors
//! - `cards`: cards, ranks, and ordered card collections
//! - `dealer`: deck construction and dealing
//! - `players`: player state and decision strategies
//! - `render`: text rendering of cards for logs and prompts
//! - `game`: the match state machine and its events

pub mod cards;
pub mod core;
pub mod dealer;
pub mod game;
pub mod players;
pub mod render;

pub use crate::core::{
    GameRng, MenteurError, PlayerColor, PlayerId, Result, RuleSet, RuleSetBuilder,
    TABLE_SEATS,
};

pub use crate::cards::{Card, CardCollection, CardColor, CardId, Rank};

pub use crate::dealer::{Dealer, DealtRound};

pub use crate::players::{
    AiPlayer, Claim, Decide, HumanPlayer, InputProvider, PlaySelection, Player, ScriptedInput,
    SeatSpec, Strategy,
};

pub use crate::render::{Renderer, TextRenderer};

pub use crate::game::{
    life_chance_roll, ChallengeReport, LifeRoll, MatchController, MatchOutcome, Phase,
    RoundEndReason, TurnEvent,
};
