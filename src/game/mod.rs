//! Match orchestration.
//!
//! ## Key Types
//!
//! - `MatchController`: the round and turn state machine
//! - `TurnEvent`: what one step did
//! - `LifeRoll`: outcome of the roll a losing challenger or bluffer takes

mod controller;
mod event;
mod life;

pub use controller::MatchController;
pub use event::{ChallengeReport, MatchOutcome, Phase, RoundEndReason, TurnEvent};
pub use life::{life_chance_roll, LifeRoll};
