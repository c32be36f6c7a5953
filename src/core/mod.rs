//! Core engine types: errors, seat ids, RNG, configuration.
//!
//! Everything here is independent of how a match is played out; the
//! `dealer`, `players` and `game` modules build on it.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{RuleSet, RuleSetBuilder, MAX_DECK_SIZE, TABLE_SEATS};
pub use error::{MenteurError, Result};
pub use player::{PlayerColor, PlayerId};
pub use rng::GameRng;
