//! Players and their decision strategies.
//!
//! ## Key Types
//!
//! - `Player`: a seat (identity, life, stakes, hand)
//! - `Decide`: the play/challenge decision contract
//! - `Strategy`: `Human` or `Ai`, the only two implementations
//! - `InputProvider`: where human answers come from
//! - `PlaySelection`, `Claim`: what a decision is about

pub mod ai;
pub mod human;
pub mod player;

pub use ai::{AiPlayer, ACCUSATION_DIE_MAX};
pub use human::{HumanPlayer, InputProvider, ScriptedInput};
pub use player::{Claim, Decide, PlaySelection, Player, SeatSpec, Strategy};
