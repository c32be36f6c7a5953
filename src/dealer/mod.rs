//! Deck construction and dealing.
//!
//! The deck is rebuilt from the `RuleSet` every round: the configured number
//! of wildcards plus enough copies of each pool rank to deal a full table.
//! Dealing draws uniformly without replacement from a seeded stream.

mod deal;

pub use deal::{Dealer, DealtRound};
