//! Card values and collections.
//!
//! ## Key Types
//!
//! - `Card`: immutable card (rank, color, derived value, instance id)
//! - `Rank`: thirteen ordinal ranks plus the Joker
//! - `CardCollection`: hand, play stack, or undealt pool

pub mod card;
pub mod collection;

pub use card::{Card, CardColor, CardId, Rank};
pub use collection::CardCollection;
