//! The life-chance roll.
//!
//! Applied to exactly one player per resolved challenge. Two independent
//! draws in `[1, life]`: a match eliminates the player outright, anything
//! else costs one life. Elimination odds are therefore `1/life`, and they
//! grow as life runs out. At one life the roll always eliminates.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Result of a life-chance roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeRoll {
    /// Lost one life.
    Survived { remaining: u8 },
    /// Life dropped to zero.
    Eliminated,
}

impl LifeRoll {
    #[must_use]
    pub fn is_eliminated(self) -> bool {
        matches!(self, LifeRoll::Eliminated)
    }

    /// Life left after the roll.
    #[must_use]
    pub fn remaining_life(self) -> u8 {
        match self {
            LifeRoll::Survived { remaining } => remaining,
            LifeRoll::Eliminated => 0,
        }
    }
}

/// Roll for a player currently at `life`.
pub fn life_chance_roll(life: u8, rng: &mut GameRng) -> LifeRoll {
    if life == 0 {
        return LifeRoll::Eliminated;
    }
    let first = rng.roll(1..=u32::from(life));
    let second = rng.roll(1..=u32::from(life));
    if first == second {
        LifeRoll::Eliminated
    } else {
        LifeRoll::Survived { remaining: life - 1 }
    }
}
