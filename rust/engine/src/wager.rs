use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default chip denomination; every stake is an integer multiple of this.
pub const DEFAULT_CHIP_UNIT: u32 = 5;

/// Default bankroll a table opens with.
pub const STARTING_BANKROLL: f64 = 1_000.0;

/// Per-hand wager state. The blind always mirrors the ante; the play bet is
/// zero until the single bet decision of the hand is made.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    ante: u32,
    blind: u32,
    trips: u32,
    play: u32,
}

impl Wager {
    pub fn new(ante: u32, trips: u32) -> Self {
        Self {
            ante,
            blind: ante,
            trips,
            play: 0,
        }
    }

    pub fn ante(&self) -> u32 {
        self.ante
    }
    pub fn blind(&self) -> u32 {
        self.blind
    }
    pub fn trips(&self) -> u32 {
        self.trips
    }
    pub fn play(&self) -> u32 {
        self.play
    }

    /// Records the play bet. The engine's state machine guarantees this
    /// happens at most once per hand.
    pub fn place_play_bet(&mut self, amount: u32) {
        self.play = amount;
    }

    /// Total chips committed to the hand so far.
    pub fn staked(&self) -> u32 {
        self.ante + self.blind + self.trips + self.play
    }
}

/// Stakes must be positive multiples of the table's chip unit.
pub fn validate_stake(amount: u32, unit: u32) -> Result<(), GameError> {
    if amount == 0 || unit == 0 || amount % unit != 0 {
        return Err(GameError::InvalidStake { amount, unit });
    }
    Ok(())
}
