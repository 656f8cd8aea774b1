use thiserror::Error;

use crate::engine::HandStage;

/// Error taxonomy for table operations.
///
/// Fund and stake errors are recoverable: the action is rejected with no
/// state change. `EmptyDeck` and `InsufficientCards` are invariant violations
/// that abort the current hand and require a fresh deal.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Insufficient funds: stake requires {required}, bankroll has {available}")]
    InsufficientFunds { required: f64, available: f64 },
    #[error("Invalid stake: {amount} is not a positive multiple of the {unit}-chip unit")]
    InvalidStake { amount: u32, unit: u32 },
    #[error("{action} is not allowed in the {stage:?} stage")]
    InvalidStateTransition {
        stage: HandStage,
        action: &'static str,
    },
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Hand evaluation needs at least 5 cards, got {got}")]
    InsufficientCards { got: usize },
}
