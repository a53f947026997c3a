//! Error type shared by every game operation.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::RentTier;
use crate::session::TurnPhase;

/// Result alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Local validation failures. None of these are transient: each one means the
/// caller passed something the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid space number {0}, expected 1..=40")]
    InvalidSpace(u8),

    #[error("{0} is not in this game")]
    InvalidPlayer(PlayerId),

    #[error("invalid player count {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid card type {0:?}")]
    InvalidCardDeck(String),

    #[error("space {position} has no rent for tier {tier:?}")]
    MissingRentTier { position: u8, tier: RentTier },

    #[error("invalid player setup: {0}")]
    InvalidSetup(String),

    #[error("invalid board table: {0}")]
    InvalidBoard(String),

    #[error("turn is {actual:?}, expected {expected:?}")]
    InvalidTurnPhase {
        expected: TurnPhase,
        actual: TurnPhase,
    },
}
