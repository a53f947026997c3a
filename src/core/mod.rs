//! Core types: players, RNG, dice, rules configuration, errors.
//!
//! These building blocks know nothing about the board layout; the board,
//! card and session modules are built on top of them.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use dice::{roll, roll_dice, DiceRoll};
pub use config::RulesConfig;
pub use error::{GameError, Result};
