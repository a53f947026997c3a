//! # monopoly-core
//!
//! Board and turn rules for a local-multiplayer property trading board game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, input or audio. A UI calls
//!    `GameSession` and draws what it returns.
//!
//! 2. **Owned State**: The board and players belong to one `GameSession`;
//!    there is no process-wide game instance.
//!
//! 3. **Deterministic**: All randomness comes from an injected, seeded
//!    `GameRng`, so any game can be replayed in a test.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, dice, rules configuration, errors
//! - `board`: The 40 spaces, ownership, houses, rent, landing actions
//! - `cards`: Chance and Community Chest decks
//! - `players`: Cash, positions, turn order
//! - `session`: Setup validation and turn resolution

pub mod core;
pub mod board;
pub mod cards;
pub mod players;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    DiceRoll, RulesConfig,
    GameError, Result,
};

pub use crate::board::{Board, GroupId, LandingAction, Owner, RentTier, Space, SpaceKind};

pub use crate::cards::{draw_card, CardDeck};

pub use crate::players::{Move, PlayerState, Players};

pub use crate::session::{
    GameSession, LandingOutcome, PlayerSetup, PurchaseOutcome, Resolution, TurnPhase,
};
