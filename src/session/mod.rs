//! Game orchestration: setup, turns, landing resolution.
//!
//! This is the entry point for presentation code. It calls `GameSession`
//! and renders what comes back.

pub mod setup;
pub mod outcome;
pub mod game;

pub use setup::{validate_setups, PlayerSetup, PIECE_COUNT};
pub use outcome::{LandingOutcome, PurchaseOutcome, Resolution, TurnPhase};
pub use game::GameSession;
