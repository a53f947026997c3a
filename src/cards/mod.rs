//! Card decks drawn when landing on Chance or Community Chest.
//!
//! Only the card text is produced here; applying a card's effect is left to
//! the caller.

pub mod deck;

pub use deck::{draw_card, CardDeck, CHANCE, COMMUNITY_CHEST};
