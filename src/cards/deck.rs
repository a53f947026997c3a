//! Chance and Community Chest decks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{GameError, GameRng, Result};

/// The sixteen Chance cards.
pub const CHANCE: [&str; 16] = [
    "Advance to Boardwalk.",
    "Advance to Go (Collect $200).",
    "Advance to Illinois Avenue. If you pass Go, collect $200.",
    "Advance to St. Charles Place. If you pass Go, collect $200.",
    "Advance to the nearest Railroad. If unowned, you may buy it from the Bank. If owned, pay owner twice the rental to which they are otherwise entitled.",
    "Advance to the nearest Railroad. If unowned, you may buy it from the Bank. If owned, pay owner twice the rental to which they are otherwise entitled.",
    "Advance token to nearest Utility. If unowned, you may buy it from the Bank. If owned, throw dice and pay owner a total ten times amount thrown.",
    "Bank pays you dividend of $50.",
    "Get Out of Jail Free.",
    "Go Back 3 Spaces.",
    "Go to Jail. Go directly to Jail, do not pass Go, do not collect $200.",
    "Make general repairs on all your property. For each house pay $25. For each hotel pay $100.",
    "Speeding fine $15.",
    "Take a trip to Reading Railroad. If you pass Go, collect $200.",
    "You have been elected Chairman of the Board. Pay each player $50.",
    "Your building loan matures. Collect $150",
];

/// The sixteen Community Chest cards.
pub const COMMUNITY_CHEST: [&str; 16] = [
    "Advance to Go (Collect $200)",
    "Bank error in your favor. Collect $200",
    "Doctor's fee. Pay $50",
    "From sale of stock you get $50",
    "Get Out of Jail Free",
    "Go to Jail. Go directly to jail, do not pass Go, do not collect $200",
    "Holiday fund matures. Receive $100",
    "Income tax refund. Collect $20",
    "It is your birthday. Collect $10 from every player",
    "Life insurance matures. Collect $100",
    "Pay hospital fees of $100",
    "Pay school fees of $50",
    "Receive $25 consultancy fee",
    "You are assessed for street repair. $40 per house. $115 per hotel",
    "You have won second prize in a beauty contest. Collect $10",
    "You inherit $100",
];

/// Which deck to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardDeck {
    Chance,
    CommunityChest,
}

impl CardDeck {
    /// Every card text in this deck.
    #[must_use]
    pub fn cards(self) -> &'static [&'static str] {
        match self {
            CardDeck::Chance => &CHANCE,
            CardDeck::CommunityChest => &COMMUNITY_CHEST,
        }
    }

    /// Draw a uniformly random card. Cards are not removed from the deck.
    pub fn draw(self, rng: &mut GameRng) -> &'static str {
        // Both decks hold sixteen cards, so the default is never taken.
        rng.choose(self.cards()).copied().unwrap_or_default()
    }
}

impl FromStr for CardDeck {
    type Err = GameError;

    /// Case-insensitive; "community" and "chest" alone also name the
    /// Community Chest deck.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chance" => Ok(CardDeck::Chance),
            "community chest" | "community" | "chest" => Ok(CardDeck::CommunityChest),
            _ => Err(GameError::InvalidCardDeck(s.to_string())),
        }
    }
}

/// Draw a card from the deck named by `deck`.
///
/// ```
/// use monopoly_core::cards::{draw_card, COMMUNITY_CHEST};
/// use monopoly_core::core::GameRng;
///
/// let mut rng = GameRng::new(1);
/// let card = draw_card("chest", &mut rng).unwrap();
/// assert!(COMMUNITY_CHEST.contains(&card));
/// assert!(draw_card("bingo", &mut rng).is_err());
/// ```
pub fn draw_card(deck: &str, rng: &mut GameRng) -> Result<&'static str> {
    Ok(deck.parse::<CardDeck>()?.draw(rng))
}
