//! What landing on a space requires.

use serde::{Deserialize, Serialize};

/// Consequence of a token stopping on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingAction {
    /// The player already owns the space.
    NoAction,
    /// The space is for sale.
    OfferPurchase,
    /// Another player owns the space.
    RentDue,
    DrawChance,
    DrawCommunityChest,
    PayTax,
    MoveToJail,
    /// Go, Jail and Free Parking.
    DoNothing,
    /// A space the rules have no action for, e.g. a card space whose name
    /// names no deck.
    Unrecognized,
}
