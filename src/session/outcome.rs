//! Turn phases and the results handed back to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::LandingAction;
use crate::core::PlayerId;
use crate::players::Move;

/// Where a turn stands.
///
/// `Moving`, `ResolvingLanding` and `TurnComplete` only exist while
/// `roll_and_resolve` or `resolve_purchase_decision` runs; between calls a
/// session is either awaiting a roll or awaiting a purchase decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingRoll,
    Moving,
    ResolvingLanding,
    AwaitingPurchaseDecision,
    TurnComplete,
}

/// What happened on the space a token stopped on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    NoAction,
    /// Waiting on `resolve_purchase_decision`.
    OfferPurchase { price: u32 },
    RentDue { owner: PlayerId, amount: u32 },
    /// The card's effect is left to the caller.
    DrawChance { card: String },
    DrawCommunityChest { card: String },
    PayTax { amount: u32 },
    MoveToJail { jail: u8 },
    DoNothing,
    Unrecognized,
}

impl Resolution {
    /// The landing action this resolution carried out.
    #[must_use]
    pub fn action(&self) -> LandingAction {
        match self {
            Resolution::NoAction => LandingAction::NoAction,
            Resolution::OfferPurchase { .. } => LandingAction::OfferPurchase,
            Resolution::RentDue { .. } => LandingAction::RentDue,
            Resolution::DrawChance { .. } => LandingAction::DrawChance,
            Resolution::DrawCommunityChest { .. } => LandingAction::DrawCommunityChest,
            Resolution::PayTax { .. } => LandingAction::PayTax,
            Resolution::MoveToJail { .. } => LandingAction::MoveToJail,
            Resolution::DoNothing => LandingAction::DoNothing,
            Resolution::Unrecognized => LandingAction::Unrecognized,
        }
    }
}

/// Full result of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingOutcome {
    /// The move, including any passing-Go bonus.
    pub movement: Move,
    pub resolution: Resolution,
    /// Whose turn it is now. Unchanged while a purchase is pending.
    pub next_player: PlayerId,
}

/// Result of a purchase decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOutcome {
    Bought { position: u8, price: u32 },
    Declined { position: u8 },
    /// The player chose to buy but cannot cover the price.
    Unaffordable { position: u8 },
}
