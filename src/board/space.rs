//! Board spaces and their rent tables.
//!
//! A `Space` is one of the 40 fixed board positions. What a space can do is
//! carried by its `SpaceKind`: only properties hold houses, only properties,
//! railroads and utilities have a price.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Highest house count; the fifth tier stands for a hotel.
pub const MAX_HOUSES: u8 = 5;

/// Identifier of a set of spaces that share rent escalation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u8);

impl GroupId {
    /// Pseudo-group of the four railroads.
    pub const RAILROADS: GroupId = GroupId(9);

    /// Pseudo-group of the two utilities.
    pub const UTILITIES: GroupId = GroupId(10);
}

/// Who holds a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Held by the game itself; can never be bought (Go, Jail, taxes, cards).
    Bank,
    /// For sale.
    Unowned,
    /// Bought by a player.
    Player(PlayerId),
}

impl Owner {
    /// The owning player, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Owner::Player(p) => Some(p),
            Owner::Bank | Owner::Unowned => None,
        }
    }
}

/// What kind of space this is, with the fields only that kind carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Go,
    Property { group: GroupId, price: u32, houses: u8 },
    Railroad { price: u32 },
    Utility { price: u32 },
    Tax,
    Card,
    GoToJail,
    FreeParking,
    Jail,
}

/// Rent lookup key.
///
/// The `Owns*` tiers apply with no houses built and are picked by how many
/// spaces of the group the owner holds. The house tiers apply once houses are
/// built; `Hotel` is the fifth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentTier {
    OwnsOne,
    OwnsTwo,
    OwnsThree,
    OwnsFour,
    OneHouse,
    TwoHouses,
    ThreeHouses,
    FourHouses,
    Hotel,
}

impl RentTier {
    /// Every tier in table order.
    pub const ALL: [RentTier; 9] = [
        RentTier::OwnsOne,
        RentTier::OwnsTwo,
        RentTier::OwnsThree,
        RentTier::OwnsFour,
        RentTier::OneHouse,
        RentTier::TwoHouses,
        RentTier::ThreeHouses,
        RentTier::FourHouses,
        RentTier::Hotel,
    ];

    /// Tier for an owner holding `count` spaces of the group, 1..=4.
    #[must_use]
    pub fn for_owned_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(RentTier::OwnsOne),
            2 => Some(RentTier::OwnsTwo),
            3 => Some(RentTier::OwnsThree),
            4 => Some(RentTier::OwnsFour),
            _ => None,
        }
    }

    /// Tier for `houses` houses built, 1..=5.
    #[must_use]
    pub fn for_houses(houses: u8) -> Option<Self> {
        match houses {
            1 => Some(RentTier::OneHouse),
            2 => Some(RentTier::TwoHouses),
            3 => Some(RentTier::ThreeHouses),
            4 => Some(RentTier::FourHouses),
            5 => Some(RentTier::Hotel),
            _ => None,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Sparse rent table. A missing entry means the tier does not apply to the
/// space, which is different from a rent of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentTable([Option<u32>; 9]);

impl RentTable {
    /// Build from entries in `RentTier::ALL` order.
    #[must_use]
    pub const fn new(entries: [Option<u32>; 9]) -> Self {
        Self(entries)
    }

    /// Table with only the `OwnsOne` entry, used by fixed-amount spaces.
    #[must_use]
    pub const fn flat(amount: u32) -> Self {
        Self([Some(amount), None, None, None, None, None, None, None, None])
    }

    /// Look up the rent for a tier.
    #[must_use]
    pub fn get(&self, tier: RentTier) -> Option<u32> {
        self.0[tier.slot()]
    }
}

/// One board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    position: u8,
    name: String,
    kind: SpaceKind,
    owner: Owner,
    rent: RentTable,
}

impl Space {
    /// Create a space. Purchasable kinds start `Unowned`, everything else is
    /// held by the bank.
    pub fn new(position: u8, name: impl Into<String>, kind: SpaceKind, rent: RentTable) -> Self {
        let owner = match kind {
            SpaceKind::Property { .. } | SpaceKind::Railroad { .. } | SpaceKind::Utility { .. } => {
                Owner::Unowned
            }
            _ => Owner::Bank,
        };

        Self {
            position,
            name: name.into(),
            kind,
            owner,
            rent,
        }
    }

    /// Board position, 1..=40.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    #[must_use]
    pub fn rent_table(&self) -> &RentTable {
        &self.rent
    }

    /// Rent-escalation group. Railroads and utilities form their own groups.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        match self.kind {
            SpaceKind::Property { group, .. } => Some(group),
            SpaceKind::Railroad { .. } => Some(GroupId::RAILROADS),
            SpaceKind::Utility { .. } => Some(GroupId::UTILITIES),
            _ => None,
        }
    }

    /// Purchase price, if the space can ever be bought.
    #[must_use]
    pub fn price(&self) -> Option<u32> {
        match self.kind {
            SpaceKind::Property { price, .. }
            | SpaceKind::Railroad { price }
            | SpaceKind::Utility { price } => Some(price),
            _ => None,
        }
    }

    /// House count, or `None` if the space cannot hold houses.
    #[must_use]
    pub fn houses(&self) -> Option<u8> {
        match self.kind {
            SpaceKind::Property { houses, .. } => Some(houses),
            _ => None,
        }
    }

    pub(super) fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    pub(super) fn build_house(&mut self) {
        if let SpaceKind::Property { houses, .. } = &mut self.kind {
            *houses += 1;
        }
    }
}
