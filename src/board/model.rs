//! Board state and space-level rules.
//!
//! `Board` owns the 40 spaces and answers every question that depends only on
//! the board: who owns what, how many houses stand where, what rent is due
//! and what landing on a space requires. Player cash is never touched here;
//! callers pass it in where a rule depends on it.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::data::{standard_spaces, BOARD_SIZE};
use super::landing::LandingAction;
use super::space::{GroupId, Owner, RentTier, Space, SpaceKind, MAX_HOUSES};
use crate::cards::CardDeck;
use crate::core::{GameError, PlayerId, Result, RulesConfig};

/// The game board.
///
/// Spaces live in an `im::Vector`, so cloning a board for a render snapshot
/// is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vector<Space>,
    jail: u8,
    house_cost_per_space: i64,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// The standard board with default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&RulesConfig::default())
    }

    /// The standard board with the given rules.
    #[must_use]
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            spaces: Vector::from(standard_spaces()),
            jail: 11,
            house_cost_per_space: rules.house_cost_per_space,
        }
    }

    /// Build a board from a custom table.
    ///
    /// The table must hold exactly one space per position 1..=40 in order,
    /// exactly one Jail, at most four spaces per group and no more than
    /// `MAX_HOUSES` houses on any property.
    pub fn from_spaces(spaces: Vec<Space>, rules: &RulesConfig) -> Result<Self> {
        if spaces.len() != BOARD_SIZE as usize {
            return Err(GameError::InvalidBoard(format!(
                "expected {} spaces, got {}",
                BOARD_SIZE,
                spaces.len()
            )));
        }

        for (i, space) in spaces.iter().enumerate() {
            if space.position() as usize != i + 1 {
                return Err(GameError::InvalidBoard(format!(
                    "space {:?} is at index {} but claims position {}",
                    space.name(),
                    i,
                    space.position()
                )));
            }
            if space.houses().is_some_and(|h| h > MAX_HOUSES) {
                return Err(GameError::InvalidBoard(format!(
                    "{:?} has more than {} houses",
                    space.name(),
                    MAX_HOUSES
                )));
            }
        }

        let groups: FxHashSet<GroupId> = spaces.iter().filter_map(Space::group).collect();
        for group in groups {
            let members = spaces.iter().filter(|s| s.group() == Some(group)).count();
            if RentTier::for_owned_count(members).is_none() {
                return Err(GameError::InvalidBoard(format!(
                    "group {} has {} spaces",
                    group.0, members
                )));
            }
        }

        let mut jails = spaces.iter().filter(|s| s.kind() == SpaceKind::Jail);
        let jail = match (jails.next(), jails.next()) {
            (Some(space), None) => space.position(),
            _ => return Err(GameError::InvalidBoard("expected exactly one Jail".into())),
        };

        Ok(Self {
            spaces: Vector::from(spaces),
            jail,
            house_cost_per_space: rules.house_cost_per_space,
        })
    }

    fn slot(position: u8) -> Result<usize> {
        if (1..=BOARD_SIZE).contains(&position) {
            Ok(position as usize - 1)
        } else {
            Err(GameError::InvalidSpace(position))
        }
    }

    /// Get the space at `position` (1..=40).
    pub fn space_at(&self, position: u8) -> Result<&Space> {
        let slot = Self::slot(position)?;
        self.spaces.get(slot).ok_or(GameError::InvalidSpace(position))
    }

    fn space_at_mut(&mut self, position: u8) -> Result<&mut Space> {
        let slot = Self::slot(position)?;
        self.spaces.get_mut(slot).ok_or(GameError::InvalidSpace(position))
    }

    /// Iterate over all spaces in board order.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Position of the Jail space.
    #[must_use]
    pub fn jail_position(&self) -> u8 {
        self.jail
    }

    // === Groups ===

    /// Spaces in `group`, in board order.
    #[must_use]
    pub fn spaces_in_group(&self, group: GroupId) -> SmallVec<[&Space; 4]> {
        self.spaces
            .iter()
            .filter(|s| s.group() == Some(group))
            .collect()
    }

    /// Number of spaces in `group`.
    #[must_use]
    pub fn group_size(&self, group: GroupId) -> usize {
        self.spaces.iter().filter(|s| s.group() == Some(group)).count()
    }

    /// True if a player owns the space and every other space of its group.
    ///
    /// Spaces without a group and spaces held by the bank or for sale are
    /// never a full group.
    pub fn full_group_owned_by_same_player(&self, position: u8) -> Result<bool> {
        let space = self.space_at(position)?;

        let (Some(owner), Some(group)) = (space.owner().player(), space.group()) else {
            return Ok(false);
        };

        Ok(self
            .spaces_in_group(group)
            .iter()
            .all(|s| s.owner() == Owner::Player(owner)))
    }

    // === Ownership ===

    /// Give the space at `position` to `player`.
    ///
    /// No check is made that the space is for sale; callers do that with
    /// `can_purchase` first.
    pub fn set_owner(&mut self, position: u8, player: PlayerId) -> Result<()> {
        let space = self.space_at_mut(position)?;
        space.set_owner(Owner::Player(player));
        trace!(position, %player, name = space.name(), "space owner set");
        Ok(())
    }

    /// True if the space is for sale and `cash` covers its price.
    pub fn can_purchase(&self, position: u8, cash: i64) -> Result<bool> {
        let space = self.space_at(position)?;

        if space.owner() != Owner::Unowned {
            return Ok(false);
        }

        Ok(space.price().is_some_and(|price| cash >= i64::from(price)))
    }

    // === Houses ===

    /// Houses on the space. Spaces that cannot hold houses report 0.
    pub fn house_count(&self, position: u8) -> Result<u8> {
        Ok(self.space_at(position)?.houses().unwrap_or(0))
    }

    /// Cost of building one round of houses across `group`.
    #[must_use]
    pub fn house_cost(&self, group: GroupId) -> i64 {
        self.house_cost_per_space * self.group_size(group) as i64
    }

    /// Add one house to every space of the position's group.
    ///
    /// Houses go up evenly, so nothing is built if the space has no group,
    /// cannot hold houses, or any space of the group already has
    /// `MAX_HOUSES`. Returns whether houses were built.
    pub fn add_house(&mut self, position: u8) -> Result<bool> {
        let space = self.space_at(position)?;

        let (Some(group), Some(_)) = (space.group(), space.houses()) else {
            return Ok(false);
        };

        let members: SmallVec<[usize; 4]> = self
            .spaces
            .iter()
            .enumerate()
            .filter(|(_, s)| s.group() == Some(group))
            .map(|(i, _)| i)
            .collect();

        let saturated = members
            .iter()
            .any(|&i| self.spaces[i].houses().map_or(true, |h| h >= MAX_HOUSES));
        if saturated {
            return Ok(false);
        }

        for &i in &members {
            if let Some(space) = self.spaces.get_mut(i) {
                space.build_house();
            }
        }

        trace!(position, group = group.0, "house added across group");
        Ok(true)
    }

    /// True if houses may be built on the space with `cash` in hand.
    ///
    /// Requires a property below `MAX_HOUSES` whose whole group belongs to
    /// one player, and cash for a house on every space of the group.
    pub fn can_build_houses(&self, position: u8, cash: i64) -> Result<bool> {
        let space = self.space_at(position)?;

        let SpaceKind::Property { group, houses, .. } = space.kind() else {
            return Ok(false);
        };
        if houses >= MAX_HOUSES {
            return Ok(false);
        }
        if !self.full_group_owned_by_same_player(position)? {
            return Ok(false);
        }

        Ok(cash >= self.house_cost(group))
    }

    // === Rent ===

    /// Rent `payer` owes for landing on the space.
    ///
    /// Nothing is owed on the payer's own spaces or on spaces nobody owns.
    /// With no houses the tier is the number of group spaces the owner holds;
    /// with houses it is the house count.
    pub fn rent_due(&self, position: u8, payer: PlayerId) -> Result<u32> {
        let space = self.space_at(position)?;

        let owner = match space.owner() {
            Owner::Player(owner) if owner != payer => owner,
            _ => return Ok(0),
        };

        let tier = match space.houses().unwrap_or(0) {
            0 => {
                let owned = match space.group() {
                    Some(group) => self
                        .spaces_in_group(group)
                        .iter()
                        .filter(|s| s.owner() == Owner::Player(owner))
                        .count(),
                    None => 1,
                };
                RentTier::for_owned_count(owned).ok_or_else(|| {
                    GameError::InvalidBoard(format!("group of space {position} has {owned} owned spaces"))
                })?
            }
            houses => RentTier::for_houses(houses).ok_or_else(|| {
                GameError::InvalidBoard(format!("space {position} has {houses} houses"))
            })?,
        };

        space
            .rent_table()
            .get(tier)
            .ok_or(GameError::MissingRentTier { position, tier })
    }

    /// Fixed amount charged by a tax space.
    pub fn tax_due(&self, position: u8) -> Result<u32> {
        let space = self.space_at(position)?;
        let tier = RentTier::OwnsOne;

        space
            .rent_table()
            .get(tier)
            .ok_or(GameError::MissingRentTier { position, tier })
    }

    // === Landing ===

    /// Classify what `player` landing on `position` requires.
    pub fn classify_landing(&self, player: PlayerId, position: u8) -> Result<LandingAction> {
        let space = self.space_at(position)?;

        if space.owner() == Owner::Player(player) {
            return Ok(LandingAction::NoAction);
        }

        let action = match space.kind() {
            SpaceKind::Property { .. } | SpaceKind::Railroad { .. } | SpaceKind::Utility { .. } => {
                match space.owner() {
                    Owner::Unowned => LandingAction::OfferPurchase,
                    Owner::Player(_) => LandingAction::RentDue,
                    Owner::Bank => LandingAction::Unrecognized,
                }
            }
            SpaceKind::Card => match space.name().parse::<CardDeck>() {
                Ok(CardDeck::Chance) => LandingAction::DrawChance,
                Ok(CardDeck::CommunityChest) => LandingAction::DrawCommunityChest,
                Err(_) => LandingAction::Unrecognized,
            },
            SpaceKind::Tax => LandingAction::PayTax,
            SpaceKind::GoToJail => LandingAction::MoveToJail,
            SpaceKind::Go | SpaceKind::Jail | SpaceKind::FreeParking => LandingAction::DoNothing,
        };

        Ok(action)
    }
}
