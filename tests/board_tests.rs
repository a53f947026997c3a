//! Board rule tests.
//!
//! These tests exercise the standard board through its public API:
//! - Space lookup and bounds
//! - Even house building across a group
//! - Rent tiers by ownership count and house count
//! - Landing classification for every kind of space

use monopoly_core::board::{Board, GroupId, LandingAction, Owner, RentTier, SpaceKind};
use monopoly_core::core::{GameError, PlayerId};

const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

const BROWN: GroupId = GroupId(1);
const LIGHT_BLUE: GroupId = GroupId(2);

/// Give every space of `group` to `player`.
fn own_group(board: &mut Board, group: GroupId, player: PlayerId) {
    let positions: Vec<u8> = board.spaces_in_group(group).iter().map(|s| s.position()).collect();
    for position in positions {
        board.set_owner(position, player).unwrap();
    }
}

/// Test every position resolves to the space at that position.
#[test]
fn test_space_at_all_positions() {
    let board = Board::standard();

    for position in 1..=40u8 {
        assert_eq!(board.space_at(position).unwrap().position(), position);
    }
}

/// Test out-of-range positions are rejected everywhere.
#[test]
fn test_invalid_positions() {
    let mut board = Board::standard();

    for position in [0u8, 41, 255] {
        let err = Err(GameError::InvalidSpace(position));
        assert_eq!(board.space_at(position).map(|_| ()), err);
        assert_eq!(board.set_owner(position, P1), err);
        assert_eq!(board.house_count(position).map(|_| ()), err);
        assert_eq!(board.add_house(position).map(|_| ()), err);
        assert_eq!(board.rent_due(position, P1).map(|_| ()), err);
        assert_eq!(board.classify_landing(P1, position).map(|_| ()), err);
        assert_eq!(board.can_purchase(position, 1000).map(|_| ()), err);
    }
}

/// Test well-known spaces sit where they should.
#[test]
fn test_landmark_spaces() {
    let board = Board::standard();

    assert_eq!(board.space_at(1).unwrap().kind(), SpaceKind::Go);
    assert_eq!(board.space_at(11).unwrap().kind(), SpaceKind::Jail);
    assert_eq!(board.space_at(21).unwrap().kind(), SpaceKind::FreeParking);
    assert_eq!(board.space_at(31).unwrap().kind(), SpaceKind::GoToJail);
    assert_eq!(board.space_at(40).unwrap().name(), "Boardwalk");
    assert_eq!(board.space_at(40).unwrap().price(), Some(400));
}

/// Test group membership is returned in board order.
#[test]
fn test_spaces_in_group() {
    let board = Board::standard();

    let brown: Vec<u8> = board.spaces_in_group(BROWN).iter().map(|s| s.position()).collect();
    assert_eq!(brown, vec![2, 4]);

    let railroads: Vec<u8> = board
        .spaces_in_group(GroupId::RAILROADS)
        .iter()
        .map(|s| s.position())
        .collect();
    assert_eq!(railroads, vec![6, 16, 26, 36]);

    assert_eq!(board.group_size(GroupId::UTILITIES), 2);
    assert_eq!(board.group_size(LIGHT_BLUE), 3);
    assert!(board.spaces_in_group(GroupId(42)).is_empty());
    assert_eq!(board.group_size(GroupId(42)), 0);
}

/// Test houses go up on every space of a three-space group at once.
#[test]
fn test_add_house_is_even() {
    let mut board = Board::standard();

    for round in 1..=5u8 {
        assert!(board.add_house(9).unwrap());
        for position in [7, 9, 10] {
            assert_eq!(board.house_count(position).unwrap(), round);
        }
    }

    // Saturated: the sixth call changes nothing.
    assert!(!board.add_house(7).unwrap());
    for position in [7, 9, 10] {
        assert_eq!(board.house_count(position).unwrap(), 5);
    }
}

/// Test house building is a silent no-op where houses don't apply.
#[test]
fn test_add_house_no_op_spaces() {
    let mut board = Board::standard();

    for position in [1, 3, 5, 6, 11, 13, 29, 31] {
        assert!(!board.add_house(position).unwrap());
        assert_eq!(board.house_count(position).unwrap(), 0);
    }
}

/// Test a full group requires one real player owning every space.
#[test]
fn test_full_group_ownership() {
    let mut board = Board::standard();

    assert!(!board.full_group_owned_by_same_player(2).unwrap());
    assert!(!board.full_group_owned_by_same_player(1).unwrap());

    board.set_owner(2, P1).unwrap();
    assert!(!board.full_group_owned_by_same_player(2).unwrap());

    board.set_owner(4, P2).unwrap();
    assert!(!board.full_group_owned_by_same_player(2).unwrap());

    let mut board = Board::standard();
    own_group(&mut board, BROWN, P1);
    assert!(board.full_group_owned_by_same_player(2).unwrap());
    assert!(board.full_group_owned_by_same_player(4).unwrap());
}

/// Test purchase eligibility depends on ownership and cash.
#[test]
fn test_can_purchase() {
    let mut board = Board::standard();

    assert!(board.can_purchase(4, 60).unwrap());
    assert!(!board.can_purchase(4, 59).unwrap());
    assert!(!board.can_purchase(1, 10_000).unwrap());
    assert!(!board.can_purchase(5, 10_000).unwrap());

    board.set_owner(4, P1).unwrap();
    assert!(!board.can_purchase(4, 10_000).unwrap());
}

/// Test house building requires a full group and group-scaled cash.
#[test]
fn test_can_build_houses() {
    let mut board = Board::standard();

    // Not a full group yet.
    board.set_owner(7, P1).unwrap();
    assert!(!board.can_build_houses(7, 10_000).unwrap());

    own_group(&mut board, LIGHT_BLUE, P1);
    assert!(board.can_build_houses(7, 150).unwrap());
    assert!(!board.can_build_houses(7, 149).unwrap());

    // Railroads and utilities never take houses.
    own_group(&mut board, GroupId::RAILROADS, P1);
    assert!(!board.can_build_houses(6, 10_000).unwrap());

    // Fully built.
    for _ in 0..5 {
        board.add_house(7).unwrap();
    }
    assert!(!board.can_build_houses(7, 10_000).unwrap());
}

/// Test no rent is owed on bank, unowned, or own spaces.
#[test]
fn test_rent_zero_cases() {
    let mut board = Board::standard();

    for position in 1..=40u8 {
        assert_eq!(board.rent_due(position, P1).unwrap(), 0);
    }

    board.set_owner(4, P1).unwrap();
    assert_eq!(board.rent_due(4, P1).unwrap(), 0);
}

/// Test bare-ownership rent climbs with the number of group spaces owned.
#[test]
fn test_rent_by_ownership_count() {
    let mut board = Board::standard();

    board.set_owner(4, P1).unwrap();
    assert_eq!(board.rent_due(4, P2).unwrap(), 4);

    board.set_owner(2, P1).unwrap();
    assert_eq!(board.rent_due(4, P2).unwrap(), 8);
    assert_eq!(board.rent_due(2, P2).unwrap(), 4);

    board.set_owner(6, P1).unwrap();
    assert_eq!(board.rent_due(6, P2).unwrap(), 25);
    board.set_owner(16, P1).unwrap();
    board.set_owner(26, P1).unwrap();
    assert_eq!(board.rent_due(6, P2).unwrap(), 100);
    board.set_owner(36, P1).unwrap();
    assert_eq!(board.rent_due(36, P2).unwrap(), 200);

    board.set_owner(29, P1).unwrap();
    assert_eq!(board.rent_due(29, P2).unwrap(), 40);
    board.set_owner(13, P1).unwrap();
    assert_eq!(board.rent_due(29, P2).unwrap(), 100);
}

/// Test rent counts only spaces the owner holds, not the whole group.
#[test]
fn test_rent_ignores_other_owners_in_group() {
    let mut board = Board::standard();

    board.set_owner(7, P1).unwrap();
    board.set_owner(9, P2).unwrap();

    assert_eq!(board.rent_due(7, P2).unwrap(), 6);
    assert_eq!(board.rent_due(9, P1).unwrap(), 6);
}

/// Test rent with houses uses the house tiers.
#[test]
fn test_rent_by_houses() {
    let mut board = Board::standard();
    own_group(&mut board, BROWN, P1);

    let expected = [10, 30, 90, 160, 250];
    for amount in expected {
        board.add_house(2).unwrap();
        assert_eq!(board.rent_due(2, P2).unwrap(), amount);
    }

    let table = board.space_at(40).unwrap().rent_table();
    assert_eq!(table.get(RentTier::Hotel), Some(2000));
}

/// Test landing classification across every kind of space.
#[test]
fn test_classify_landing() {
    let mut board = Board::standard();

    for position in [1, 11, 21] {
        assert_eq!(board.classify_landing(P1, position).unwrap(), LandingAction::DoNothing);
    }
    assert_eq!(board.classify_landing(P1, 31).unwrap(), LandingAction::MoveToJail);
    for position in [5, 39] {
        assert_eq!(board.classify_landing(P1, position).unwrap(), LandingAction::PayTax);
    }
    for position in [8, 23, 37] {
        assert_eq!(board.classify_landing(P1, position).unwrap(), LandingAction::DrawChance);
    }
    for position in [3, 18, 34] {
        assert_eq!(
            board.classify_landing(P1, position).unwrap(),
            LandingAction::DrawCommunityChest
        );
    }

    for position in [4, 6, 13] {
        assert_eq!(board.classify_landing(P1, position).unwrap(), LandingAction::OfferPurchase);
    }

    board.set_owner(4, P1).unwrap();
    assert_eq!(board.classify_landing(P1, 4).unwrap(), LandingAction::NoAction);
    assert_eq!(board.classify_landing(P2, 4).unwrap(), LandingAction::RentDue);
}

/// Test ownership never reverts to unowned through the board API.
#[test]
fn test_owner_transitions() {
    let mut board = Board::standard();
    assert_eq!(board.space_at(12).unwrap().owner(), Owner::Unowned);
    assert_eq!(board.space_at(11).unwrap().owner(), Owner::Bank);

    board.set_owner(12, P2).unwrap();
    assert_eq!(board.space_at(12).unwrap().owner(), Owner::Player(P2));
}
