//! Player state and turn tracking tests.
//!
//! Includes property tests for the wrap-around movement rules.

use monopoly_core::core::{GameError, PlayerId, RulesConfig};
use monopoly_core::players::Players;
use proptest::prelude::*;

fn players(count: usize) -> Players {
    Players::new(count, &RulesConfig::default()).unwrap()
}

/// Test player counts outside 2..=4 are rejected.
#[test]
fn test_invalid_player_counts() {
    let rules = RulesConfig::default();

    assert_eq!(Players::new(1, &rules), Err(GameError::InvalidPlayerCount(1)));
    assert_eq!(Players::new(5, &rules), Err(GameError::InvalidPlayerCount(5)));
}

/// Test turn order cycles through every player for each legal count.
#[test]
fn test_turn_order_all_counts() {
    for count in 2..=4usize {
        let mut players = players(count);
        let mut order = vec![players.current_player()];

        for _ in 0..count {
            order.push(players.advance_turn());
        }

        let expected: Vec<PlayerId> = PlayerId::all(count).chain([PlayerId::new(1)]).collect();
        assert_eq!(order, expected);
    }
}

/// Test the example wrap from 38 by 5 lands on 3 with one bonus.
#[test]
fn test_wrap_past_go() {
    let mut players = players(2);
    let p1 = PlayerId::new(1);
    players.move_to(p1, 38).unwrap();

    let mv = players.move_by(p1, 5).unwrap();

    assert_eq!(mv.to, 3);
    assert_eq!(mv.laps, 1);
    assert_eq!(players.cash(p1), Ok(1700));
}

/// Test the largest possible move from the last space wraps correctly.
#[test]
fn test_move_by_max_distance() {
    let mut players = players(2);
    let p1 = PlayerId::new(1);
    players.move_to(p1, 40).unwrap();

    // 39 + u32::MAX = 4_294_967_334 = 107_374_183 * 40 + 14
    let mv = players.move_by(p1, u32::MAX).unwrap();

    assert_eq!(mv.to, 15);
    assert_eq!(mv.laps, 107_374_183);
    assert_eq!(players.cash(p1), Ok(1500 + 200 * 107_374_183));
}

/// Test a configured range outside 1..=255 seats never panics.
#[test]
fn test_out_of_range_player_rules() {
    let rules = RulesConfig::new().with_player_range(0, 1000);

    assert_eq!(Players::new(0, &rules), Err(GameError::InvalidPlayerCount(0)));
    assert_eq!(
        Players::with_entries(Vec::new(), &rules),
        Err(GameError::InvalidPlayerCount(0))
    );

    let crowd = |n: usize| (0..n).map(|i| (format!("Seat {i}"), 1u8));
    assert_eq!(
        Players::with_entries(crowd(300), &rules),
        Err(GameError::InvalidPlayerCount(300))
    );

    let full = Players::with_entries(crowd(255), &rules).unwrap();
    assert_eq!(full.player_count(), 255);
    assert_eq!(full.iter().last().unwrap().id(), PlayerId::new(255));
}

/// Test custom rules change the starting cash and the lap bonus.
#[test]
fn test_custom_economy() {
    let rules = RulesConfig::new().with_starting_cash(300).with_pass_go_bonus(50);
    let mut players = Players::new(2, &rules).unwrap();
    let p2 = PlayerId::new(2);

    assert_eq!(players.cash(p2), Ok(300));
    players.move_by(p2, 40).unwrap();
    assert_eq!(players.cash(p2), Ok(350));
}

proptest! {
    /// A full lap returns to the same space and pays exactly one bonus.
    #[test]
    fn prop_full_lap(start in 1u8..=40) {
        let mut players = players(2);
        let p1 = PlayerId::new(1);
        players.move_to(p1, start).unwrap();

        let mv = players.move_by(p1, 40).unwrap();

        prop_assert_eq!(mv.to, start);
        prop_assert_eq!(mv.laps, 1);
        prop_assert_eq!(players.cash(p1).unwrap(), 1700);
    }

    /// Any move lands on the 1-indexed wrap of the distance and pays one
    /// bonus per boundary crossed.
    #[test]
    fn prop_move_wraps(start in 1u8..=40, spaces in any::<u32>()) {
        let mut players = players(3);
        let p3 = PlayerId::new(3);
        players.move_to(p3, start).unwrap();

        let mv = players.move_by(p3, spaces).unwrap();
        let travelled = u64::from(start - 1) + u64::from(spaces);

        prop_assert!((1..=40).contains(&mv.to));
        prop_assert_eq!(u64::from(mv.to), travelled % 40 + 1);
        prop_assert_eq!(u64::from(mv.laps), travelled / 40);
        prop_assert_eq!(players.cash(p3).unwrap(), 1500 + 200 * i64::from(mv.laps));
    }

    /// Credits and debits are plain arithmetic with no floor.
    #[test]
    fn prop_cash_arithmetic(credit in 0i64..5000, debit in 0i64..5000) {
        let mut players = players(2);
        let p2 = PlayerId::new(2);

        players.credit(p2, credit).unwrap();
        players.debit(p2, debit).unwrap();

        prop_assert_eq!(players.cash(p2).unwrap(), 1500 + credit - debit);
    }
}
