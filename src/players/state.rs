//! Per-player cash and position, and whose turn it is.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::BOARD_SIZE;
use crate::core::{GameError, PlayerId, PlayerMap, Result, RulesConfig};

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    id: PlayerId,
    name: String,
    piece: u8,
    cash: i64,
    position: u8,
}

impl PlayerState {
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the token artwork this player picked.
    #[must_use]
    pub fn piece(&self) -> u8 {
        self.piece
    }

    /// Cash on hand. May be negative; bankruptcy is the caller's call.
    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Board position, 1..=40.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }
}

/// Result of moving a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub from: u8,
    pub to: u8,
    /// Times the token crossed or landed on Go.
    pub laps: u32,
    /// Cash credited for those laps.
    pub go_bonus: i64,
}

/// All players at the table plus turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    players: PlayerMap<PlayerState>,
    current: PlayerId,
    pass_go_bonus: i64,
}

impl Players {
    /// Create `count` players named "Player 1".."Player N", each using the
    /// piece matching their id.
    pub fn new(count: usize, rules: &RulesConfig) -> Result<Self> {
        if !rules.allows_player_count(count) {
            return Err(GameError::InvalidPlayerCount(count));
        }

        Self::with_entries(
            PlayerId::all(count).map(|id| (id.to_string(), id.0)),
            rules,
        )
    }

    /// Create players from `(name, piece)` pairs in seating order.
    ///
    /// Only the count is validated here; name and piece rules belong to
    /// session setup.
    pub fn with_entries(
        entries: impl IntoIterator<Item = (String, u8)>,
        rules: &RulesConfig,
    ) -> Result<Self> {
        let entries: Vec<(String, u8)> = entries.into_iter().collect();
        if !rules.allows_player_count(entries.len()) {
            return Err(GameError::InvalidPlayerCount(entries.len()));
        }

        let ids = PlayerId::all(entries.len());
        let states: Vec<PlayerState> = entries
            .into_iter()
            .zip(ids)
            .map(|((name, piece), id)| PlayerState {
                id,
                name,
                piece,
                cash: rules.starting_cash,
                position: 1,
            })
            .collect();

        Ok(Self {
            players: PlayerMap::from_vec(states),
            current: PlayerId::new(1),
            pass_go_bonus: rules.pass_go_bonus,
        })
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Pass the turn to the next player, wrapping from the last to the first.
    pub fn advance_turn(&mut self) -> PlayerId {
        let count = self.player_count() as u8;
        self.current = PlayerId::new(self.current.0 % count + 1);
        debug!(player = %self.current, "turn advanced");
        self.current
    }

    /// Look up a player.
    pub fn get(&self, player: PlayerId) -> Result<&PlayerState> {
        self.players.get(player).ok_or(GameError::InvalidPlayer(player))
    }

    fn get_mut(&mut self, player: PlayerId) -> Result<&mut PlayerState> {
        self.players
            .get_mut(player)
            .ok_or(GameError::InvalidPlayer(player))
    }

    /// Iterate over players in seating order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().map(|(_, state)| state)
    }

    pub fn name(&self, player: PlayerId) -> Result<&str> {
        Ok(self.get(player)?.name())
    }

    pub fn piece(&self, player: PlayerId) -> Result<u8> {
        Ok(self.get(player)?.piece)
    }

    pub fn cash(&self, player: PlayerId) -> Result<i64> {
        Ok(self.get(player)?.cash)
    }

    pub fn position(&self, player: PlayerId) -> Result<u8> {
        Ok(self.get(player)?.position)
    }

    /// Add cash.
    pub fn credit(&mut self, player: PlayerId, amount: i64) -> Result<i64> {
        let state = self.get_mut(player)?;
        state.cash += amount;
        debug!(%player, amount, cash = state.cash, "credit");
        Ok(state.cash)
    }

    /// Remove cash. The balance may go negative.
    pub fn debit(&mut self, player: PlayerId, amount: i64) -> Result<i64> {
        let state = self.get_mut(player)?;
        state.cash -= amount;
        debug!(%player, amount, cash = state.cash, "debit");
        Ok(state.cash)
    }

    /// Advance a token `spaces` forward, wrapping past 40 back to 1.
    ///
    /// Every crossing of the 40 → 1 boundary, including stopping on Go,
    /// credits the passing-Go bonus.
    pub fn move_by(&mut self, player: PlayerId, spaces: u32) -> Result<Move> {
        let bonus_per_lap = self.pass_go_bonus;
        let state = self.get_mut(player)?;

        let from = state.position;
        let travelled = u64::from(from - 1) + u64::from(spaces);
        let to = (travelled % u64::from(BOARD_SIZE)) as u8 + 1;
        // At most (39 + u32::MAX) / 40, so always fits.
        let laps = (travelled / u64::from(BOARD_SIZE)) as u32;
        let go_bonus = bonus_per_lap.saturating_mul(i64::from(laps));

        state.position = to;
        state.cash = state.cash.saturating_add(go_bonus);

        debug!(%player, from, to, laps, "moved");
        Ok(Move {
            player,
            from,
            to,
            laps,
            go_bonus,
        })
    }

    /// Put a token directly on `position` without passing Go.
    pub fn move_to(&mut self, player: PlayerId, position: u8) -> Result<()> {
        if !(1..=BOARD_SIZE).contains(&position) {
            return Err(GameError::InvalidSpace(position));
        }

        let state = self.get_mut(player)?;
        state.position = position;
        debug!(%player, position, "placed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(count: usize) -> Players {
        Players::new(count, &RulesConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let players = players(3);

        assert_eq!(players.player_count(), 3);
        assert_eq!(players.current_player(), PlayerId::new(1));
        for state in players.iter() {
            assert_eq!(state.cash(), 1500);
            assert_eq!(state.position(), 1);
        }
        assert_eq!(players.name(PlayerId::new(2)).unwrap(), "Player 2");
        assert_eq!(players.piece(PlayerId::new(3)).unwrap(), 3);
    }

    #[test]
    fn test_player_count_bounds() {
        let rules = RulesConfig::default();

        for count in [0, 1, 5] {
            assert_eq!(
                Players::new(count, &rules),
                Err(GameError::InvalidPlayerCount(count))
            );
        }
        for count in 2..=4 {
            assert!(Players::new(count, &rules).is_ok());
        }
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut players = players(3);

        assert_eq!(players.advance_turn(), PlayerId::new(2));
        assert_eq!(players.advance_turn(), PlayerId::new(3));
        assert_eq!(players.advance_turn(), PlayerId::new(1));
    }

    #[test]
    fn test_invalid_player() {
        let mut players = players(2);

        assert_eq!(players.cash(PlayerId::new(3)), Err(GameError::InvalidPlayer(PlayerId::new(3))));
        assert_eq!(players.position(PlayerId::new(0)), Err(GameError::InvalidPlayer(PlayerId::new(0))));
        assert!(players.credit(PlayerId::new(3), 10).is_err());
        assert!(players.move_by(PlayerId::new(3), 4).is_err());
    }

    #[test]
    fn test_debit_can_go_negative() {
        let mut players = players(2);
        let p1 = PlayerId::new(1);

        assert_eq!(players.debit(p1, 2000), Ok(-500));
        assert_eq!(players.credit(p1, 600), Ok(100));
    }

    #[test]
    fn test_move_without_wrap() {
        let mut players = players(2);
        let p1 = PlayerId::new(1);

        let mv = players.move_by(p1, 7).unwrap();
        assert_eq!((mv.from, mv.to, mv.laps, mv.go_bonus), (1, 8, 0, 0));
        assert_eq!(players.cash(p1), Ok(1500));
    }

    #[test]
    fn test_landing_on_go_pays_bonus() {
        let mut players = players(2);
        let p1 = PlayerId::new(1);
        players.move_to(p1, 35).unwrap();

        let mv = players.move_by(p1, 6).unwrap();
        assert_eq!(mv.to, 1);
        assert_eq!(mv.go_bonus, 200);
        assert_eq!(players.cash(p1), Ok(1700));
    }

    #[test]
    fn test_move_to_skips_bonus() {
        let mut players = players(2);
        let p1 = PlayerId::new(1);
        players.move_to(p1, 31).unwrap();
        players.move_to(p1, 11).unwrap();

        assert_eq!(players.position(p1), Ok(11));
        assert_eq!(players.cash(p1), Ok(1500));
        assert_eq!(players.move_to(p1, 41), Err(GameError::InvalidSpace(41)));
    }
}
