//! Rules configuration.
//!
//! `RulesConfig` carries the economy and table-size constants of a game.
//! `Default` gives the standard values; builders override them for variants
//! and tests.

use serde::{Deserialize, Serialize};

/// Cash each player starts with.
pub const STARTING_CASH: i64 = 1500;

/// Bonus credited for each lap that passes or lands on Go.
pub const PASS_GO_BONUS: i64 = 200;

/// Price of one house, multiplied by the size of the group being built on.
pub const HOUSE_COST_PER_SPACE: i64 = 50;

/// Hard cap on players, set by the width of `PlayerId`.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Economy and player-count rules for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Credited once per lap that crosses or lands on Go.
    pub pass_go_bonus: i64,

    /// Building a round of houses costs this times the group size.
    pub house_cost_per_space: i64,

    /// Fewest players allowed at the table.
    pub min_players: usize,

    /// Most players allowed at the table.
    pub max_players: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_cash: STARTING_CASH,
            pass_go_bonus: PASS_GO_BONUS,
            house_cost_per_space: HOUSE_COST_PER_SPACE,
            min_players: 2,
            max_players: 4,
        }
    }
}

impl RulesConfig {
    /// Create a configuration with the standard values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the passing-Go bonus.
    #[must_use]
    pub fn with_pass_go_bonus(mut self, bonus: i64) -> Self {
        self.pass_go_bonus = bonus;
        self
    }

    /// Set the per-space house cost.
    #[must_use]
    pub fn with_house_cost_per_space(mut self, cost: i64) -> Self {
        self.house_cost_per_space = cost;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Check whether `count` players may play under these rules.
    ///
    /// Whatever the configured range, a table seats 1..=`MAX_SEATS` players.
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        let min = self.min_players.max(1);
        let max = self.max_players.min(MAX_SEATS);
        (min..=max).contains(&count)
    }
}
