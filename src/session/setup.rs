//! Validation of the new-game player list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result, RulesConfig};

/// Number of token pieces to choose from.
pub const PIECE_COUNT: u8 = 6;

/// One row of the new-game form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    /// Token piece, 1..=`PIECE_COUNT`.
    pub piece: u8,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, piece: u8) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }
}

/// Filter and validate setup rows.
///
/// Rows with a blank name are left-out seats and are dropped. The remaining
/// rows must fit the rules' player count, use pieces 1..=`PIECE_COUNT`, and
/// not repeat a name (ignoring case) or a piece. Names come back trimmed.
pub fn validate_setups(
    setups: impl IntoIterator<Item = PlayerSetup>,
    rules: &RulesConfig,
) -> Result<Vec<PlayerSetup>> {
    let setups: Vec<PlayerSetup> = setups
        .into_iter()
        .filter_map(|s| {
            let name = s.name.trim();
            (!name.is_empty()).then(|| PlayerSetup::new(name, s.piece))
        })
        .collect();

    if !rules.allows_player_count(setups.len()) {
        return Err(GameError::InvalidPlayerCount(setups.len()));
    }

    let mut names = FxHashSet::default();
    let mut pieces = FxHashSet::default();

    for setup in &setups {
        if !(1..=PIECE_COUNT).contains(&setup.piece) {
            return Err(GameError::InvalidSetup(format!(
                "{} picked piece {}, expected 1..={}",
                setup.name, setup.piece, PIECE_COUNT
            )));
        }
        if !names.insert(setup.name.to_lowercase()) {
            return Err(GameError::InvalidSetup(format!(
                "name {:?} is used more than once",
                setup.name
            )));
        }
        if !pieces.insert(setup.piece) {
            return Err(GameError::InvalidSetup(format!(
                "piece {} is picked more than once",
                setup.piece
            )));
        }
    }

    Ok(setups)
}
