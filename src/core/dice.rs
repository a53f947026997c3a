//! Dice throws.
//!
//! A single turn uses one throw of two six-sided dice. Several throws in a row
//! make the face sequence the presentation layer flips through while the dice
//! are "rolling".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Faces of one throw, one entry per die.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    faces: SmallVec<[u8; 2]>,
}

impl DiceRoll {
    /// Build a roll from known faces.
    pub fn from_faces(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Individual die faces.
    #[must_use]
    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// Total of all faces.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.faces.iter().map(|&f| u32::from(f)).sum()
    }

    /// True when there are at least two dice and all show the same face.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.faces.len() > 1 && self.faces.windows(2).all(|w| w[0] == w[1])
    }
}

/// Throw `count` dice with faces `1..=sides`, `rolls` times.
///
/// ```
/// use monopoly_core::core::{roll_dice, GameRng};
///
/// let mut rng = GameRng::new(7);
/// let rolls = roll_dice(&mut rng, 2, 3, 6);
///
/// assert_eq!(rolls.len(), 3);
/// assert!(rolls.iter().all(|r| (2..=12).contains(&r.sum())));
/// ```
pub fn roll_dice(rng: &mut GameRng, count: usize, rolls: usize, sides: u8) -> Vec<DiceRoll> {
    (0..rolls).map(|_| roll(rng, count, sides)).collect()
}

/// Throw `count` dice with faces `1..=sides` once.
pub fn roll(rng: &mut GameRng, count: usize, sides: u8) -> DiceRoll {
    assert!(sides > 0, "Dice need at least one side");

    DiceRoll {
        faces: (0..count)
            .map(|_| rng.gen_range(1..u32::from(sides) + 1) as u8)
            .collect(),
    }
}
