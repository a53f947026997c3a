//! Player state and turn tracking.

pub mod state;

pub use state::{Move, PlayerState, Players};
