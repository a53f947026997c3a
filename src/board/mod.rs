//! The board: 40 fixed spaces and the rules that depend only on them.

pub mod space;
pub mod data;
pub mod landing;
pub mod model;

pub use space::{GroupId, Owner, RentTable, RentTier, Space, SpaceKind, MAX_HOUSES};
pub use data::{standard_spaces, BOARD_SIZE};
pub use landing::LandingAction;
pub use model::Board;
