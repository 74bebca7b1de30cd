// Player domain module
// Contains the player aggregate root and its read projections

#![allow(clippy::module_inception)]

pub mod details;
pub mod player;

pub use details::{PlayerDetails, PlayerTeamRow, PlayerWithTeam};
pub use player::Player;
