mod bounded_grid;
mod bounds;
pub mod codec;
mod consts;
mod model_helpers;
mod models;
mod update;

pub use bounds::BoundsOriginRoot;
pub use consts::*;
#[cfg(test)]
pub use model_helpers::{is_won, locate_player};
#[cfg(test)]
pub use models::Vec2;
pub use models::{Board, Cell, Direction, GameChangeType, GameState, GameUpdate, UserAction};
pub use update::step;
