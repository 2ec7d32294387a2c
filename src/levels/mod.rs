//! Level data and the built-in demo levels.
//!
//! Levels are descriptor lists that `World::from_level` validates against
//! the configured grid, inserts in order, and then evaluates once so rules
//! are live before the first command.

pub mod demo;
pub mod level;

pub use demo::{basic, basic_with, walled_garden, walled_garden_with};
pub use level::{EntityDesc, Level, LevelError, ObjectDesc, TileDesc};
