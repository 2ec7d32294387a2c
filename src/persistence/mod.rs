//! Save/load support.
//!
//! `World::snapshot` hands out a `Snapshot`; `World::restore` takes one
//! back, validates it against the grid, replaces the store wholesale and
//! re-runs the rule pass. Byte encoding uses bincode.

pub mod snapshot;

pub use snapshot::{SaveError, Snapshot};
