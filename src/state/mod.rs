//! Game state evaluation.
//!
//! After each resolved command the board is checked once for kills, wins
//! and the loss of every controlled entity. Outcomes are recorded in sticky
//! `GameFlags`:
//!
//! ```text
//! PLAYING ──win──▶ WON   (terminal until reset)
//!    │
//!    └──no players──▶ OVER (terminal until reset)
//! ```

pub mod evaluator;

pub use evaluator::{GameFlags, GameStatus};
