//! # rule-tiles
//!
//! A grid puzzle engine where the rules are tiles on the board.
//!
//! Word tiles (NOUN, VERB, PROPERTY) lined up as `NOUN IS PROPERTY` form
//! live rules such as `BOX IS PUSH`. Rules decide which objects are
//! controlled, blocking, winning or lethal, and they change whenever tiles
//! are pushed around.
//!
//! ## Design Principles
//!
//! 1. **Recompute, don't patch**: every pass derives the rule set from the
//!    tiles and swaps in each entity's complete property set. No state
//!    survives a pass except positions and creation-time PUSHABLE.
//!
//! 2. **Check, then commit**: pushes are planned without mutation and
//!    applied only when the whole chain can move.
//!
//! 3. **Configuration Over Globals**: words, verb and colors live in an
//!    `EngineConfig` value owned by the `World`.
//!
//! ## Modules
//!
//! - `core`: Entity ids, positions, properties, configuration
//! - `store`: Entity storage and cell queries
//! - `rules`: Rule scanning and property reconciliation
//! - `movement`: Push planning and the movement resolver
//! - `state`: Win / kill / game-over evaluation
//! - `levels`: Level descriptors and demo levels
//! - `persistence`: Snapshots and byte encoding
//! - `world`: The `World` that runs one pass per command

pub mod core;
pub mod store;
pub mod rules;
pub mod movement;
pub mod state;
pub mod levels;
pub mod persistence;
pub mod world;

// Re-export commonly used types
pub use crate::core::{
    EntityId, Entity, EntityKind, GameObject, FormulaTile, ElementType,
    Property, PropertySet,
    Position, GridBounds, Direction, Command,
    EngineConfig, WordTable, Rgb,
};

pub use crate::store::EntityStore;

pub use crate::rules::{Rule, RuleMatch, RuleSet, derive_rules, apply_rules};

pub use crate::movement::{MovementResolver, PushPlan, Blocked, plan_move};

pub use crate::state::{GameFlags, GameStatus};

pub use crate::levels::{Level, LevelError, ObjectDesc, TileDesc};

pub use crate::persistence::{Snapshot, SaveError};

pub use crate::world::World;
