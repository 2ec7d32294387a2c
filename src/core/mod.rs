//! Core engine types: entities, properties, positions, configuration.
//!
//! This module contains the data model every subsystem shares. It holds no
//! game logic; rule derivation and movement live in `rules` and `movement`.

pub mod entity;
pub mod property;
pub mod position;
pub mod config;

pub use entity::{EntityId, ElementType, Entity, EntityKind, GameObject, FormulaTile};
pub use property::{Property, PropertySet};
pub use position::{Position, GridBounds, Direction, Command};
pub use config::{Rgb, WordTable, EngineConfig};
