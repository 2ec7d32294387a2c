//! Level descriptions.
//!
//! A `Level` is plain data: an ordered list of object and tile descriptors.
//! It carries no ids; the `EntityStore` allocates them on insertion, in
//! list order.
//!
//! ## Usage
//!
//! ```
//! use rule_tiles::core::{Position, Property, WordTable};
//! use rule_tiles::levels::{Level, ObjectDesc};
//!
//! let words = WordTable::default();
//! let level = Level::new("tiny")
//!     .with_object(ObjectDesc::new(Position::new(1, 1), "robot", "Robot"))
//!     .with_tiles(words.sentence(Position::new(0, 0), "robot", Property::Player, true));
//!
//! assert_eq!(level.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ElementType, Entity, EntityId, GridBounds, Position, Property, PropertySet};

/// Descriptor for a game object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDesc {
    pub position: Position,
    pub object_type: String,
    pub label: String,

    /// Creation-time properties.
    pub properties: PropertySet,
}

impl ObjectDesc {
    pub fn new(position: Position, object_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            position,
            object_type: object_type.into(),
            label: label.into(),
            properties: PropertySet::EMPTY,
        }
    }

    /// Add a creation-time property.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.insert(property);
        self
    }

    fn to_entity(&self) -> Entity {
        Entity::object_with(
            EntityId(0),
            self.position,
            self.object_type.clone(),
            self.label.clone(),
            self.properties,
        )
    }
}

/// Descriptor for a word tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDesc {
    pub position: Position,
    pub element: ElementType,
    pub value: String,
    pub bound_property: Option<Property>,
}

impl TileDesc {
    fn to_entity(&self) -> Entity {
        Entity::tile(
            EntityId(0),
            self.position,
            self.element,
            self.value.clone(),
            self.bound_property,
        )
    }
}

/// One entry in a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityDesc {
    Object(ObjectDesc),
    Tile(TileDesc),
}

impl EntityDesc {
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            EntityDesc::Object(o) => o.position,
            EntityDesc::Tile(t) => t.position,
        }
    }

    fn describe(&self) -> String {
        match self {
            EntityDesc::Object(o) => format!("object \"{}\"", o.label),
            EntityDesc::Tile(t) => format!("tile \"{}\"", t.value),
        }
    }

    /// Build the entity this descriptor stands for. The id is a
    /// placeholder; the store assigns the real one.
    #[must_use]
    pub fn to_entity(&self) -> Entity {
        match self {
            EntityDesc::Object(o) => o.to_entity(),
            EntityDesc::Tile(t) => t.to_entity(),
        }
    }
}

impl From<ObjectDesc> for EntityDesc {
    fn from(desc: ObjectDesc) -> Self {
        EntityDesc::Object(desc)
    }
}

impl From<TileDesc> for EntityDesc {
    fn from(desc: TileDesc) -> Self {
        EntityDesc::Tile(desc)
    }
}

/// Reasons a level cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("{what} at {position} lies outside the {columns}x{rows} grid")]
    OutOfBounds {
        what: String,
        position: Position,
        columns: i32,
        rows: i32,
    },

    #[error("noun tile at {position} has an empty name")]
    EmptyNoun { position: Position },
}

/// An ordered set of entity descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    entries: Vec<EntityDesc>,
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_object(mut self, desc: ObjectDesc) -> Self {
        self.entries.push(desc.into());
        self
    }

    #[must_use]
    pub fn with_tile(mut self, desc: TileDesc) -> Self {
        self.entries.push(desc.into());
        self
    }

    #[must_use]
    pub fn with_tiles(mut self, tiles: impl IntoIterator<Item = TileDesc>) -> Self {
        self.entries.extend(tiles.into_iter().map(EntityDesc::from));
        self
    }

    pub fn push(&mut self, desc: impl Into<EntityDesc>) {
        self.entries.push(desc.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[EntityDesc] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every descriptor against `bounds`. Stops at the first problem.
    pub fn validate(&self, bounds: GridBounds) -> Result<(), LevelError> {
        for desc in &self.entries {
            let position = desc.position();
            if !bounds.contains(position) {
                return Err(LevelError::OutOfBounds {
                    what: desc.describe(),
                    position,
                    columns: bounds.columns,
                    rows: bounds.rows,
                });
            }

            // A PROPERTY tile without a bound property is legal; it never
            // completes a rule.
            if let EntityDesc::Tile(tile) = desc {
                if tile.element == ElementType::Noun && tile.value.trim().is_empty() {
                    return Err(LevelError::EmptyNoun { position });
                }
            }
        }
        Ok(())
    }

    /// Entities in level order, with placeholder ids.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().map(EntityDesc::to_entity)
    }
}
