//! Grid entities.
//!
//! Every thing on the board is an [`Entity`]: a unique `EntityId`, a grid
//! position, an effective property set, and a closed [`EntityKind`] tag that
//! says whether it is a plain game object or a word tile.
//!
//! ## Usage
//!
//! ```
//! use rule_tiles::core::{Entity, EntityId, ElementType, Position, Property};
//!
//! let box_obj = Entity::object(EntityId(0), Position::new(5, 5), "box", "Box");
//! assert!(box_obj.is_object());
//! assert!(box_obj.matches_subject("BOX"));
//!
//! let noun = Entity::tile(EntityId(1), Position::new(2, 2), ElementType::Noun, "box", None);
//! assert!(noun.is_tile());
//! assert!(noun.has(Property::Pushable));
//! ```

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::property::{Property, PropertySet};

/// Unique identifier for any grid entity.
///
/// IDs are allocated by the `EntityStore` in insertion order and are never
/// reused within a store's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Largest id a store will hand out or accept on restore.
    pub const MAX: EntityId = EntityId(u32::MAX - 1);

    /// The id following this one. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Grammatical role of a word tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Names a kind of object ("box", "wall").
    Noun,
    /// Connects subject and property ("IS").
    Verb,
    /// Names a property ("STOP", "WIN").
    Property,
}

impl ElementType {
    /// All element types, in rule order.
    pub const ALL: [ElementType; 3] = [ElementType::Noun, ElementType::Verb, ElementType::Property];
}

/// A non-word object on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    /// Kind tag matched against rule subjects ("box").
    pub object_type: String,

    /// Display name, also matched against rule subjects ("Box").
    pub label: String,

    /// Properties granted at creation time.
    ///
    /// Only `Pushable` survives reconciliation; the rest are overridden by
    /// the first rule pass.
    pub intrinsic: PropertySet,
}

/// A word tile: raw material for rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaTile {
    pub element: ElementType,

    /// Word text ("box", "IS", "STOP").
    pub value: String,

    /// Property this word grants. Only meaningful for `ElementType::Property`.
    pub bound_property: Option<Property>,
}

/// Closed variant tag for entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Object(GameObject),
    Tile(FormulaTile),
}

/// Anything that occupies a grid cell.
///
/// Several entities may share one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,

    /// Effective properties, maintained by the reconciler.
    pub properties: PropertySet,

    pub kind: EntityKind,
}

impl Entity {
    /// Create a game object with no intrinsic properties.
    pub fn object(
        id: EntityId,
        position: Position,
        object_type: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::object_with(id, position, object_type, label, PropertySet::EMPTY)
    }

    /// Create a game object with creation-time properties.
    ///
    /// The effective set starts out equal to `intrinsic` until the first
    /// reconcile pass.
    pub fn object_with(
        id: EntityId,
        position: Position,
        object_type: impl Into<String>,
        label: impl Into<String>,
        intrinsic: PropertySet,
    ) -> Self {
        Self {
            id,
            position,
            properties: intrinsic,
            kind: EntityKind::Object(GameObject {
                object_type: object_type.into(),
                label: label.into(),
                intrinsic,
            }),
        }
    }

    /// Create a word tile. Tiles are always pushable.
    pub fn tile(
        id: EntityId,
        position: Position,
        element: ElementType,
        value: impl Into<String>,
        bound_property: Option<Property>,
    ) -> Self {
        Self {
            id,
            position,
            properties: PropertySet::TILE,
            kind: EntityKind::Tile(FormulaTile {
                element,
                value: value.into(),
                bound_property,
            }),
        }
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.kind, EntityKind::Object(_))
    }

    #[must_use]
    pub fn is_tile(&self) -> bool {
        matches!(self.kind, EntityKind::Tile(_))
    }

    /// Borrow the object payload, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&GameObject> {
        match &self.kind {
            EntityKind::Object(obj) => Some(obj),
            EntityKind::Tile(_) => None,
        }
    }

    /// Borrow the tile payload, if this is a tile.
    #[must_use]
    pub fn as_tile(&self) -> Option<&FormulaTile> {
        match &self.kind {
            EntityKind::Tile(tile) => Some(tile),
            EntityKind::Object(_) => None,
        }
    }

    /// Check an effective property.
    #[must_use]
    pub fn has(&self, property: Property) -> bool {
        self.properties.contains(property)
    }

    /// Whether this is a game object whose type or label equals `subject`,
    /// ignoring case. Tiles never match.
    #[must_use]
    pub fn matches_subject(&self, subject: &str) -> bool {
        match &self.kind {
            EntityKind::Object(obj) => {
                eq_ignore_case(&obj.object_type, subject) || eq_ignore_case(&obj.label, subject)
            }
            EntityKind::Tile(_) => false,
        }
    }

    /// Human-readable name for logs.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.kind {
            EntityKind::Object(obj) => &obj.label,
            EntityKind::Tile(tile) => &tile.value,
        }
    }
}

/// Unicode-aware case-insensitive comparison.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
