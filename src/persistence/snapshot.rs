//! Board snapshots.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Entity, EntityId, GridBounds, Position};

/// Reasons a snapshot cannot be encoded, decoded or restored.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("{id} at {position} lies outside the {columns}x{rows} grid")]
    OutOfBounds {
        id: EntityId,
        position: Position,
        columns: i32,
        rows: i32,
    },

    #[error("{0} appears more than once")]
    DuplicateId(EntityId),

    #[error("{0} leaves no room for new ids")]
    IdExhausted(EntityId),
}

/// A read-only copy of every entity on the board.
///
/// Taking one is O(1): the entity list is a persistent `im::Vector`
/// shared with the store until either side changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid the snapshot was taken on.
    pub bounds: GridBounds,
    entities: Vector<Entity>,
}

impl Snapshot {
    #[must_use]
    pub fn new(bounds: GridBounds, entities: Vector<Entity>) -> Self {
        Self { bounds, entities }
    }

    /// Entities in store order, with positions and effective properties.
    #[must_use]
    pub fn entities(&self) -> &Vector<Entity> {
        &self.entities
    }

    #[must_use]
    pub fn into_entities(self) -> Vector<Entity> {
        self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check that every entity fits `bounds`, no id repeats and no id is
    /// past [`EntityId::MAX`].
    pub fn validate(&self, bounds: GridBounds) -> Result<(), SaveError> {
        let mut seen = FxHashSet::default();
        for entity in &self.entities {
            if !bounds.contains(entity.position) {
                return Err(SaveError::OutOfBounds {
                    id: entity.id,
                    position: entity.position,
                    columns: bounds.columns,
                    rows: bounds.rows,
                });
            }
            if entity.id > EntityId::MAX {
                return Err(SaveError::IdExhausted(entity.id));
            }
            if !seen.insert(entity.id) {
                return Err(SaveError::DuplicateId(entity.id));
            }
        }
        Ok(())
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
