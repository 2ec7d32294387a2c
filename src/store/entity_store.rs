//! Entity storage and spatial queries.
//!
//! The `EntityStore` owns every entity on the board. It supports:
//! - Insertion with id allocation, removal, clearing
//! - Cell queries (`at`) returning every entity in a cell
//! - Cheap snapshots for renderers and savers
//!
//! Iteration order is insertion order, so scans over the store are
//! reproducible pass to pass. No game logic lives here.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{Entity, EntityId, Position, Property, PropertySet};

/// Owns all grid entities.
///
/// Backed by an `im::Vector`, so [`EntityStore::all`] hands out a full
/// persistent copy in O(1) and later mutation never shows through it.
///
/// ## Usage
///
/// ```
/// use rule_tiles::core::{Entity, EntityId, Position};
/// use rule_tiles::store::EntityStore;
///
/// let mut store = EntityStore::new();
/// let a = store.add(Entity::object(EntityId(0), Position::new(1, 1), "box", "Box"));
/// let b = store.add(Entity::object(EntityId(0), Position::new(1, 1), "rock", "Rock"));
///
/// assert_ne!(a, b);
/// assert_eq!(store.at(Position::new(1, 1)).len(), 2);
///
/// let snapshot = store.all();
/// store.clear();
/// assert_eq!(snapshot.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vector<Entity>,
    next_id: u32,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, assigning it a fresh id.
    ///
    /// Any id already on `entity` is overwritten. Returns the assigned id.
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = id.next().raw();
        entity.id = id;
        self.entities.push_back(entity);
        id
    }

    /// Remove an entity.
    ///
    /// Returns the removed entity, or `None` if it wasn't found.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index))
    }

    /// Remove everything. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Replace the contents wholesale, keeping the given ids and order.
    ///
    /// New ids are allocated after the highest restored id.
    pub fn replace_all(&mut self, entities: Vector<Entity>) {
        self.next_id = entities
            .iter()
            .map(|e| e.id.next().raw())
            .max()
            .unwrap_or(0)
            .max(self.next_id);
        self.entities = entities;
    }

    /// Snapshot of every entity in insertion order.
    #[must_use]
    pub fn all(&self) -> Vector<Entity> {
        self.entities.clone()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    /// All entities occupying `pos`, in insertion order.
    #[must_use]
    pub fn at(&self, pos: Position) -> SmallVec<[&Entity; 4]> {
        self.entities.iter().filter(|e| e.position == pos).collect()
    }

    /// Get an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Move an entity. Returns false if it wasn't found.
    pub fn set_position(&mut self, id: EntityId, pos: Position) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.entities[index].position = pos;
                true
            }
            None => false,
        }
    }

    /// Swap in a new effective property set for every entity.
    ///
    /// `next` is called once per entity in insertion order; returns how many
    /// entities ended up with a different set.
    pub fn update_properties<F>(&mut self, mut next: F) -> usize
    where
        F: FnMut(&Entity) -> PropertySet,
    {
        let mut changed = 0;
        for entity in self.entities.iter_mut() {
            let props = next(entity);
            if props != entity.properties {
                entity.properties = props;
                changed += 1;
            }
        }
        changed
    }

    /// Ids of game objects currently holding `property`, in insertion order.
    #[must_use]
    pub fn objects_with(&self, property: Property) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.is_object() && e.has(property))
            .map(|e| e.id)
            .collect()
    }

    /// Check if the store contains an entity.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get total number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }
}
