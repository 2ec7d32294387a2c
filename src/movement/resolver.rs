//! Movement of controlled entities.

use std::cmp::Reverse;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::{Direction, EntityId, GridBounds, Property};
use crate::store::EntityStore;

use super::push::plan_move;

/// Moves every controlled entity one step per command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementResolver {
    bounds: GridBounds,
}

impl MovementResolver {
    #[must_use]
    pub fn new(bounds: GridBounds) -> Self {
        Self { bounds }
    }

    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Controlled entities in processing order for `direction`: the one
    /// furthest along the direction first, ties in store order.
    #[must_use]
    pub fn processing_order(&self, store: &EntityStore, direction: Direction) -> Vec<EntityId> {
        let mut controlled: Vec<(EntityId, i32)> = store
            .iter()
            .filter(|e| e.is_object() && e.has(Property::Player))
            .map(|e| (e.id, direction.progress(e.position)))
            .collect();
        controlled.sort_by_key(|&(_, progress)| Reverse(progress));
        controlled.into_iter().map(|(id, _)| id).collect()
    }

    /// Step every controlled entity once in `direction`.
    ///
    /// Each entity is resolved on its own against the live store, so a
    /// leading entity clears the way for one queued behind it. Blocked
    /// entities stay put and push nothing. Returns the ids that moved.
    pub fn step(&self, store: &mut EntityStore, direction: Direction) -> SmallVec<[EntityId; 4]> {
        let mut moved = SmallVec::new();

        for id in self.processing_order(store, direction) {
            match plan_move(store, self.bounds, id, direction) {
                Ok(plan) => {
                    trace!("{} moves {:?}, pushing {}", id, direction, plan.pushed().len());
                    plan.commit(store);
                    moved.push(id);
                }
                Err(blocked) => debug!("{} blocked moving {:?}: {:?}", id, direction, blocked),
            }
        }

        moved
    }
}
