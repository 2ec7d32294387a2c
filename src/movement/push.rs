//! Two-phase push resolution.
//!
//! [`plan_move`] inspects the store without touching it and either returns a
//! [`PushPlan`] (everything that must shift, furthest first) or the reason
//! the move is blocked. Only a plan can be committed, so a push chain is
//! applied entirely or not at all.

use log::trace;
use smallvec::SmallVec;

use crate::core::{Direction, EntityId, GridBounds, Position, Property};
use crate::store::EntityStore;

/// Why a move cannot happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blocked {
    /// The mover or the end of the chain would leave the grid.
    OutOfBounds(Position),
    /// A STOP entity that is not PUSHABLE sits in the way.
    Stop(EntityId),
    /// The mover is not in the store.
    Missing(EntityId),
}

/// A feasible move: the mover plus every entity it shoves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushPlan {
    mover: EntityId,
    direction: Direction,
    /// Pushed entities, furthest along the direction first.
    pushed: SmallVec<[EntityId; 8]>,
}

impl PushPlan {
    /// The entity that initiated the move.
    #[must_use]
    pub fn mover(&self) -> EntityId {
        self.mover
    }

    /// Entities that will be shoved, furthest first.
    #[must_use]
    pub fn pushed(&self) -> &[EntityId] {
        &self.pushed
    }

    /// Apply the plan: shift every pushed entity one cell, furthest first,
    /// then the mover.
    pub fn commit(self, store: &mut EntityStore) {
        for &id in self.pushed.iter().chain(std::iter::once(&self.mover)) {
            if let Some(pos) = store.get(id).map(|e| e.position) {
                store.set_position(id, pos.step(self.direction));
            }
        }
    }
}

/// Decide whether `mover` can step in `direction`.
///
/// Pure: reads `store`, never mutates it.
pub fn plan_move(
    store: &EntityStore,
    bounds: GridBounds,
    mover: EntityId,
    direction: Direction,
) -> Result<PushPlan, Blocked> {
    let Some(origin) = store.get(mover).map(|e| e.position) else {
        return Err(Blocked::Missing(mover));
    };
    if !bounds.contains(origin) {
        return Err(Blocked::OutOfBounds(origin));
    }

    let target = origin.step(direction);
    if !bounds.contains(target) {
        return Err(Blocked::OutOfBounds(target));
    }

    let mut pushed = SmallVec::new();
    plan_cell(store, bounds, target, direction, &mut pushed)?;

    trace!("plan {} {:?}: pushes {:?}", mover, direction, pushed);
    Ok(PushPlan { mover, direction, pushed })
}

/// Check that everything pushable in `cell` can shift one step, recursing
/// into the next cell. Appends pushed ids furthest first.
fn plan_cell(
    store: &EntityStore,
    bounds: GridBounds,
    cell: Position,
    direction: Direction,
    pushed: &mut SmallVec<[EntityId; 8]>,
) -> Result<(), Blocked> {
    let occupants = store.at(cell);

    if let Some(wall) = occupants
        .iter()
        .find(|e| e.has(Property::Stop) && !e.has(Property::Pushable))
    {
        return Err(Blocked::Stop(wall.id));
    }

    let here: SmallVec<[EntityId; 4]> = occupants
        .iter()
        .filter(|e| e.has(Property::Pushable))
        .map(|e| e.id)
        .collect();

    if here.is_empty() {
        return Ok(());
    }

    let next = cell.step(direction);
    if !bounds.contains(next) {
        return Err(Blocked::OutOfBounds(next));
    }

    plan_cell(store, bounds, next, direction, pushed)?;
    pushed.extend(here);
    Ok(())
}
