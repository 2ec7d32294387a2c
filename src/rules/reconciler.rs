//! Property reconciliation.
//!
//! Turns a rule set into effective property sets. Every pass recomputes
//! each entity's complete next set from scratch and swaps it in, so the
//! result depends only on the current entities and rules:
//!
//! - word tiles: exactly `{PUSHABLE}`
//! - game objects: intrinsic `PUSHABLE` (if any) plus every property a rule
//!   grants to the object's type or label
//!
//! Rule-only properties (PLAYER, STOP, WIN, KILL) never outlive their rule.

use log::debug;

use crate::core::{Entity, EntityKind, PropertySet};
use crate::store::EntityStore;

use super::rule::RuleSet;

/// Compute the effective property set `entity` should hold under `rules`.
#[must_use]
pub fn next_properties(entity: &Entity, rules: &RuleSet) -> PropertySet {
    match &entity.kind {
        EntityKind::Tile(_) => PropertySet::TILE,
        EntityKind::Object(obj) => {
            let granted: PropertySet = rules
                .iter()
                .filter(|rule| rule.applies_to(entity))
                .map(|rule| rule.property)
                .collect();
            obj.intrinsic.difference(PropertySet::RULE_ONLY).union(granted)
        }
    }
}

/// Apply `rules` to every entity in the store.
///
/// Returns true if any entity's effective properties changed.
pub fn apply_rules(store: &mut EntityStore, rules: &RuleSet) -> bool {
    let changed = store.update_properties(|entity| next_properties(entity, rules));
    if changed > 0 {
        debug!("reconcile: {} entities changed properties under {} rules", changed, rules.len());
    }
    changed > 0
}
