//! Object properties and compact property sets.
//!
//! Properties are what rules grant: control (`Player`), pushability,
//! blocking, winning and lethality. A [`PropertySet`] is a copyable bitset,
//! so a whole next-state set can be computed as a value and swapped in.

use serde::{Deserialize, Serialize};

/// A rule-grantable behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Moves with player input ("YOU").
    Player,
    /// Can be shoved along by a mover ("PUSH").
    Pushable,
    /// Blocks movement into its cell ("STOP").
    Stop,
    /// Touching it with a controlled entity wins ("WIN").
    Win,
    /// Destroys controlled entities sharing its cell ("KILL").
    Kill,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 5] = [
        Property::Player,
        Property::Pushable,
        Property::Stop,
        Property::Win,
        Property::Kill,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Property::Player => "PLAYER",
            Property::Pushable => "PUSHABLE",
            Property::Stop => "STOP",
            Property::Win => "WIN",
            Property::Kill => "KILL",
        };
        f.write_str(name)
    }
}

/// Set of properties held by one entity.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySet(u8);

impl PropertySet {
    /// No properties.
    pub const EMPTY: PropertySet = PropertySet(0);

    /// The only set a word tile may hold.
    pub const TILE: PropertySet = PropertySet(Property::Pushable.bit());

    /// Properties that exist only while a rule grants them.
    pub const RULE_ONLY: PropertySet = PropertySet(
        Property::Player.bit() | Property::Stop.bit() | Property::Win.bit() | Property::Kill.bit(),
    );

    #[must_use]
    pub const fn contains(self, property: Property) -> bool {
        self.0 & property.bit() != 0
    }

    /// Return a copy with `property` added.
    #[must_use]
    pub const fn with(self, property: Property) -> Self {
        Self(self.0 | property.bit())
    }

    /// Add a property. Returns true if it was not already present.
    pub fn insert(&mut self, property: Property) -> bool {
        let added = !self.contains(property);
        self.0 |= property.bit();
        added
    }

    /// Remove a property. Returns true if it was present.
    pub fn remove(&mut self, property: Property) -> bool {
        let present = self.contains(property);
        self.0 &= !property.bit();
        present
    }

    #[must_use]
    pub const fn union(self, other: PropertySet) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: PropertySet) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate contained properties in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Property> {
        Property::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        iter.into_iter().fold(PropertySet::EMPTY, PropertySet::with)
    }
}

impl std::fmt::Debug for PropertySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
