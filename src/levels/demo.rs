//! Built-in demo levels for a 20x20 grid.

use crate::core::{Position, Property, WordTable};

use super::level::{Level, ObjectDesc};

fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// The starter level using the standard words.
#[must_use]
pub fn basic() -> Level {
    basic_with(&WordTable::default())
}

/// The starter level: a robot, two boxes, a wall, a flag and a trap, with
/// one sentence for each.
pub fn basic_with(words: &WordTable) -> Level {
    Level::new("basic")
        .with_object(ObjectDesc::new(at(10, 10), "player", "Player").with_property(Property::Player))
        .with_object(
            ObjectDesc::new(at(5, 5), "box", "Box")
                .with_property(Property::Pushable)
                .with_property(Property::Stop),
        )
        .with_object(
            ObjectDesc::new(at(6, 5), "box", "Box")
                .with_property(Property::Pushable)
                .with_property(Property::Stop),
        )
        .with_object(ObjectDesc::new(at(8, 8), "wall", "Wall").with_property(Property::Stop))
        .with_object(ObjectDesc::new(at(15, 15), "flag", "Flag").with_property(Property::Win))
        .with_object(ObjectDesc::new(at(12, 12), "trap", "Trap").with_property(Property::Kill))
        .with_tiles(words.sentence(at(2, 2), "player", Property::Player, true))
        .with_tiles(words.sentence(at(12, 2), "wall", Property::Stop, false))
        .with_tiles(words.sentence(at(2, 6), "box", Property::Pushable, true))
        .with_tiles(words.sentence(at(8, 15), "flag", Property::Win, true))
        .with_tiles(words.sentence(at(6, 10), "trap", Property::Kill, true))
}

/// The walled garden using the standard words.
#[must_use]
pub fn walled_garden() -> Level {
    walled_garden_with(&WordTable::default())
}

/// A flag sealed inside a wall enclosure and ringed with traps.
///
/// The box starts out controlled. The flag is STOP rather than WIN, and the
/// loose PUSH and WIN words and the "player" noun are there to be
/// rearranged.
pub fn walled_garden_with(words: &WordTable) -> Level {
    const WALLS: [(i32, i32); 24] = [
        (8, 10), (9, 10), (10, 10), (11, 10), (12, 10), (13, 10), (14, 10),
        (14, 11), (14, 12), (14, 13), (14, 14), (14, 15), (14, 16),
        (13, 16), (12, 16), (11, 16), (10, 16), (9, 16), (8, 16),
        (8, 15), (8, 14), (8, 13), (8, 12), (8, 11),
    ];
    const TRAPS: [(i32, i32); 8] = [
        (10, 12), (10, 13), (10, 14), (11, 14),
        (12, 14), (12, 13), (12, 12), (11, 12),
    ];

    let mut level = Level::new("walled garden")
        .with_object(ObjectDesc::new(at(18, 9), "player", "Player").with_property(Property::Player))
        .with_object(
            ObjectDesc::new(at(6, 8), "box", "Box")
                .with_property(Property::Pushable)
                .with_property(Property::Stop),
        );

    for (x, y) in WALLS {
        level.push(ObjectDesc::new(at(x, y), "wall", "Wall").with_property(Property::Stop));
    }
    level.push(ObjectDesc::new(at(11, 13), "flag", "Flag").with_property(Property::Win));
    for (x, y) in TRAPS {
        level.push(ObjectDesc::new(at(x, y), "trap", "Trap").with_property(Property::Kill));
    }

    level
        .with_tiles(words.sentence(at(4, 2), "box", Property::Player, true))
        .with_tiles(words.sentence(at(4, 3), "wall", Property::Stop, true))
        .with_tiles(words.sentence(at(4, 4), "trap", Property::Kill, true))
        .with_tiles(words.sentence(at(4, 5), "flag", Property::Stop, true))
        .with_tile(words.property(at(14, 4), Property::Pushable))
        .with_tile(words.property(at(18, 18), Property::Win))
        .with_tile(words.noun(at(4, 17), "player"))
}
