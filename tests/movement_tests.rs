//! Movement and push-chain tests.
//!
//! Each board spells its rules in the top-left corner, one sentence per
//! row, and plays out on the rest of the 20x20 grid.

use rule_tiles::core::{Direction, EngineConfig, EntityId, Position, Property, WordTable};
use rule_tiles::levels::{Level, ObjectDesc};
use rule_tiles::{Command, World};

fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn board(objects: Vec<ObjectDesc>, rules: &[(&str, Property)]) -> Level {
    let words = WordTable::default();
    let mut level = Level::new("test");
    for desc in objects {
        level.push(desc);
    }
    for (row, (subject, property)) in rules.iter().enumerate() {
        level = level.with_tiles(words.sentence(at(0, row as i32), *subject, *property, true));
    }
    level
}

fn world(objects: Vec<ObjectDesc>, rules: &[(&str, Property)]) -> World {
    World::from_level(EngineConfig::default(), &board(objects, rules)).unwrap()
}

fn hero(x: i32, y: i32) -> ObjectDesc {
    ObjectDesc::new(at(x, y), "hero", "Hero")
}

fn crate_at(x: i32, y: i32) -> ObjectDesc {
    ObjectDesc::new(at(x, y), "box", "Box").with_property(Property::Pushable)
}

fn wall(x: i32, y: i32) -> ObjectDesc {
    ObjectDesc::new(at(x, y), "wall", "Wall")
}

/// Position of the `index`-th object labelled `label`, in store order.
fn find(world: &World, label: &str, index: usize) -> Option<Position> {
    world
        .store()
        .iter()
        .filter(|e| e.as_object().is_some_and(|o| o.label == label))
        .nth(index)
        .map(|e| e.position)
}

const SOKOBAN: &[(&str, Property)] = &[
    ("hero", Property::Player),
    ("box", Property::Stop),
    ("wall", Property::Stop),
];

// =============================================================================
// Pushing
// =============================================================================

/// A box backed directly by a wall cannot be pushed.
#[test]
fn test_box_against_wall_is_blocked() {
    let mut world = world(vec![hero(10, 10), crate_at(11, 10), wall(12, 10)], SOKOBAN);
    let before = world.entities();

    assert!(!world.move_controlled(1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(10, 10)));
    assert_eq!(find(&world, "Box", 0), Some(at(11, 10)));
    assert_eq!(world.entities(), before);
}

/// With a free cell between box and wall the push goes through.
#[test]
fn test_box_with_room_is_pushed() {
    let mut world = world(vec![hero(10, 10), crate_at(11, 10), wall(13, 10)], SOKOBAN);

    assert!(world.move_controlled(1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(11, 10)));
    assert_eq!(find(&world, "Box", 0), Some(at(12, 10)));

    // Now flush against the wall.
    assert!(!world.move_controlled(1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(11, 10)));
}

/// A whole line of boxes shifts together.
#[test]
fn test_chain_shifts_together() {
    let boxes = (6..10).map(|y| crate_at(5, y));
    let objects = std::iter::once(hero(5, 10)).chain(boxes).collect();
    let mut world = world(objects, SOKOBAN);

    assert!(world.apply(Command::Move(Direction::Up)));
    assert_eq!(find(&world, "Hero", 0), Some(at(5, 9)));
    for i in 0..4 {
        assert_eq!(find(&world, "Box", i), Some(at(5, 5 + i as i32)));
    }
}

/// A chain that would run off the grid moves nothing.
#[test]
fn test_chain_into_edge_moves_nothing() {
    let boxes = (16..20).map(|x| crate_at(x, 12));
    let objects = std::iter::once(hero(15, 12)).chain(boxes).collect();
    let mut world = world(objects, SOKOBAN);
    let before = world.entities();

    assert!(!world.move_controlled(1, 0));
    assert_eq!(world.entities(), before);
}

/// Word tiles are pushable and can complete a sentence.
#[test]
fn test_pushing_a_word_forms_a_rule() {
    let words = WordTable::default();
    let level = board(vec![hero(12, 17), wall(3, 12)], &[("hero", Property::Player)])
        .with_tile(words.noun(at(10, 15), "wall"))
        .with_tile(words.verb_tile(at(11, 15)))
        .with_tile(words.property(at(12, 16), Property::Stop));
    let mut world = World::from_level(EngineConfig::default(), &level).unwrap();
    assert!(!world.active_rules().contains("wall", Property::Stop));

    assert!(world.move_controlled(0, -1));
    assert!(world.active_rules().contains("wall", Property::Stop));

    let wall = world.store().iter().find(|e| e.is_object() && e.name() == "Wall").unwrap();
    assert!(wall.has(Property::Stop));
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_edges_are_walls() {
    let cases = [(0, 10, -1, 0), (19, 10, 1, 0), (10, 0, 0, -1), (10, 19, 0, 1)];

    for (x, y, dx, dy) in cases {
        let mut world = world(vec![hero(x, y)], &[("hero", Property::Player)]);
        let before = world.entities();

        assert!(!world.move_controlled(dx, dy), "({}, {}) moving ({}, {})", x, y, dx, dy);
        assert_eq!(world.entities(), before);
    }
}

// =============================================================================
// Several Controlled Entities
// =============================================================================

/// The leading hero moves first, making room for the one behind it even
/// when heroes block each other.
#[test]
fn test_heroes_in_a_line_all_move() {
    let rules = [("hero", Property::Player), ("hero", Property::Stop)];
    let mut world = world(vec![hero(5, 8), hero(6, 8), hero(7, 8)], &rules);

    assert!(world.move_controlled(1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(6, 8)));
    assert_eq!(find(&world, "Hero", 1), Some(at(7, 8)));
    assert_eq!(find(&world, "Hero", 2), Some(at(8, 8)));

    assert!(world.move_controlled(-1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(5, 8)));
    assert_eq!(find(&world, "Hero", 2), Some(at(7, 8)));
}

/// One blocked hero does not stop the others.
#[test]
fn test_heroes_resolve_independently() {
    let mut world = world(vec![hero(9, 12), hero(9, 9), wall(10, 12)], SOKOBAN);

    assert!(world.move_controlled(1, 0));
    assert_eq!(find(&world, "Hero", 0), Some(at(9, 12)));
    assert_eq!(find(&world, "Hero", 1), Some(at(10, 9)));
}

/// Without a YOU rule nothing is controlled and moves do nothing.
#[test]
fn test_nothing_controlled_without_you() {
    let mut world = world(vec![hero(9, 9)], &[("wall", Property::Stop)]);

    assert!(world.controlled().is_empty());
    assert!(!world.move_controlled(0, 1));
    assert_eq!(find(&world, "Hero", 0), Some(at(9, 9)));
}

/// Every controlled id is an object holding PLAYER.
#[test]
fn test_controlled_ids() {
    let world = world(vec![hero(9, 9), crate_at(3, 9), hero(4, 4)], SOKOBAN);
    let ids: Vec<EntityId> = world.controlled();

    assert_eq!(ids.len(), 2);
    for id in ids {
        let entity = world.store().get(id).unwrap();
        assert!(entity.is_object());
        assert!(entity.has(Property::Player));
    }
}
