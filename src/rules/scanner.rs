//! Rule derivation.
//!
//! Scans word tiles for `NOUN IS PROPERTY` sentences reading left-to-right
//! along a row or top-to-bottom along a column.

use rustc_hash::FxHashMap;

use crate::core::{ElementType, Entity, Position, WordTable};

use super::rule::{Rule, RuleSet};

/// Scan axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Coordinate shared by a line of tiles.
    fn line(self, pos: Position) -> i32 {
        match self {
            Axis::Horizontal => pos.y,
            Axis::Vertical => pos.x,
        }
    }

    /// Coordinate that varies along the line.
    fn along(self, pos: Position) -> i32 {
        match self {
            Axis::Horizontal => pos.x,
            Axis::Vertical => pos.y,
        }
    }
}

/// Derive every active rule from the tiles among `entities`.
///
/// Tiles are grouped per row (and separately per column), sorted along the
/// line, and scanned with a window of three consecutive tiles. A window
/// matches when its cells are unit-adjacent, its element types read NOUN,
/// VERB, PROPERTY, the verb is the configured linking word and the property
/// tile is bound to a property.
///
/// Horizontal matches come first, rows in ascending order, then vertical
/// matches by ascending column. Non-tile entities are ignored.
pub fn derive_rules<'a, I>(entities: I, words: &WordTable) -> RuleSet
where
    I: IntoIterator<Item = &'a Entity>,
{
    let tiles: Vec<&Entity> = entities.into_iter().filter(|e| e.is_tile()).collect();
    let mut rules = RuleSet::new();

    if tiles.len() < 3 {
        return rules;
    }

    scan_axis(&tiles, Axis::Horizontal, words, &mut rules);
    scan_axis(&tiles, Axis::Vertical, words, &mut rules);

    rules
}

fn scan_axis(tiles: &[&Entity], axis: Axis, words: &WordTable, out: &mut RuleSet) {
    let mut lines: FxHashMap<i32, Vec<&Entity>> = FxHashMap::default();
    for &tile in tiles {
        lines.entry(axis.line(tile.position)).or_default().push(tile);
    }

    let mut keys: Vec<i32> = lines.keys().copied().collect();
    keys.sort_unstable();

    for key in keys {
        let Some(line) = lines.get_mut(&key) else { continue };
        // Stable sort keeps insertion order among stacked tiles.
        line.sort_by_key(|e| axis.along(e.position));

        for window in line.windows(3) {
            if let Some(rule) = match_window(window, axis, words) {
                out.push(rule, [window[0].id, window[1].id, window[2].id]);
            }
        }
    }
}

fn match_window(window: &[&Entity], axis: Axis, words: &WordTable) -> Option<Rule> {
    let [first, second, third] = window else { return None };

    let start = axis.along(first.position);
    if axis.along(second.position) != start + 1 || axis.along(third.position) != start + 2 {
        return None;
    }

    let noun = first.as_tile()?;
    let verb = second.as_tile()?;
    let prop = third.as_tile()?;

    if noun.element != ElementType::Noun
        || verb.element != ElementType::Verb
        || prop.element != ElementType::Property
    {
        return None;
    }

    if !words.is_verb(&verb.value) {
        return None;
    }

    // Unbound property words form no rule.
    let property = prop.bound_property?;

    Some(Rule::new(noun.value.clone(), property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityId, Property};

    struct Board {
        entities: Vec<Entity>,
        words: WordTable,
    }

    impl Board {
        fn new() -> Self {
            Self {
                entities: Vec::new(),
                words: WordTable::default(),
            }
        }

        fn tile(&mut self, x: i32, y: i32, element: ElementType, value: &str, prop: Option<Property>) -> EntityId {
            let id = EntityId(self.entities.len() as u32);
            self.entities.push(Entity::tile(id, Position::new(x, y), element, value, prop));
            id
        }

        fn noun(&mut self, x: i32, y: i32, name: &str) -> EntityId {
            self.tile(x, y, ElementType::Noun, name, None)
        }

        fn verb(&mut self, x: i32, y: i32) -> EntityId {
            self.tile(x, y, ElementType::Verb, "IS", None)
        }

        fn prop(&mut self, x: i32, y: i32, p: Property) -> EntityId {
            let word = self.words.word_for(p).to_string();
            self.tile(x, y, ElementType::Property, &word, Some(p))
        }

        fn scan(&self) -> RuleSet {
            derive_rules(&self.entities, &self.words)
        }
    }

    #[test]
    fn test_horizontal_sentence() {
        let mut board = Board::new();
        let n = board.noun(2, 2, "box");
        let v = board.verb(3, 2);
        let p = board.prop(4, 2, Property::Stop);

        let rules = board.scan();
        assert_eq!(rules.len(), 1);
        assert!(rules.contains("box", Property::Stop));
        assert_eq!(rules.matches()[0].tiles, [n, v, p]);
    }

    #[test]
    fn test_vertical_sentence() {
        let mut board = Board::new();
        board.noun(10, 5, "wall");
        board.verb(10, 6);
        board.prop(10, 7, Property::Win);

        assert!(board.scan().contains("wall", Property::Win));
    }

    #[test]
    fn test_gap_breaks_sentence() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.verb(3, 2);
        board.prop(5, 2, Property::Stop);

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_wrong_order_is_not_a_rule() {
        let mut board = Board::new();
        board.prop(2, 2, Property::Stop);
        board.verb(3, 2);
        board.noun(4, 2, "box");

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_reading_upwards_is_not_a_rule() {
        let mut board = Board::new();
        board.noun(2, 4, "box");
        board.verb(2, 3);
        board.prop(2, 2, Property::Stop);

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_verb_text_must_match() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.tile(3, 2, ElementType::Verb, "HAS", None);
        board.prop(4, 2, Property::Stop);

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_verb_case_insensitive() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.tile(3, 2, ElementType::Verb, "is", None);
        board.prop(4, 2, Property::Stop);

        assert_eq!(board.scan().len(), 1);
    }

    #[test]
    fn test_unbound_property_is_skipped() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.verb(3, 2);
        board.tile(4, 2, ElementType::Property, "NORM", None);

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_shared_noun_forms_two_rules() {
        // box IS PUSH
        // IS
        // WIN
        let mut board = Board::new();
        board.noun(3, 3, "box");
        board.verb(4, 3);
        board.prop(5, 3, Property::Pushable);
        board.verb(3, 4);
        board.prop(3, 5, Property::Win);

        let rules = board.scan();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("box", Property::Pushable));
        assert!(rules.contains("box", Property::Win));
    }

    #[test]
    fn test_long_row_overlapping_windows() {
        // box IS STOP IS ... only the first window is a sentence
        let mut board = Board::new();
        board.noun(0, 0, "box");
        board.verb(1, 0);
        board.prop(2, 0, Property::Stop);
        board.noun(3, 0, "flag");
        board.verb(4, 0);
        board.prop(5, 0, Property::Win);

        let rules = board.scan();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("flag", Property::Win));
    }

    #[test]
    fn test_objects_are_ignored() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.entities.push(Entity::object(EntityId(99), Position::new(3, 2), "is", "IS"));
        board.prop(4, 2, Property::Stop);

        assert!(board.scan().is_empty());
    }

    #[test]
    fn test_scan_is_reproducible() {
        let mut board = Board::new();
        board.noun(2, 2, "box");
        board.verb(3, 2);
        board.prop(4, 2, Property::Stop);
        board.noun(7, 1, "wall");
        board.verb(7, 2);
        board.prop(7, 3, Property::Kill);

        let a = board.scan();
        let b = board.scan();
        assert_eq!(a.matches(), b.matches());
    }
}
