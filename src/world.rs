//! The world: one owner for the board, the live rules and the game flags.
//!
//! Every command runs one complete pass, synchronously:
//!
//! ```text
//! Command ─▶ MovementResolver::step ─▶ derive_rules ─▶ apply_rules ─▶ check_state
//! ```
//!
//! ## Usage
//!
//! ```
//! use rule_tiles::core::{Direction, EngineConfig, Position, Property, WordTable};
//! use rule_tiles::levels::{Level, ObjectDesc};
//! use rule_tiles::{Command, World};
//!
//! let words = WordTable::default();
//! let level = Level::new("demo")
//!     .with_object(ObjectDesc::new(Position::new(5, 5), "robot", "Robot"))
//!     .with_object(ObjectDesc::new(Position::new(6, 5), "flag", "Flag"))
//!     .with_tiles(words.sentence(Position::new(0, 0), "robot", Property::Player, true))
//!     .with_tiles(words.sentence(Position::new(0, 1), "flag", Property::Win, true));
//!
//! let mut world = World::from_level(EngineConfig::default(), &level).unwrap();
//! assert_eq!(world.active_rules().len(), 2);
//!
//! assert!(world.apply(Command::Move(Direction::Right)));
//! assert!(world.is_game_won());
//! ```

use im::Vector;
use log::{debug, warn};

use crate::core::{Command, Direction, EngineConfig, Entity, EntityId, Position, Property};
use crate::levels::{Level, LevelError};
use crate::movement::MovementResolver;
use crate::persistence::{SaveError, Snapshot};
use crate::rules::{apply_rules, derive_rules, RuleSet};
use crate::state::{GameFlags, GameStatus};
use crate::store::EntityStore;

/// A play session on one grid.
#[derive(Clone, Debug)]
pub struct World {
    config: EngineConfig,
    store: EntityStore,
    flags: GameFlags,
    /// Rules derived by the most recent pass.
    rules: RuleSet,
    resolver: MovementResolver,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let resolver = MovementResolver::new(config.bounds);
        Self {
            config,
            store: EntityStore::new(),
            flags: GameFlags::new(),
            rules: RuleSet::new(),
            resolver,
        }
    }

    /// Create a world populated from `level`, with rules already evaluated.
    pub fn from_level(config: EngineConfig, level: &Level) -> Result<Self, LevelError> {
        let mut world = Self::new(config);
        world.restart(level)?;
        Ok(world)
    }

    /// Replace the board with `level`, evaluate rules and clear the game
    /// flags. On error the world is left untouched.
    pub fn restart(&mut self, level: &Level) -> Result<(), LevelError> {
        level.validate(self.config.bounds)?;

        self.store.clear();
        for entity in level.entities() {
            self.store.add(entity);
        }
        self.rules = RuleSet::new();
        self.evaluate_rules();
        self.flags.reset();

        debug!("loaded level \"{}\": {} entities", level.name, self.store.len());
        Ok(())
    }

    // === Board access ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Insert an entity. Rules are not re-evaluated until the next pass.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        self.store.add(entity)
    }

    /// Remove an entity. Rules are not re-evaluated until the next pass.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.store.remove(id)
    }

    /// Copies of every entity in `pos`.
    #[must_use]
    pub fn entities_at(&self, pos: Position) -> Vec<Entity> {
        self.store.at(pos).into_iter().cloned().collect()
    }

    /// Rules in force after the most recent pass.
    #[must_use]
    pub fn active_rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Game objects currently holding PLAYER, in store order.
    #[must_use]
    pub fn controlled(&self) -> Vec<EntityId> {
        self.store.objects_with(Property::Player)
    }

    // === Rule pass ===

    /// Scan the tiles and reconcile every entity's properties.
    ///
    /// Returns true if any entity's properties changed.
    pub fn evaluate_rules(&mut self) -> bool {
        let rules = derive_rules(self.store.iter(), &self.config.words);

        if rules != self.rules {
            for rule in rules.added_since(&self.rules) {
                debug!("rule formed: {}", rule);
            }
            for rule in self.rules.added_since(&rules) {
                debug!("rule broken: {}", rule);
            }
        }

        let changed = apply_rules(&mut self.store, &rules);
        self.rules = rules;
        changed
    }

    // === Input ===

    /// Run one command.
    ///
    /// Returns true if any controlled entity moved or any entity's
    /// properties changed. Once the game is won or over, moves are ignored
    /// until [`World::reset_game_state`]; `Recheck` always runs.
    pub fn apply(&mut self, command: Command) -> bool {
        let moved = match command {
            Command::Move(direction) => {
                if self.flags.status() != GameStatus::Playing {
                    debug!("ignoring {:?}: game is {:?}", direction, self.flags.status());
                    return false;
                }
                self.step(direction)
            }
            Command::Recheck => false,
        };

        let changed = self.evaluate_rules();
        self.flags.check_state(&mut self.store);
        moved || changed
    }

    /// Run a command given as a raw delta: a unit axis step, or `(0, 0)`
    /// for a recheck. Anything else is rejected without running a pass.
    pub fn move_controlled(&mut self, dx: i32, dy: i32) -> bool {
        match Command::from_delta(dx, dy) {
            Some(command) => self.apply(command),
            None => {
                warn!("rejected move delta ({}, {})", dx, dy);
                false
            }
        }
    }

    /// Re-run the rule pass and state evaluation without moving.
    pub fn recheck(&mut self) -> bool {
        self.apply(Command::Recheck)
    }

    fn step(&mut self, direction: Direction) -> bool {
        !self.resolver.step(&mut self.store, direction).is_empty()
    }

    // === Game state ===

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.flags.is_won()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.flags.is_over()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.flags.status()
    }

    /// Clear the win and game-over flags.
    pub fn reset_game_state(&mut self) {
        self.flags.reset();
    }

    // === Persistence ===

    /// Copy of the board. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.config.bounds, self.store.all())
    }

    /// Copy of every entity in store order. O(1).
    #[must_use]
    pub fn entities(&self) -> Vector<Entity> {
        self.store.all()
    }

    /// Replace the board with `snapshot` and re-evaluate rules.
    ///
    /// Game flags are cleared. On error the world is left untouched.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), SaveError> {
        snapshot.validate(self.config.bounds)?;

        self.store.replace_all(snapshot.into_entities());
        self.rules = RuleSet::new();
        self.evaluate_rules();
        self.flags.reset();

        debug!("restored {} entities", self.store.len());
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementType, GridBounds, PropertySet, WordTable};
    use crate::levels::{ObjectDesc, TileDesc};

    fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Robot at (5,5), flag at (7,5); ROBOT IS YOU and FLAG IS WIN in the
    /// top-left corner, FLAG IS WIN also spelled at (5,3)..(7,3).
    fn tiny() -> Level {
        let words = WordTable::default();
        Level::new("tiny")
            .with_object(ObjectDesc::new(at(5, 5), "robot", "Robot"))
            .with_object(ObjectDesc::new(at(7, 5), "flag", "Flag"))
            .with_tiles(words.sentence(at(0, 0), "robot", Property::Player, true))
            .with_tiles(words.sentence(at(5, 3), "flag", Property::Win, true))
    }

    fn world() -> World {
        World::from_level(EngineConfig::default(), &tiny()).unwrap()
    }

    fn robot_pos(world: &World) -> Option<Position> {
        let id = *world.controlled().first()?;
        world.store().get(id).map(|e| e.position)
    }

    #[test]
    fn test_from_level_runs_initial_pass() {
        let world = world();

        assert_eq!(world.active_rules().len(), 2);
        assert_eq!(world.controlled().len(), 1);
        assert_eq!(world.status(), GameStatus::Playing);
    }

    #[test]
    fn test_from_level_rejects_bad_level() {
        let level = tiny().with_object(ObjectDesc::new(at(30, 0), "rock", "Rock"));
        assert!(World::from_level(EngineConfig::default(), &level).is_err());
    }

    #[test]
    fn test_unmapped_property_word_loads_without_rule() {
        let words = WordTable::default();
        let level = Level::new("unmapped")
            .with_object(ObjectDesc::new(at(9, 9), "box", "Box"))
            .with_tiles(words.sentence(at(0, 0), "box", Property::Player, true))
            .with_tile(words.noun(at(2, 4), "box"))
            .with_tile(words.verb_tile(at(3, 4)))
            .with_tile(TileDesc {
                position: at(4, 4),
                element: ElementType::Property,
                value: "NORM".to_string(),
                bound_property: None,
            });

        let world = World::from_level(EngineConfig::default(), &level).unwrap();

        assert_eq!(world.active_rules().len(), 1);
        assert!(world.active_rules().contains("box", Property::Player));
        let norm = world.entities_at(at(4, 4));
        assert_eq!(norm.len(), 1);
        assert_eq!(norm[0].properties, PropertySet::TILE);
    }

    #[test]
    fn test_controlled_entity_off_the_grid_cannot_move() {
        let mut world = world();
        let stray = world.add(Entity::object(EntityId(0), at(i32::MAX, 5), "robot", "Robot"));
        world.recheck();
        assert!(world.controlled().contains(&stray));

        world.move_controlled(1, 0);
        assert_eq!(world.store().get(stray).map(|e| e.position), Some(at(i32::MAX, 5)));
        assert_eq!(robot_pos(&world), Some(at(6, 5)));
    }

    #[test]
    fn test_walk_onto_flag_wins() {
        let mut world = world();

        assert!(world.apply(Command::Move(Direction::Right)));
        assert!(!world.is_game_won());
        assert!(world.apply(Command::Move(Direction::Right)));
        assert!(world.is_game_won());
        assert_eq!(robot_pos(&world), Some(at(7, 5)));
    }

    #[test]
    fn test_moves_ignored_after_win() {
        let mut world = world();
        world.move_controlled(1, 0);
        world.move_controlled(1, 0);
        assert!(world.is_game_won());

        assert!(!world.move_controlled(1, 0));
        assert_eq!(robot_pos(&world), Some(at(7, 5)));

        world.reset_game_state();
        assert!(world.move_controlled(1, 0));
        assert_eq!(robot_pos(&world), Some(at(8, 5)));
    }

    #[test]
    fn test_invalid_delta_is_rejected() {
        let mut world = world();
        let before = world.entities();

        assert!(!world.move_controlled(2, 0));
        assert!(!world.move_controlled(1, 1));
        assert_eq!(world.entities(), before);
    }

    #[test]
    fn test_recheck_on_settled_board() {
        let mut world = world();
        assert!(!world.move_controlled(0, 0));
        assert!(!world.recheck());
        assert_eq!(robot_pos(&world), Some(at(5, 5)));
    }

    #[test]
    fn test_pushing_a_word_breaks_its_rule() {
        let mut world = world();
        let robot = world.controlled()[0];
        // Walk under the IS of FLAG IS WIN, then push it up.
        world.move_controlled(1, 0);
        world.move_controlled(0, -1);
        assert_eq!(world.store().get(robot).map(|e| e.position), Some(at(6, 4)));

        assert!(world.move_controlled(0, -1));
        assert_eq!(world.active_rules().len(), 1);
        assert!(!world.active_rules().contains("flag", Property::Win));
        assert_eq!(world.entities_at(at(6, 2)).len(), 1);
    }

    #[test]
    fn test_recheck_picks_up_added_tiles() {
        let mut world = world();
        let words = WordTable::default();
        for tile in words.sentence(at(0, 10), "flag", Property::Stop, true) {
            let desc = crate::levels::EntityDesc::Tile(tile);
            world.add(desc.to_entity());
        }

        assert!(world.recheck());
        assert!(world.active_rules().contains("flag", Property::Stop));
    }

    #[test]
    fn test_restart_clears_flags_and_board() {
        let mut world = world();
        world.move_controlled(1, 0);
        world.move_controlled(1, 0);
        assert!(world.is_game_won());

        world.restart(&tiny()).unwrap();
        assert_eq!(world.status(), GameStatus::Playing);
        assert_eq!(robot_pos(&world), Some(at(5, 5)));
        assert_eq!(world.store().len(), tiny().len());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut world = world();
        let saved = world.snapshot();

        world.move_controlled(1, 0);
        assert_eq!(robot_pos(&world), Some(at(6, 5)));

        world.restore(saved).unwrap();
        assert_eq!(robot_pos(&world), Some(at(5, 5)));
        assert_eq!(world.active_rules().len(), 2);
    }

    #[test]
    fn test_restore_rejects_foreign_grid() {
        let mut small = World::from_level(EngineConfig::new(6, 6), &Level::new("empty")).unwrap();
        let big = world().snapshot();

        let err = small.restore(big).unwrap_err();
        assert!(matches!(err, SaveError::OutOfBounds { .. }));
        assert!(small.store().is_empty());
        assert_eq!(small.config().bounds, GridBounds::new(6, 6));
    }
}
