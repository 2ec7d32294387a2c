//! Win / kill / game-over evaluation.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, Property};
use crate::store::EntityStore;

/// Where a play session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// A controlled entity reached a WIN cell. Terminal until reset.
    Won,
    /// No controlled entity remains. Terminal until reset.
    Over,
}

/// Sticky outcome flags.
///
/// Set only by [`GameFlags::check_state`]; cleared only by
/// [`GameFlags::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFlags {
    won: bool,
    over: bool,
}

impl GameFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Derived status. A win takes precedence if both flags are set.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Over
        } else {
            GameStatus::Playing
        }
    }

    /// Clear both flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Evaluate the board after a move.
    ///
    /// - No controlled entity: game over.
    /// - Otherwise each controlled entity, in store order, looks at its own
    ///   cell (itself included): KILL there removes it from the store; else
    ///   WIN there wins the game and stops evaluation.
    /// - If kills removed the last controlled entity: game over.
    ///
    /// Returns the ids removed by KILL.
    pub fn check_state(&mut self, store: &mut EntityStore) -> Vec<EntityId> {
        let controlled = store.objects_with(Property::Player);
        if controlled.is_empty() {
            self.mark_over();
            return Vec::new();
        }

        let mut killed = Vec::new();
        for id in controlled {
            let Some(cell) = store.get(id).map(|e| e.position) else { continue };
            let (deadly, winning) = {
                let occupants = store.at(cell);
                (
                    occupants.iter().any(|e| e.has(Property::Kill)),
                    occupants.iter().any(|e| e.has(Property::Win)),
                )
            };

            if deadly {
                if let Some(victim) = store.remove(id) {
                    info!("{} ({}) killed at {}", id, victim.name(), cell);
                    killed.push(id);
                }
            } else if winning {
                if !self.won {
                    info!("{} reached a win cell at {}", id, cell);
                }
                self.won = true;
                break;
            }
        }

        if !killed.is_empty() && store.objects_with(Property::Player).is_empty() {
            self.mark_over();
        }

        killed
    }

    fn mark_over(&mut self) {
        if !self.over {
            info!("game over: no controlled entities remain");
        }
        self.over = true;
    }
}
