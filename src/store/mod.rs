//! Entity storage.
//!
//! Pure storage and query: the store never interprets properties beyond
//! filtering by them. All rule and movement logic runs against it from the
//! `rules` and `movement` modules.

pub mod entity_store;

pub use entity_store::EntityStore;
