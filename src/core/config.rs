//! Engine configuration.
//!
//! Hosts configure the engine once at startup by providing:
//! - `GridBounds`: Board dimensions
//! - `WordTable`: Display words for properties, the verb word, tile colors
//! - `EngineConfig`: Combines both
//!
//! Configuration is an immutable value owned by the `World`; nothing here is
//! global or mutated during play.

use serde::{Deserialize, Serialize};

use super::entity::{eq_ignore_case, ElementType};
use super::position::{GridBounds, Position};
use super::property::Property;
use crate::levels::TileDesc;

/// An sRGB color for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Word text and presentation for rule tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    /// Display word per property, indexed by `Property as usize`.
    property_words: [String; 5],

    /// The linking verb. Rules only form through a verb tile with this text.
    verb: String,

    /// Tile background per element type, indexed by `ElementType as usize`.
    colors: [Rgb; 3],
}

impl Default for WordTable {
    fn default() -> Self {
        Self {
            property_words: [
                "YOU".to_string(),
                "PUSH".to_string(),
                "STOP".to_string(),
                "WIN".to_string(),
                "KILL".to_string(),
            ],
            verb: "IS".to_string(),
            colors: [Rgb(230, 180, 80), Rgb(150, 200, 250), Rgb(200, 130, 220)],
        }
    }
}

impl WordTable {
    /// Create the standard word table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display word for a property.
    #[must_use]
    pub fn word_for(&self, property: Property) -> &str {
        &self.property_words[property as usize]
    }

    /// Look up the property a word names, ignoring case.
    #[must_use]
    pub fn property_for(&self, text: &str) -> Option<Property> {
        Property::ALL
            .into_iter()
            .find(|&p| eq_ignore_case(self.word_for(p), text))
    }

    /// The linking verb text.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Whether `text` is the linking verb, ignoring case.
    #[must_use]
    pub fn is_verb(&self, text: &str) -> bool {
        eq_ignore_case(&self.verb, text)
    }

    /// Tile color for an element type.
    #[must_use]
    pub fn color(&self, element: ElementType) -> Rgb {
        self.colors[element as usize]
    }

    /// Override the word for a property.
    #[must_use]
    pub fn with_word(mut self, property: Property, text: impl Into<String>) -> Self {
        self.property_words[property as usize] = text.into();
        self
    }

    /// Override the verb word.
    #[must_use]
    pub fn with_verb(mut self, text: impl Into<String>) -> Self {
        self.verb = text.into();
        self
    }

    /// Override an element type's color.
    #[must_use]
    pub fn with_color(mut self, element: ElementType, color: Rgb) -> Self {
        self.colors[element as usize] = color;
        self
    }

    // === Tile factories ===

    /// A NOUN tile naming `name`.
    pub fn noun(&self, position: Position, name: impl Into<String>) -> TileDesc {
        TileDesc {
            position,
            element: ElementType::Noun,
            value: name.into(),
            bound_property: None,
        }
    }

    /// A VERB tile carrying the configured verb.
    pub fn verb_tile(&self, position: Position) -> TileDesc {
        TileDesc {
            position,
            element: ElementType::Verb,
            value: self.verb.clone(),
            bound_property: None,
        }
    }

    /// A PROPERTY tile bound to `property`, labelled with its display word.
    pub fn property(&self, position: Position, property: Property) -> TileDesc {
        TileDesc {
            position,
            element: ElementType::Property,
            value: self.word_for(property).to_string(),
            bound_property: Some(property),
        }
    }

    /// Three tiles spelling `subject IS property`, horizontally from `start`
    /// when `horizontal`, otherwise downwards.
    pub fn sentence(
        &self,
        start: Position,
        subject: impl Into<String>,
        property: Property,
        horizontal: bool,
    ) -> [TileDesc; 3] {
        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };
        [
            self.noun(start, subject),
            self.verb_tile(Position::new(start.x + dx, start.y + dy)),
            self.property(Position::new(start.x + 2 * dx, start.y + 2 * dy), property),
        ]
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board dimensions.
    pub bounds: GridBounds,

    /// Word and color tables.
    pub words: WordTable,
}

impl EngineConfig {
    /// Create a configuration for a `columns` × `rows` board with standard words.
    pub fn new(columns: i32, rows: i32) -> Self {
        assert!(columns > 0 && rows > 0, "Grid must have at least one cell");

        Self {
            bounds: GridBounds::new(columns, rows),
            words: WordTable::default(),
        }
    }

    /// Replace the word table.
    #[must_use]
    pub fn with_words(mut self, words: WordTable) -> Self {
        self.words = words;
        self
    }
}
