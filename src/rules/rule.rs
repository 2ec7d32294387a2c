//! Rules derived from word tiles.
//!
//! A [`Rule`] says "every object called `subject` has `property`". A
//! [`RuleSet`] is the output of one scan: every rule found, in scan order,
//! together with the three tiles that spelled it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId, Property};

/// A live rule: `subject IS property`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Noun text, matched case-insensitively against object type or label.
    pub subject: String,
    pub property: Property,
}

impl Rule {
    pub fn new(subject: impl Into<String>, property: Property) -> Self {
        Self {
            subject: subject.into(),
            property,
        }
    }

    /// Whether this rule applies to `entity`.
    #[must_use]
    pub fn applies_to(&self, entity: &Entity) -> bool {
        entity.matches_subject(&self.subject)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} IS {}", self.subject, self.property)
    }
}

/// One scan match: the rule and the NOUN, VERB, PROPERTY tiles behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule: Rule,
    pub tiles: [EntityId; 3],
}

/// Every rule found by one scan.
///
/// A tile may take part in several matches (a shared noun with one sentence
/// across and one down), and identical rules spelled twice both appear.
/// Equality ignores order, multiplicity and source tiles: two sets are equal
/// when they contain the same `(subject, property)` pairs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RuleSet {
    matches: Vec<RuleMatch>,
}

impl RuleSet {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match.
    pub fn push(&mut self, rule: Rule, tiles: [EntityId; 3]) {
        self.matches.push(RuleMatch { rule, tiles });
    }

    /// Rules in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.matches.iter().map(|m| &m.rule)
    }

    /// Matches in scan order, with their source tiles.
    #[must_use]
    pub fn matches(&self) -> &[RuleMatch] {
        &self.matches
    }

    /// Whether `subject IS property` is active (subject compared exactly).
    #[must_use]
    pub fn contains(&self, subject: &str, property: Property) -> bool {
        self.iter().any(|r| r.subject == subject && r.property == property)
    }

    /// Number of matches, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Tiles currently part of at least one rule.
    #[must_use]
    pub fn active_tiles(&self) -> FxHashSet<EntityId> {
        self.matches.iter().flat_map(|m| m.tiles).collect()
    }

    /// Distinct `(subject, property)` pairs.
    #[must_use]
    pub fn distinct(&self) -> FxHashSet<&Rule> {
        self.iter().collect()
    }

    /// Rules present here but not in `other`.
    #[must_use]
    pub fn added_since<'a>(&'a self, other: &RuleSet) -> Vec<&'a Rule> {
        let before = other.distinct();
        let mut added: Vec<&Rule> = self.distinct().into_iter().filter(|r| !before.contains(r)).collect();
        added.sort_by(|a, b| (&a.subject, a.property).cmp(&(&b.subject, b.property)));
        added
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.distinct() == other.distinct()
    }
}

impl Eq for RuleSet {}
