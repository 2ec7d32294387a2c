//! Rule derivation and property reconciliation.
//!
//! One evaluation pass is `derive_rules` followed by `apply_rules`:
//! - `derive_rules` reads the word tiles and yields a `RuleSet`
//! - `apply_rules` rewrites every entity's effective properties from it
//!
//! The pass is idempotent: an unchanged tile layout yields an equal rule
//! set and leaves every property set untouched.

pub mod rule;
pub mod scanner;
pub mod reconciler;

pub use rule::{Rule, RuleMatch, RuleSet};
pub use scanner::derive_rules;
pub use reconciler::{apply_rules, next_properties};
