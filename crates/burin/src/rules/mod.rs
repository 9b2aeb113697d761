//! Naming rules.
//!
//! Rules implement the [`Rule`](crate::rule::Rule) trait and are registered
//! through [`RuleRegistry`](crate::rule::RuleRegistry).

mod attribute_hyphenation;

pub use attribute_hyphenation::{AttributeHyphenation, RESERVED_ATTRIBUTE_PATTERNS};
