//! Trace - The preparatory groundwork for Burin.
//!
//! This crate provides the foundational string utilities shared by the Burin
//! attribute naming checker, much like the trace an engraver transfers onto
//! the plate before the first cut: the outline every later stroke follows.
//!
//! # Modules
//!
//! - **casing**: case-style detection and conversion for attribute
//!   identifiers (kebab-case ↔ camelCase)
//!
//! # Example
//!
//! ```
//! use burin_trace::casing::{camelize, hyphenate, is_hyphenated};
//!
//! assert_eq!(hyphenate("myProp"), "my-prop");
//! assert_eq!(camelize("my-prop"), "myProp");
//! assert!(is_hyphenated("my-prop"));
//! ```

pub mod casing;

pub use casing::{camelize, capitalize, hyphenate, is_camel_case, is_hyphenated, is_kebab_case};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};
