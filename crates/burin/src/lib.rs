//! # burin
//!
//! Burin - The attribute naming checker and fixer for component templates.
//!
//! ## Name Origin
//!
//! A **burin** (/ˈbjʊərɪn/) is the engraver's chisel: a hardened steel tool
//! that cuts precise, deliberate lines into the printing plate and nothing
//! around them. `burin` makes equally precise cuts into template source:
//! every fix it proposes rewrites exactly one attribute identifier and
//! leaves the surrounding text untouched.
//!
//! ## Features
//!
//! - Enforces one casing discipline (kebab-case or camelCase) across custom
//!   attribute names, with a mechanically correct auto-fix per violation
//! - Rich diagnostic output with code snippets (like oxlint)
//! - LSP-ready design for IDE integration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use burin::{format_results, Linter, OutputFormat};
//!
//! // `props` are attribute nodes produced by the host template parser
//! let linter = Linter::new();
//! let result = linter.lint_props(&props, source, "component.html");
//!
//! if result.has_diagnostics() {
//!     let files = vec![("component.html".to_string(), source.to_string())];
//!     println!("{}", format_results(&[result], &files, OutputFormat::Text));
//! }
//! ```
//!
//! ## Rules
//!
//! - `attribute-hyphenation` - Enforce attribute naming style on custom
//!   components: `always` requires hyphenated names (`my-prop`), `never`
//!   forbids hyphens (`myProp`). Reserved names (`data-*`, `aria-*`,
//!   `slot-scope`) and user-ignored names are never flagged; dynamic
//!   directive arguments (`:[fooBar]`) carry no literal name and are
//!   skipped.

mod config;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod rules;
pub mod telegraph;

pub use config::{ConfigError, HyphenationStyle, RuleConfig};
pub use context::LintContext;
pub use diagnostic::{Fix, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use linter::{Document, LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
pub use telegraph::{Emitter, JsonEmitter, LspDiagnostic, LspEmitter, Telegraph, TextEmitter};

// Boundary types from the node model, re-exported for hosts
pub use burin_maquette::{AttributeIdentifier, IdentifierKind, PropNode};

/// Check a document's attribute nodes with the default rules.
///
/// This is a convenience function for simple use cases.
/// For more control, use [`Linter::new`] directly.
pub fn check(props: &[PropNode], source: &str, filename: &str) -> LintResult {
    Linter::new().lint_props(props, source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burin_maquette::{AttributeNode, Position, SourceLocation};

    #[test]
    fn test_check_function() {
        let source = r#"<custom myProp="value"/>"#;
        let loc = SourceLocation::new(Position::new(8, 1, 9), Position::new(14, 1, 15), "myProp");
        let props = vec![PropNode::Attribute(AttributeNode::new("myProp", loc))];

        let result = check(&props, source, "test.html");
        assert_eq!(result.warning_count, 1);
        assert!(result.diagnostics[0].has_fix());
    }

    #[test]
    fn test_check_valid_document() {
        let source = r#"<custom my-prop="value"/>"#;
        let loc = SourceLocation::new(Position::new(8, 1, 9), Position::new(15, 1, 16), "my-prop");
        let props = vec![PropNode::Attribute(AttributeNode::new("my-prop", loc))];

        let result = check(&props, source, "test.html");
        assert!(!result.has_diagnostics());
    }
}
