//! Main checker entry point.
//!
//! The engine consumes attribute nodes already produced by the host's
//! template parser; it never parses markup itself. Each document is a pure
//! function from `(nodes, config)` to diagnostics: no shared mutable state,
//! no I/O, nodes processed strictly in document order. Hosts may check
//! documents concurrently without coordination.

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary, TextEdit};
use crate::rule::RuleRegistry;
use burin_maquette::{AttributeIdentifier, PropNode};

/// Check result for a single document
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was checked
    pub filename: String,
    /// Collected diagnostics, in document order
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Apply every carried fix to the source in one pass.
    ///
    /// Edits are confined to their identifier spans and mutually
    /// non-overlapping, so a single reverse-offset sweep is safe; no
    /// conflict detection or reordering is needed.
    pub fn apply_fixes(&self, source: &str) -> String {
        let mut edits: Vec<TextEdit> = self
            .diagnostics
            .iter()
            .filter_map(|d| d.fix.as_ref())
            .flat_map(|fix| fix.edits.iter().cloned())
            .collect();
        edits.sort_by(|a, b| b.start.cmp(&a.start));

        let mut result = source.to_string();
        for edit in edits {
            let start = edit.start as usize;
            let end = edit.end as usize;
            if start <= end && end <= result.len() {
                result.replace_range(start..end, &edit.new_text);
            }
        }
        result
    }
}

/// A parsed document handed over by the host: its name, source text, and
/// attribute nodes in document order.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub source: String,
    pub props: Vec<PropNode>,
}

/// Main checker struct.
///
/// Holds the rule registry and nothing else; every check call is
/// independent, so one `Linter` may serve many documents (or threads).
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Create a new checker with the recommended rules
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
        }
    }

    /// Create a checker with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check one document's attribute nodes.
    ///
    /// Nodes the classifier does not recognize are skipped; everything else
    /// is evaluated by every registered rule, in document order.
    pub fn lint_props(&self, props: &[PropNode], source: &str, filename: &str) -> LintResult {
        tracing::trace!(filename, nodes = props.len(), "checking attribute nodes");

        let mut ctx = LintContext::new(source, filename);

        for prop in props {
            let Some(identifier) = AttributeIdentifier::classify(prop) else {
                continue;
            };
            for rule in self.registry.rules() {
                ctx.current_rule = rule.meta().name;
                rule.check_identifier(&mut ctx, &identifier);
            }
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        tracing::debug!(filename, error_count, warning_count, "checked document");

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Check multiple documents and aggregate results
    pub fn lint_documents(&self, documents: &[Document]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(documents.len());
        let mut summary = LintSummary::default();

        for doc in documents {
            let result = self.lint_props(&doc.props, &doc.source, &doc.filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = documents.len();
        (results, summary)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burin_maquette::{AttributeNode, Position, SourceLocation};

    fn named_attr(source: &str, name: &str) -> PropNode {
        let start = source.find(name).unwrap() as u32;
        let end = start + name.len() as u32;
        let loc = SourceLocation::new(
            Position::new(start, 1, start + 1),
            Position::new(end, 1, end + 1),
            name,
        );
        PropNode::Attribute(AttributeNode::new(name, loc))
    }

    #[test]
    fn test_empty_document() {
        let result = Linter::new().lint_props(&[], "", "test.html");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_props_in_document_order() {
        let source = r#"<custom fooBar="a" bazQux="b"/>"#;
        let props = vec![named_attr(source, "fooBar"), named_attr(source, "bazQux")];
        let result = Linter::new().lint_props(&props, source, "test.html");

        assert_eq!(result.warning_count, 2);
        assert!(result.diagnostics[0].start < result.diagnostics[1].start);
    }

    #[test]
    fn test_apply_fixes_in_one_pass() {
        let source = r#"<custom fooBar="a" bazQux="b"/>"#;
        let props = vec![named_attr(source, "fooBar"), named_attr(source, "bazQux")];
        let result = Linter::new().lint_props(&props, source, "test.html");

        assert_eq!(
            result.apply_fixes(source),
            r#"<custom foo-bar="a" baz-qux="b"/>"#
        );
    }

    #[test]
    fn test_lint_documents_aggregates() {
        let source = r#"<custom fooBar="a"/>"#;
        let docs = vec![
            Document {
                filename: "a.html".to_string(),
                source: source.to_string(),
                props: vec![named_attr(source, "fooBar")],
            },
            Document {
                filename: "b.html".to_string(),
                source: source.to_string(),
                props: vec![named_attr(source, "fooBar")],
            },
        ];
        let (results, summary) = Linter::new().lint_documents(&docs);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.warning_count, 2);
        assert_eq!(summary.file_count, 2);
        assert!(!summary.has_errors());
    }
}
