//! Output formatters for check diagnostics.

mod text;

pub use text::*;

use crate::diagnostic::Fix;
use crate::linter::LintResult;
use burin_maquette::IdentifierKind;
use serde::Serialize;

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with colors and code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format check results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    pub severity: u8,
    pub message: String,
    #[serde(rename = "nodeKind")]
    pub node_kind: Option<IdentifierKind>,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
    pub fix: Option<Fix>,
}

/// Format results as JSON
fn format_json(results: &[LintResult]) -> String {
    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| JsonFileResult {
            file: r.filename.clone(),
            messages: r
                .diagnostics
                .iter()
                .map(|d| JsonMessage {
                    rule_id: d.rule_name,
                    severity: match d.severity {
                        crate::diagnostic::Severity::Error => 2,
                        crate::diagnostic::Severity::Warning => 1,
                    },
                    message: d.message.to_string(),
                    node_kind: d.node_kind,
                    line: d.line,
                    column: d.column,
                    // Identifier spans never cross a line
                    end_line: d.line,
                    end_column: d.column + (d.end - d.start),
                    fix: d.fix.clone(),
                })
                .collect(),
            error_count: r.error_count,
            warning_count: r.warning_count,
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use burin_maquette::{AttributeNode, Position, PropNode, SourceLocation};

    #[test]
    fn test_json_output_carries_fix() {
        let source = r#"<custom myProp="foo"/>"#;
        let loc = SourceLocation::new(Position::new(8, 1, 9), Position::new(14, 1, 15), "myProp");
        let props = vec![PropNode::Attribute(AttributeNode::new("myProp", loc))];
        let result = Linter::new().lint_props(&props, source, "test.html");

        let json = format_results(
            &[result],
            &[("test.html".to_string(), source.to_string())],
            OutputFormat::Json,
        );
        assert!(json.contains("\"ruleId\": \"attribute-hyphenation\""));
        assert!(json.contains("\"nodeKind\": \"PlainName\""));
        assert!(json.contains("\"new_text\": \"my-prop\""));
        assert!(json.contains("\"line\": 1"));
        assert!(json.contains("\"column\": 9"));
    }
}
