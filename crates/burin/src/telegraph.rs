//! Telegraph - The message delivery system for check results.
//!
//! Telegraph provides an abstraction layer for transmitting results to
//! various destinations: stdout, JSON consumers, and LSP clients.
//!
//! ## Architecture
//!
//! ```text
//! LintResult --> Telegraph --> Emitter --> Destination
//!                              |
//!                              +-- TextEmitter  --> stdout (rich terminal)
//!                              +-- JsonEmitter  --> JSON format
//!                              +-- LspEmitter   --> LSP diagnostics
//! ```

use crate::diagnostic::Severity;
use crate::linter::LintResult;

/// An emitter that can transmit check diagnostics to a destination.
///
/// Implementations of this trait define how results are formatted and
/// delivered to their target (stdout, LSP, files, etc.).
pub trait Emitter: Send + Sync {
    /// Emit diagnostics for a single file result
    fn emit(&self, result: &LintResult, source: &str) -> String;

    /// Emit a summary of all results
    fn emit_summary(&self, results: &[LintResult]) -> String;

    /// Name of this emitter for identification
    fn name(&self) -> &'static str;
}

/// Telegraph coordinates the delivery of check results to emitters.
pub struct Telegraph {
    emitters: Vec<Box<dyn Emitter>>,
}

impl Telegraph {
    /// Create a new Telegraph with no emitters
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
        }
    }

    /// Create Telegraph with the default text emitter
    pub fn with_text() -> Self {
        let mut telegraph = Self::new();
        telegraph.add_emitter(Box::new(TextEmitter::default()));
        telegraph
    }

    /// Create Telegraph with JSON emitter
    pub fn with_json() -> Self {
        let mut telegraph = Self::new();
        telegraph.add_emitter(Box::new(JsonEmitter));
        telegraph
    }

    /// Add an emitter to the telegraph
    pub fn add_emitter(&mut self, emitter: Box<dyn Emitter>) {
        self.emitters.push(emitter);
    }

    /// Transmit a single result through all emitters
    pub fn transmit(&self, result: &LintResult, source: &str) -> Vec<String> {
        self.emitters
            .iter()
            .map(|e| e.emit(result, source))
            .collect()
    }

    /// Transmit multiple results through all emitters
    pub fn transmit_all(&self, results: &[(LintResult, String)]) -> Vec<String> {
        self.emitters
            .iter()
            .map(|e| {
                let mut output = String::new();
                for (result, source) in results {
                    output.push_str(&e.emit(result, source));
                }
                output.push_str(
                    &e.emit_summary(&results.iter().map(|(r, _)| r.clone()).collect::<Vec<_>>()),
                );
                output
            })
            .collect()
    }
}

impl Default for Telegraph {
    fn default() -> Self {
        Self::with_text()
    }
}

/// Text emitter for rich terminal output
#[derive(Default)]
pub struct TextEmitter {
    /// Whether to use colors in output
    pub colors: bool,
}

impl TextEmitter {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }
}

impl Emitter for TextEmitter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn emit(&self, result: &LintResult, source: &str) -> String {
        use crate::output::format_results;
        use crate::OutputFormat;

        let files = vec![(result.filename.clone(), source.to_string())];
        format_results(std::slice::from_ref(result), &files, OutputFormat::Text)
    }

    fn emit_summary(&self, results: &[LintResult]) -> String {
        let total_errors: usize = results.iter().map(|r| r.error_count).sum();
        let total_warnings: usize = results.iter().map(|r| r.warning_count).sum();
        let file_count = results.len();

        if total_errors == 0 && total_warnings == 0 {
            return String::new();
        }

        format!(
            "\nFound {} error{} and {} warning{} in {} file{}.\n",
            total_errors,
            if total_errors == 1 { "" } else { "s" },
            total_warnings,
            if total_warnings == 1 { "" } else { "s" },
            file_count,
            if file_count == 1 { "" } else { "s" },
        )
    }
}

/// JSON emitter for machine-readable output
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn emit(&self, result: &LintResult, _source: &str) -> String {
        use crate::output::format_results;
        use crate::OutputFormat;

        let files: Vec<(String, String)> = vec![];
        format_results(std::slice::from_ref(result), &files, OutputFormat::Json)
    }

    fn emit_summary(&self, _results: &[LintResult]) -> String {
        // JSON format includes all data in emit(), no separate summary needed
        String::new()
    }
}

/// LSP emitter for Language Server Protocol diagnostics.
///
/// Converts check diagnostics to LSP-compatible format for IDE integration.
pub struct LspEmitter;

/// LSP-compatible diagnostic representation
#[derive(Debug, Clone, serde::Serialize)]
pub struct LspDiagnostic {
    /// The range at which the diagnostic applies
    pub range: LspRange,
    /// The diagnostic's severity (1 = Error, 2 = Warning, 3 = Info, 4 = Hint)
    pub severity: u8,
    /// A human-readable message
    pub message: String,
    /// The source of this diagnostic (e.g., "burin")
    pub source: String,
    /// The diagnostic's code (rule name)
    pub code: String,
}

/// LSP-compatible range
#[derive(Debug, Clone, serde::Serialize)]
pub struct LspRange {
    pub start: LspPosition,
    pub end: LspPosition,
}

/// LSP-compatible position
#[derive(Debug, Clone, serde::Serialize)]
pub struct LspPosition {
    pub line: u32,
    pub character: u32,
}

impl LspEmitter {
    /// Convert a LintResult to LSP diagnostics.
    ///
    /// Diagnostics already carry the identifier's 1-indexed line/column;
    /// LSP positions are 0-indexed, and identifier spans never cross lines.
    pub fn to_lsp_diagnostics(result: &LintResult) -> Vec<LspDiagnostic> {
        result
            .diagnostics
            .iter()
            .map(|d| LspDiagnostic {
                range: LspRange {
                    start: LspPosition {
                        line: d.line.saturating_sub(1),
                        character: d.column.saturating_sub(1),
                    },
                    end: LspPosition {
                        line: d.line.saturating_sub(1),
                        character: d.column.saturating_sub(1) + (d.end - d.start),
                    },
                },
                severity: match d.severity {
                    Severity::Error => 1,
                    Severity::Warning => 2,
                },
                message: if let Some(help) = &d.help {
                    format!("{}\n{}", d.message, help)
                } else {
                    d.message.to_string()
                },
                source: "burin".to_string(),
                code: d.rule_name.to_string(),
            })
            .collect()
    }
}

impl Emitter for LspEmitter {
    fn name(&self) -> &'static str {
        "lsp"
    }

    fn emit(&self, result: &LintResult, _source: &str) -> String {
        let diagnostics = Self::to_lsp_diagnostics(result);
        serde_json::to_string_pretty(&diagnostics).unwrap_or_default()
    }

    fn emit_summary(&self, _results: &[LintResult]) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::LintDiagnostic;
    use burin_maquette::{Position, SourceLocation};

    fn result_with_warning() -> LintResult {
        let loc = SourceLocation::new(
            Position::new(14, 2, 7),
            Position::new(21, 2, 14),
            "my-prop",
        );
        LintResult {
            filename: "test.html".to_string(),
            diagnostics: vec![LintDiagnostic::warn(
                "attribute-hyphenation",
                "Attribute 'my-prop' can't be hyphenated.",
                &loc,
            )
            .with_help("Use `myProp`")],
            error_count: 0,
            warning_count: 1,
        }
    }

    #[test]
    fn test_telegraph_with_text() {
        let telegraph = Telegraph::with_text();
        assert_eq!(telegraph.emitters.len(), 1);
    }

    #[test]
    fn test_telegraph_with_json() {
        let telegraph = Telegraph::with_json();
        assert_eq!(telegraph.emitters.len(), 1);
    }

    #[test]
    fn test_lsp_diagnostic_conversion() {
        let lsp_diagnostics = LspEmitter::to_lsp_diagnostics(&result_with_warning());
        assert_eq!(lsp_diagnostics.len(), 1);
        assert_eq!(lsp_diagnostics[0].severity, 2); // Warning
        assert_eq!(lsp_diagnostics[0].code, "attribute-hyphenation");
        // 0-indexed, second line
        assert_eq!(lsp_diagnostics[0].range.start.line, 1);
        assert_eq!(lsp_diagnostics[0].range.start.character, 6);
        assert_eq!(lsp_diagnostics[0].range.end.character, 13);
    }

    #[test]
    fn test_text_emitter_summary() {
        let emitter = TextEmitter::default();
        let summary = emitter.emit_summary(&[result_with_warning()]);
        assert_eq!(summary, "\nFound 0 errors and 1 warning in 1 file.\n");
    }
}
