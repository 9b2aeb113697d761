//! Rule trait and registry for naming rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use burin_maquette::AttributeIdentifier;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Essential rules - prevent errors
    Essential,
    /// Strongly recommended rules - improve readability
    StronglyRecommended,
    /// Recommended rules - ensure consistency
    Recommended,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "attribute-hyphenation")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing naming rules.
///
/// The engine classifies each attribute node into an
/// [`AttributeIdentifier`] and calls every registered rule with it, in
/// document order. Rules report through the context; evaluation is total
/// (every identifier maps to "valid" or a diagnostic, never a failure).
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Called for each classified attribute identifier
    fn check_identifier<'a>(&self, ctx: &mut LintContext<'a>, identifier: &AttributeIdentifier);
}

/// Registry holding all enabled rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with the recommended rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(
            crate::rules::AttributeHyphenation::default(),
        ));
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
