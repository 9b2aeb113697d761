//! attribute-hyphenation
//!
//! Enforce attribute naming style on custom component attributes.
//!
//! ## Examples
//!
//! ### Invalid (default: always)
//! ```html
//! <MyComponent myProp="value" />
//! <MyComponent :myProp="value" />
//! ```
//!
//! ### Valid
//! ```html
//! <MyComponent my-prop="value" />
//! <MyComponent :my-prop="value" />
//! ```

use crate::config::{ConfigError, HyphenationStyle, RuleConfig};
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};
use burin_maquette::AttributeIdentifier;
use burin_trace::casing::{camelize, hyphenate, is_hyphenated};
use burin_trace::{CompactString, FxHashSet};
use serde_json::Value;

static META: RuleMeta = RuleMeta {
    name: "attribute-hyphenation",
    description: "Enforce attribute naming style on custom components",
    category: RuleCategory::StronglyRecommended,
    fixable: true,
    default_severity: Severity::Warning,
};

/// Reserved attribute name patterns never subject to casing enforcement.
///
/// A trailing `-` denotes a prefix pattern, anything else an exact literal.
/// Renaming these would break runtime or browser semantics, so they are
/// exempt under every configuration.
pub const RESERVED_ATTRIBUTE_PATTERNS: &[&str] = &[
    // Global HTML attribute families
    "data-",
    "aria-",
    // Legacy framework-reserved name
    "slot-scope",
];

/// Attribute hyphenation rule
pub struct AttributeHyphenation {
    pub style: HyphenationStyle,
    /// Attribute names to ignore (exact match on the bare name)
    pub ignore: FxHashSet<CompactString>,
    /// Reserved name patterns, defaulted to [`RESERVED_ATTRIBUTE_PATTERNS`]
    pub reserved: Vec<CompactString>,
}

impl Default for AttributeHyphenation {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl AttributeHyphenation {
    /// Create the rule from a parsed configuration
    pub fn new(config: RuleConfig) -> Self {
        Self {
            style: config.style,
            ignore: config.ignore,
            reserved: RESERVED_ATTRIBUTE_PATTERNS
                .iter()
                .map(|&p| CompactString::const_new(p))
                .collect(),
        }
    }

    /// Create the rule from the host's `[style, settings?]` option list.
    ///
    /// Fails on malformed configuration before any node is checked.
    pub fn from_options(options: &[Value]) -> Result<Self, ConfigError> {
        RuleConfig::from_options(options).map(Self::new)
    }

    fn is_reserved(&self, name: &str) -> bool {
        for pattern in &self.reserved {
            if pattern.ends_with('-') {
                // Prefix pattern
                if name.starts_with(pattern.as_str()) {
                    return true;
                }
            } else if name == pattern.as_str() {
                return true;
            }
        }
        false
    }
}

impl Rule for AttributeHyphenation {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_identifier<'a>(&self, ctx: &mut LintContext<'a>, identifier: &AttributeIdentifier) {
        // Dynamic arguments carry no literal name to rewrite
        if identifier.is_dynamic {
            return;
        }

        let name = identifier.raw_text.as_str();
        if self.is_reserved(name) || self.ignore.contains(name) {
            return;
        }

        match self.style {
            HyphenationStyle::Always => {
                let kebab = hyphenate(name);
                if name != kebab {
                    ctx.report(
                        LintDiagnostic::warn(
                            META.name,
                            format!("Attribute '{}' must be hyphenated.", identifier.display_text()),
                            &identifier.loc,
                        )
                        .with_node_kind(identifier.kind)
                        .with_help(format!("Use `{}`", kebab))
                        .with_fix(Fix::new(
                            "Hyphenate attribute name",
                            TextEdit::replace(
                                identifier.loc.start.offset,
                                identifier.loc.end.offset,
                                kebab.as_str(),
                            ),
                        )),
                    );
                }
            }
            HyphenationStyle::Never => {
                if is_hyphenated(name) {
                    let camel = camelize(name);
                    ctx.report(
                        LintDiagnostic::warn(
                            META.name,
                            format!(
                                "Attribute '{}' can't be hyphenated.",
                                identifier.display_text()
                            ),
                            &identifier.loc,
                        )
                        .with_node_kind(identifier.kind)
                        .with_help(format!("Use `{}`", camel))
                        .with_fix(Fix::new(
                            "Remove hyphens from attribute name",
                            TextEdit::replace(
                                identifier.loc.start.offset,
                                identifier.loc.end.offset,
                                camel.as_str(),
                            ),
                        )),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burin_maquette::{IdentifierKind, Position, SourceLocation};
    use serde_json::json;

    fn ident(raw: &str, prefix: &str, start: u32) -> AttributeIdentifier {
        let end = start + raw.len() as u32;
        AttributeIdentifier {
            raw_text: CompactString::from(raw),
            kind: if prefix.is_empty() {
                IdentifierKind::PlainName
            } else {
                IdentifierKind::DirectiveArgument
            },
            prefix_text: CompactString::from(prefix),
            is_dynamic: false,
            loc: SourceLocation::new(
                Position::new(start, 1, start + 1),
                Position::new(end, 1, end + 1),
                raw,
            ),
        }
    }

    fn check(rule: &AttributeHyphenation, identifier: &AttributeIdentifier) -> Vec<LintDiagnostic> {
        let mut ctx = LintContext::new("", "test.html");
        ctx.current_rule = META.name;
        rule.check_identifier(&mut ctx, identifier);
        ctx.into_diagnostics()
    }

    #[test]
    fn test_valid_hyphenated() {
        let rule = AttributeHyphenation::default();
        assert!(check(&rule, &ident("my-prop", "", 8)).is_empty());
    }

    #[test]
    fn test_invalid_camel_case() {
        let rule = AttributeHyphenation::default();
        let diags = check(&rule, &ident("myProp", "", 8));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Attribute 'myProp' must be hyphenated.");
        assert_eq!(diags[0].node_kind, Some(IdentifierKind::PlainName));
        assert!(diags[0].has_fix());
    }

    #[test]
    fn test_directive_argument_display_includes_prefix() {
        let rule = AttributeHyphenation::default();
        let diags = check(&rule, &ident("MyProp", "v-bind:", 15));
        assert_eq!(
            diags[0].message,
            "Attribute 'v-bind:MyProp' must be hyphenated."
        );
        // The edit covers the argument alone, never the prefix
        let edit = &diags[0].fix.as_ref().unwrap().edits[0];
        assert_eq!(edit.start, 15);
        assert_eq!(edit.end, 21);
        assert_eq!(edit.new_text, "my-prop");
    }

    #[test]
    fn test_never_style_flags_hyphens() {
        let rule = AttributeHyphenation::from_options(&[json!("never")]).unwrap();
        let diags = check(&rule, &ident("my-prop", ":", 9));
        assert_eq!(diags[0].message, "Attribute ':my-prop' can't be hyphenated.");
        assert_eq!(diags[0].fix.as_ref().unwrap().edits[0].new_text, "myProp");
    }

    #[test]
    fn test_reserved_names_are_exempt() {
        for options in [&[json!("always")], &[json!("never")]] {
            let rule = AttributeHyphenation::from_options(options).unwrap();
            assert!(check(&rule, &ident("data-testId", "", 8)).is_empty());
            assert!(check(&rule, &ident("aria-test", "", 8)).is_empty());
            assert!(check(&rule, &ident("slot-scope", "", 8)).is_empty());
        }
    }

    #[test]
    fn test_ignored_names_override_style() {
        let rule = AttributeHyphenation::from_options(&[
            json!("always"),
            json!({"ignore": ["secondPropID"]}),
        ])
        .unwrap();
        assert!(check(&rule, &ident("secondPropID", ":", 9)).is_empty());

        // Ignoring matches the bare name regardless of prefix spelling
        assert!(check(&rule, &ident("secondPropID", "v-bind:", 15)).is_empty());
        assert!(check(&rule, &ident("secondPropID", "", 8)).is_empty());
    }

    #[test]
    fn test_dynamic_arguments_are_immune() {
        for options in [&[json!("always")], &[json!("never")]] {
            let rule = AttributeHyphenation::from_options(options).unwrap();
            let mut id = ident("fooBar", ":", 10);
            id.is_dynamic = true;
            assert!(check(&rule, &id).is_empty());
            let mut id = ident("foo-bar", ":", 10);
            id.is_dynamic = true;
            assert!(check(&rule, &id).is_empty());
        }
    }

    #[test]
    fn test_uppercase_run_fix() {
        let rule = AttributeHyphenation::default();
        let diags = check(&rule, &ident("propID", "v-bind:", 15));
        assert_eq!(diags[0].fix.as_ref().unwrap().edits[0].new_text, "prop-i-d");
    }

    #[test]
    fn test_fix_output_satisfies_rule() {
        // Re-checking a replacement never yields a further violation
        let always = AttributeHyphenation::default();
        let never = AttributeHyphenation::from_options(&[json!("never")]).unwrap();
        for raw in ["myProp", "MyProp", "propID", "my-prop", "second-custom"] {
            let kebab = hyphenate(raw);
            assert!(check(&always, &ident(&kebab, "", 8)).is_empty());
            let camel = camelize(raw);
            assert!(check(&never, &ident(&camel, "", 8)).is_empty());
        }
    }
}
