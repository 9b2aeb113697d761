//! Boundary adapter from parser nodes to checkable identifiers.
//!
//! The checker never inspects [`PropNode`] shapes directly; this module
//! flattens them into [`AttributeIdentifier`], the one value the naming
//! rules operate on. Node shapes the adapter does not recognize classify to
//! `None` and are skipped by the engine.

use crate::ast::{PropNode, SourceLocation};
use burin_trace::String;
use serde::Serialize;

/// Structural category of a checkable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IdentifierKind {
    /// A bare attribute name (`my-prop="foo"`)
    PlainName,
    /// The argument of a binding directive (`my-prop` in `v-bind:my-prop`)
    DirectiveArgument,
}

/// A checkable attribute identifier extracted from a parser node.
///
/// `loc` spans exactly the raw identifier text: fixes built from it never
/// touch the directive prefix, quotes, or the attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeIdentifier {
    /// The identifier exactly as written (`my-prop`, `MyProp`, `propID`)
    pub raw_text: String,
    pub kind: IdentifierKind,
    /// Literal prefix preceding a directive argument (`v-bind:`, `:`);
    /// empty for plain names. Never rewritten.
    pub prefix_text: String,
    /// True when the argument is a bracket expression; such identifiers
    /// have no literal name to rewrite and are never checked.
    pub is_dynamic: bool,
    /// Span of `raw_text` within the document
    pub loc: SourceLocation,
}

impl AttributeIdentifier {
    /// Classify a parser node into a checkable identifier.
    ///
    /// Returns `None` for shapes that carry no renamable prop name: directive
    /// keys other than `bind` (`v-on`, `v-model`, …) and object bindings
    /// without an argument (`v-bind="obj"`).
    pub fn classify(prop: &PropNode) -> Option<Self> {
        match prop {
            PropNode::Attribute(attr) => Some(Self {
                raw_text: attr.name.clone(),
                kind: IdentifierKind::PlainName,
                prefix_text: String::const_new(""),
                is_dynamic: false,
                loc: attr.name_loc.clone(),
            }),
            PropNode::Directive(dir) => {
                if dir.name.as_str() != "bind" {
                    return None;
                }
                let arg = dir.arg.as_ref()?;

                // The prefix is whatever the raw spelling carries before the
                // argument text: ":" for shorthand, "v-bind:" for longform.
                let prefix_len = arg
                    .loc
                    .start
                    .offset
                    .saturating_sub(dir.loc.start.offset) as usize;
                let prefix_text = dir
                    .raw_name
                    .get(..prefix_len)
                    .unwrap_or(dir.raw_name.as_str());

                Some(Self {
                    raw_text: arg.content.clone(),
                    kind: IdentifierKind::DirectiveArgument,
                    prefix_text: String::from(prefix_text),
                    is_dynamic: arg.is_dynamic,
                    loc: arg.loc.clone(),
                })
            }
        }
    }

    /// Prefix + raw text, for diagnostic messages (`v-bind:my-prop`).
    ///
    /// Display only; the editable span is [`Self::loc`], which covers
    /// `raw_text` alone.
    pub fn display_text(&self) -> String {
        let mut text = String::with_capacity(self.prefix_text.len() + self.raw_text.len());
        text.push_str(&self.prefix_text);
        text.push_str(&self.raw_text);
        text
    }
}
