//! Attribute-level node types delivered by the host template parser.
//!
//! These are owned shapes: the parser that produces them lives outside this
//! repository, so nothing here allocates or borrows from a parse arena.
//! Locations are byte spans into the original document text.

use burin_trace::String;
use serde::{Deserialize, Serialize};

/// Node type discriminant for attribute-level nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Attribute,
    DirectiveKey,
    Text,
}

/// A position in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl SourceLocation {
    /// Stub location for synthesized nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        source: String::const_new(""),
    };

    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }
}

/// Text node (attribute value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }
}

/// Plain attribute node (`my-prop="foo"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeNode {
    /// Attribute name exactly as written
    pub name: String,
    /// Span of the name alone, excluding value and quotes
    pub name_loc: SourceLocation,
    pub value: Option<TextNode>,
    pub loc: SourceLocation,
}

impl AttributeNode {
    pub fn new(name: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            name_loc: loc.clone(),
            value: None,
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Attribute
    }
}

/// Directive argument (`my-prop` in `v-bind:my-prop`, or `[fooBar]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentNode {
    /// Literal argument text, or the expression text for dynamic arguments
    pub content: String,
    /// True for bracket-delimited expressions (`[fooBar]`)
    pub is_dynamic: bool,
    /// Span of the literal argument text (excluding brackets when dynamic)
    pub loc: SourceLocation,
}

impl ArgumentNode {
    pub fn new(content: impl Into<String>, is_dynamic: bool, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            is_dynamic,
            loc,
        }
    }
}

/// Directive key node (`v-bind:my-prop`, `:my-prop`, `@click`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveKeyNode {
    /// Normalized directive name without prefix (e.g. "bind", "on")
    pub name: String,
    /// Raw key spelling including shorthand (e.g. ":my-prop", "v-bind:my-prop")
    pub raw_name: String,
    /// Directive argument, if any
    pub arg: Option<ArgumentNode>,
    /// Directive modifiers (e.g. ["camel"] in `:my-prop.camel`)
    pub modifiers: Vec<String>,
    pub loc: SourceLocation,
}

impl DirectiveKeyNode {
    pub fn new(
        name: impl Into<String>,
        raw_name: impl Into<String>,
        loc: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            raw_name: raw_name.into(),
            arg: None,
            modifiers: Vec::new(),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::DirectiveKey
    }
}

/// Attribute-level node delivered by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropNode {
    Attribute(AttributeNode),
    Directive(DirectiveKeyNode),
}

impl PropNode {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Attribute(n) => &n.loc,
            Self::Directive(n) => &n.loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Attribute(n) => n.node_type(),
            Self::Directive(n) => n.node_type(),
        }
    }
}
