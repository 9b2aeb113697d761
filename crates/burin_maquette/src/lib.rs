//! Maquette - The attribute node model for Burin.
//!
//! ## Name Origin
//!
//! A **maquette** (/mæˈkɛt/) is the small preliminary model a sculptor
//! builds before committing to the final material. This crate is the
//! preliminary model of a template's attributes: the node shapes an external
//! template parser delivers, reduced to exactly what the naming checker
//! needs to reason about them.
//!
//! # Modules
//!
//! - **ast**: attribute-level node types with source locations, the contract
//!   with the host parser
//! - **identifier**: the boundary adapter turning a raw node into a checkable
//!   [`AttributeIdentifier`](identifier::AttributeIdentifier)
//!
//! The checker itself (`burin`) never touches the parser's node shapes
//! directly; everything flows through [`identifier::AttributeIdentifier`].

pub mod ast;
pub mod identifier;

pub use ast::{
    ArgumentNode, AttributeNode, DirectiveKeyNode, NodeType, Position, PropNode, SourceLocation,
    TextNode,
};
pub use identifier::{AttributeIdentifier, IdentifierKind};
