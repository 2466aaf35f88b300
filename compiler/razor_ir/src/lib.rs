//! Razor IR - Intermediate Representation for code generation
//!
//! This crate contains the tree every back-end stage works on:
//! - [`IntermediateNode`] and the closed [`NodeKind`] set, plus the open
//!   [`ExtensionNode`] variant
//! - Annotations and the well-known marker keys
//! - Read-only tag helper and directive descriptors
//! - A double-dispatch [`Visitor`] and an explicit [`AncestorStack`]
//! - Structural editing through [`NodeReference`]
//! - Source documents and per-document [`CodeGenerationOptions`]
//!
//! # Design
//!
//! - **Owned tree**: each node exclusively owns its children. There are no
//!   parent pointers; ancestry is carried as a stack during walks.
//! - **Identity over position**: every node has a [`NodeId`]. References
//!   and markers locate nodes by identity, so edits never act on stale
//!   indices.
//! - **Lazy per-node collections**: annotations and diagnostics stay `None`
//!   until first written.

pub mod annotations;
mod builder;
pub mod descriptors;
mod document;
mod extension;
pub mod extensions;
mod node;
mod options;
pub mod printer;
mod reference;
pub mod visitor;

pub use razor_diagnostic::{Diagnostic, SourceLocation, SourceSpan};

pub use annotations::{AnnotationValue, Annotations};
pub use builder::IrBuilder;
pub use document::{Checksum, ChecksumAlgorithm, CodeDocument, SourceDocument};
pub use extension::{Capability, ExtensionNode, ExtensionNodeAny};
pub use node::{
    AttributeStructure, AttributeValueNode, ChecksumNode, ClassDeclarationNode, DirectiveNode,
    DirectiveTokenNode, DocumentNode, FieldDeclarationNode, HtmlAttributeNode, IntermediateNode,
    IntermediateToken, MethodDeclarationNode, MethodParameter, NamespaceDeclarationNode, NodeId,
    NodeKind, PropertyDeclarationNode, TagHelperHtmlAttributeNode, TagHelperNode,
    TagHelperPropertyNode, TagMode, TokenKind, UsingDirectiveNode,
};
pub use options::CodeGenerationOptions;
pub use reference::{
    find_descendant_nodes, find_descendant_references, find_directive_references, NodeReference,
    ReferenceError,
};
pub use visitor::{walk_children, walk_with_ancestors, AncestorStack, Visitor, WalkAction};
