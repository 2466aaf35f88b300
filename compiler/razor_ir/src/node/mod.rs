//! The IR node.
//!
//! A tree of [`IntermediateNode`]s is owned top-down: every node exclusively
//! owns its children and holds no back-reference to its parent. Structural
//! context during a walk comes from an explicit ancestor stack (see
//! [`crate::visitor`]), and structural edits go through
//! [`NodeReference`](crate::NodeReference), which re-resolves positions by
//! [`NodeId`] before each splice.

mod kinds;

pub use kinds::{
    AttributeStructure, AttributeValueNode, ChecksumNode, ClassDeclarationNode, DirectiveNode,
    DirectiveTokenNode, DocumentNode, FieldDeclarationNode, HtmlAttributeNode, IntermediateToken,
    MethodDeclarationNode, MethodParameter, NamespaceDeclarationNode, NodeKind,
    PropertyDeclarationNode, TagHelperHtmlAttributeNode, TagHelperNode, TagHelperPropertyNode,
    TagMode, TokenKind, UsingDirectiveNode,
};

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use razor_diagnostic::{Diagnostic, SourceSpan};

use crate::annotations::{AnnotationValue, Annotations};
use crate::extension::ExtensionNode;
use crate::reference::ReferenceError;

static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a node.
///
/// Unique for every node constructed in the process. Identity survives moves
/// within the tree, so references and marker lookups stay valid while
/// siblings are inserted or removed around a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the intermediate representation.
#[derive(Debug)]
pub struct IntermediateNode {
    id: NodeId,
    kind: NodeKind,
    children: Vec<IntermediateNode>,
    source: Option<SourceSpan>,
    annotations: Option<Annotations>,
    diagnostics: Option<Vec<Diagnostic>>,
}

impl IntermediateNode {
    pub fn new(kind: NodeKind) -> Self {
        IntermediateNode {
            id: NodeId::fresh(),
            kind,
            children: Vec::new(),
            source: None,
            annotations: None,
            diagnostics: None,
        }
    }

    /// Wrap an extension payload in a node.
    pub fn extension_node(ext: impl ExtensionNode) -> Self {
        Self::new(NodeKind::Extension(Box::new(ext)))
    }

    #[must_use]
    pub fn with_source(mut self, span: SourceSpan) -> Self {
        self.source = Some(span);
        self
    }

    #[must_use]
    pub fn with_optional_source(mut self, span: Option<SourceSpan>) -> Self {
        self.source = span;
        self
    }

    /// Set a marker annotation while building.
    #[must_use]
    pub fn with_marker(mut self, key: &'static str) -> Self {
        self.mark(key);
        self
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    pub fn source(&self) -> Option<&SourceSpan> {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, span: Option<SourceSpan>) {
        self.source = span;
    }

    // Children

    #[inline]
    pub fn children(&self) -> &[IntermediateNode] {
        &self.children
    }

    /// Check if this node's child list is fixed and empty.
    pub fn has_fixed_children(&self) -> bool {
        self.kind.has_fixed_children()
    }

    /// Mutable access to the child list.
    ///
    /// Fails for kinds that declare a fixed child list.
    pub fn children_mut(&mut self) -> Result<&mut Vec<IntermediateNode>, ReferenceError> {
        if self.has_fixed_children() {
            return Err(ReferenceError::ReadOnlyChildren { node: self.id });
        }
        Ok(&mut self.children)
    }

    /// Append a child.
    pub fn try_add_child(&mut self, child: IntermediateNode) -> Result<(), ReferenceError> {
        self.children_mut()?.push(child);
        Ok(())
    }

    /// Insert a child at `index`, clamped to the end of the list.
    pub fn insert_child(
        &mut self,
        index: usize,
        child: IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let children = self.children_mut()?;
        let index = index.min(children.len());
        children.insert(index, child);
        Ok(())
    }

    /// Append without the fixed-children check. Only for kinds known to
    /// accept children.
    pub(crate) fn push_child(&mut self, child: IntermediateNode) {
        debug_assert!(!self.has_fixed_children());
        self.children.push(child);
    }

    /// Remove and return every child, leaving the list empty.
    pub fn take_children(&mut self) -> Vec<IntermediateNode> {
        std::mem::take(&mut self.children)
    }

    /// Index of the direct child with identity `id`.
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        self.children.iter().position(|c| c.id == id)
    }

    // Annotations

    pub fn annotation(&self, key: &str) -> Option<&AnnotationValue> {
        self.annotations.as_ref().and_then(|a| a.get(key))
    }

    pub fn has_annotation(&self, key: &str) -> bool {
        self.annotation(key).is_some()
    }

    pub fn set_annotation(&mut self, key: &'static str, value: AnnotationValue) {
        self.annotations
            .get_or_insert_with(Annotations::default)
            .insert(key, value);
    }

    /// Place a marker annotation.
    pub fn mark(&mut self, key: &'static str) {
        self.set_annotation(key, AnnotationValue::Marker);
    }

    pub fn remove_annotation(&mut self, key: &str) -> Option<AnnotationValue> {
        self.annotations.as_mut().and_then(|a| a.remove(key))
    }

    /// The annotation map, if any annotation was ever written.
    pub fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }

    // Diagnostics

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_deref().unwrap_or(&[])
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.as_ref().is_some_and(|d| !d.is_empty())
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.get_or_insert_with(Vec::new).push(diagnostic);
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take().unwrap_or_default()
    }

    /// Every diagnostic in the subtree, in pre-order.
    pub fn collect_diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        self.collect_diagnostics_into(&mut out);
        out
    }

    fn collect_diagnostics_into(&self, out: &mut Vec<Diagnostic>) {
        out.extend(self.diagnostics().iter().cloned());
        for child in &self.children {
            child.collect_diagnostics_into(out);
        }
    }

    // Extensions

    /// Downcast the extension payload to `T`.
    pub fn extension<T: ExtensionNode>(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Extension(ext) => ext.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn extension_mut<T: ExtensionNode>(&mut self) -> Option<&mut T> {
        match &mut self.kind {
            NodeKind::Extension(ext) => ext.as_any_mut().downcast_mut::<T>(),
            _ => None,
        }
    }

    pub fn is_extension<T: ExtensionNode>(&self) -> bool {
        self.extension::<T>().is_some()
    }

    // Identity lookups

    /// Find the node with identity `id` in this subtree (pre-order).
    pub fn find_by_id(&self, id: NodeId) -> Option<&IntermediateNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: NodeId) -> Option<&mut IntermediateNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// First node in the subtree carrying the annotation `key`.
    pub fn find_marked(&self, key: &str) -> Option<&IntermediateNode> {
        if self.has_annotation(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_marked(key))
    }

    pub fn find_marked_mut(&mut self, key: &str) -> Option<&mut IntermediateNode> {
        if self.has_annotation(key) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_marked_mut(key))
    }

    /// Number of nodes in the subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    /// Copy the subtree. Every copied node gets a fresh identity.
    #[must_use]
    pub fn deep_clone(&self) -> IntermediateNode {
        IntermediateNode {
            id: NodeId::fresh(),
            kind: self.kind.clone(),
            children: self.children.iter().map(Self::deep_clone).collect(),
            source: self.source.clone(),
            annotations: self.annotations.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }

    // Typed payload accessors

    pub fn as_document(&self) -> Option<&DocumentNode> {
        match &self.kind {
            NodeKind::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_document_mut(&mut self) -> Option<&mut DocumentNode> {
        match &mut self.kind {
            NodeKind::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDeclarationNode> {
        match &self.kind {
            NodeKind::ClassDeclaration(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassDeclarationNode> {
        match &mut self.kind {
            NodeKind::ClassDeclaration(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&IntermediateToken> {
        match &self.kind {
            NodeKind::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Directive payload of a well-formed or malformed directive node.
    pub fn as_directive(&self) -> Option<&DirectiveNode> {
        match &self.kind {
            NodeKind::Directive(directive) | NodeKind::MalformedDirective(directive) => {
                Some(directive)
            }
            _ => None,
        }
    }

    /// Concatenated content of the direct token children.
    pub fn token_content(&self) -> String {
        self.children
            .iter()
            .filter_map(IntermediateNode::as_token)
            .map(|t| t.content.as_str())
            .collect()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
