//! IR traversal.
//!
//! [`IntermediateNode::accept`] dispatches on the node kind to the matching
//! `visit_*` method of a [`Visitor`]. Every default implementation falls
//! back to [`Visitor::visit_default`], which walks the children, so a
//! visitor only overrides the kinds it cares about.
//!
//! Nodes hold no parent pointers. Code that needs structural context uses an
//! [`AncestorStack`], either threaded by hand or through
//! [`walk_with_ancestors`].
//!
//! # Example
//!
//! ```text
//! struct CountExpressions(usize);
//!
//! impl<'ir> Visitor<'ir> for CountExpressions {
//!     fn visit_csharp_expression(&mut self, node: &'ir IntermediateNode) {
//!         self.0 += 1;
//!         walk_children(self, node);
//!     }
//! }
//! ```

use std::ops::ControlFlow;

use crate::extension::ExtensionNode;
use crate::node::{
    AttributeValueNode, ChecksumNode, ClassDeclarationNode, DirectiveNode, DirectiveTokenNode,
    DocumentNode, FieldDeclarationNode, HtmlAttributeNode, IntermediateToken,
    MethodDeclarationNode, NamespaceDeclarationNode, NodeKind, PropertyDeclarationNode,
    TagHelperHtmlAttributeNode, TagHelperNode, TagHelperPropertyNode, UsingDirectiveNode,
};
use crate::IntermediateNode;

/// IR visitor.
///
/// Override `visit_*` methods to add behavior at specific kinds. Call
/// [`walk_children`] to continue into children.
pub trait Visitor<'ir> {
    /// Fallback for every kind without an override.
    fn visit_default(&mut self, node: &'ir IntermediateNode) {
        walk_children(self, node);
    }

    fn visit_document(&mut self, node: &'ir IntermediateNode, document: &'ir DocumentNode) {
        let _ = document;
        self.visit_default(node);
    }

    fn visit_checksum(&mut self, node: &'ir IntermediateNode, checksum: &'ir ChecksumNode) {
        let _ = checksum;
        self.visit_default(node);
    }

    fn visit_using_directive(
        &mut self,
        node: &'ir IntermediateNode,
        using: &'ir UsingDirectiveNode,
    ) {
        let _ = using;
        self.visit_default(node);
    }

    fn visit_namespace_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        namespace: &'ir NamespaceDeclarationNode,
    ) {
        let _ = namespace;
        self.visit_default(node);
    }

    fn visit_class_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        class: &'ir ClassDeclarationNode,
    ) {
        let _ = class;
        self.visit_default(node);
    }

    fn visit_method_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        method: &'ir MethodDeclarationNode,
    ) {
        let _ = method;
        self.visit_default(node);
    }

    fn visit_field_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        field: &'ir FieldDeclarationNode,
    ) {
        let _ = field;
        self.visit_default(node);
    }

    fn visit_property_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        property: &'ir PropertyDeclarationNode,
    ) {
        let _ = property;
        self.visit_default(node);
    }

    fn visit_html_content(&mut self, node: &'ir IntermediateNode) {
        self.visit_default(node);
    }

    fn visit_html_attribute(
        &mut self,
        node: &'ir IntermediateNode,
        attribute: &'ir HtmlAttributeNode,
    ) {
        let _ = attribute;
        self.visit_default(node);
    }

    fn visit_html_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let _ = value;
        self.visit_default(node);
    }

    fn visit_csharp_expression(&mut self, node: &'ir IntermediateNode) {
        self.visit_default(node);
    }

    fn visit_csharp_code(&mut self, node: &'ir IntermediateNode) {
        self.visit_default(node);
    }

    fn visit_csharp_expression_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let _ = value;
        self.visit_default(node);
    }

    fn visit_csharp_code_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let _ = value;
        self.visit_default(node);
    }

    fn visit_directive(&mut self, node: &'ir IntermediateNode, directive: &'ir DirectiveNode) {
        let _ = directive;
        self.visit_default(node);
    }

    fn visit_directive_token(
        &mut self,
        node: &'ir IntermediateNode,
        token: &'ir DirectiveTokenNode,
    ) {
        let _ = token;
        self.visit_default(node);
    }

    fn visit_malformed_directive(
        &mut self,
        node: &'ir IntermediateNode,
        directive: &'ir DirectiveNode,
    ) {
        let _ = directive;
        self.visit_default(node);
    }

    fn visit_tag_helper(&mut self, node: &'ir IntermediateNode, tag_helper: &'ir TagHelperNode) {
        let _ = tag_helper;
        self.visit_default(node);
    }

    fn visit_tag_helper_body(&mut self, node: &'ir IntermediateNode) {
        self.visit_default(node);
    }

    fn visit_tag_helper_property(
        &mut self,
        node: &'ir IntermediateNode,
        property: &'ir TagHelperPropertyNode,
    ) {
        let _ = property;
        self.visit_default(node);
    }

    fn visit_tag_helper_html_attribute(
        &mut self,
        node: &'ir IntermediateNode,
        attribute: &'ir TagHelperHtmlAttributeNode,
    ) {
        let _ = attribute;
        self.visit_default(node);
    }

    fn visit_token(&mut self, node: &'ir IntermediateNode, token: &'ir IntermediateToken) {
        let _ = token;
        self.visit_default(node);
    }

    /// Typed hook for extension nodes. Downcast `ext` through
    /// [`ExtensionNodeAny::as_any`](crate::ExtensionNodeAny::as_any) or use
    /// [`IntermediateNode::extension`] to reach a known payload.
    fn visit_extension(&mut self, node: &'ir IntermediateNode, ext: &'ir dyn ExtensionNode) {
        let _ = ext;
        self.visit_default(node);
    }
}

/// Visit every child of `node` in order.
pub fn walk_children<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, node: &'ir IntermediateNode) {
    for child in node.children() {
        child.accept(visitor);
    }
}

impl IntermediateNode {
    /// Dispatch to the visitor method for this node's kind.
    pub fn accept<'ir, V: Visitor<'ir> + ?Sized>(&'ir self, visitor: &mut V) {
        match self.kind() {
            NodeKind::Document(payload) => visitor.visit_document(self, payload),
            NodeKind::Checksum(payload) => visitor.visit_checksum(self, payload),
            NodeKind::UsingDirective(payload) => visitor.visit_using_directive(self, payload),
            NodeKind::NamespaceDeclaration(payload) => {
                visitor.visit_namespace_declaration(self, payload);
            }
            NodeKind::ClassDeclaration(payload) => visitor.visit_class_declaration(self, payload),
            NodeKind::MethodDeclaration(payload) => {
                visitor.visit_method_declaration(self, payload);
            }
            NodeKind::FieldDeclaration(payload) => visitor.visit_field_declaration(self, payload),
            NodeKind::PropertyDeclaration(payload) => {
                visitor.visit_property_declaration(self, payload);
            }
            NodeKind::HtmlContent => visitor.visit_html_content(self),
            NodeKind::HtmlAttribute(payload) => visitor.visit_html_attribute(self, payload),
            NodeKind::HtmlAttributeValue(payload) => {
                visitor.visit_html_attribute_value(self, payload);
            }
            NodeKind::CSharpExpression => visitor.visit_csharp_expression(self),
            NodeKind::CSharpCode => visitor.visit_csharp_code(self),
            NodeKind::CSharpExpressionAttributeValue(payload) => {
                visitor.visit_csharp_expression_attribute_value(self, payload);
            }
            NodeKind::CSharpCodeAttributeValue(payload) => {
                visitor.visit_csharp_code_attribute_value(self, payload);
            }
            NodeKind::Directive(payload) => visitor.visit_directive(self, payload),
            NodeKind::DirectiveToken(payload) => visitor.visit_directive_token(self, payload),
            NodeKind::MalformedDirective(payload) => {
                visitor.visit_malformed_directive(self, payload);
            }
            NodeKind::TagHelper(payload) => visitor.visit_tag_helper(self, payload),
            NodeKind::TagHelperBody => visitor.visit_tag_helper_body(self),
            NodeKind::TagHelperProperty(payload) => {
                visitor.visit_tag_helper_property(self, payload);
            }
            NodeKind::TagHelperHtmlAttribute(payload) => {
                visitor.visit_tag_helper_html_attribute(self, payload);
            }
            NodeKind::Token(payload) => visitor.visit_token(self, payload),
            NodeKind::Extension(payload) => visitor.visit_extension(self, &**payload),
        }
    }
}

/// Explicit stack of the nodes enclosing the current position, outermost
/// first.
#[derive(Clone, Debug, Default)]
pub struct AncestorStack<'ir> {
    nodes: Vec<&'ir IntermediateNode>,
}

impl<'ir> AncestorStack<'ir> {
    pub fn new() -> Self {
        AncestorStack { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: &'ir IntermediateNode) {
        self.nodes.push(node);
    }

    pub fn pop(&mut self) -> Option<&'ir IntermediateNode> {
        self.nodes.pop()
    }

    /// Immediate parent of the current position.
    pub fn parent(&self) -> Option<&'ir IntermediateNode> {
        self.nodes.last().copied()
    }

    /// Innermost ancestor satisfying `predicate`.
    pub fn nearest(
        &self,
        mut predicate: impl FnMut(&IntermediateNode) -> bool,
    ) -> Option<&'ir IntermediateNode> {
        self.nodes.iter().rev().copied().find(|n| predicate(*n))
    }

    /// Ancestors from innermost to outermost.
    pub fn iter(&self) -> impl Iterator<Item = &'ir IntermediateNode> + '_ {
        self.nodes.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// What [`walk_with_ancestors`] does after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkAction {
    Continue,
    SkipChildren,
    Stop,
}

/// Pre-order walk that hands each node its ancestors.
///
/// A node is pushed before its children are walked and popped afterwards,
/// including when the walk stops early. Returns `false` if stopped.
pub fn walk_with_ancestors<'ir, F>(root: &'ir IntermediateNode, mut visit: F) -> bool
where
    F: FnMut(&'ir IntermediateNode, &AncestorStack<'ir>) -> WalkAction,
{
    let mut stack = AncestorStack::new();
    let flow = walk_node(root, &mut stack, &mut visit);
    debug_assert!(stack.is_empty());
    flow.is_continue()
}

fn walk_node<'ir, F>(
    node: &'ir IntermediateNode,
    stack: &mut AncestorStack<'ir>,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(&'ir IntermediateNode, &AncestorStack<'ir>) -> WalkAction,
{
    match visit(node, stack) {
        WalkAction::Stop => return ControlFlow::Break(()),
        WalkAction::SkipChildren => return ControlFlow::Continue(()),
        WalkAction::Continue => {}
    }

    stack.push(node);
    let mut flow = ControlFlow::Continue(());
    for child in node.children() {
        flow = walk_node(child, stack, visit);
        if flow.is_break() {
            break;
        }
    }
    stack.pop();
    flow
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
