//! Tree construction helpers.
//!
//! [`IrBuilder`] builds a tree with an explicit open-container stack, the
//! shape an upstream lowering stage produces it in. The associated
//! constructors on [`IntermediateNode`] cover the common leaf shapes.

use std::sync::Arc;

use razor_diagnostic::SourceSpan;

use crate::descriptors::{DirectiveDescriptor, DirectiveTokenDescriptor};
use crate::{
    CodeGenerationOptions, DirectiveNode, DirectiveTokenNode, DocumentNode, IntermediateNode,
    IntermediateToken, NodeKind, ReferenceError, TokenKind, UsingDirectiveNode,
};

/// Stack-based tree builder.
///
/// The first structural error (adding to a node with a fixed child list) is
/// kept and returned by [`IrBuilder::build`]; later calls are ignored.
#[derive(Debug)]
pub struct IrBuilder {
    stack: Vec<IntermediateNode>,
    error: Option<ReferenceError>,
}

impl IrBuilder {
    pub fn new(root: IntermediateNode) -> Self {
        IrBuilder {
            stack: vec![root],
            error: None,
        }
    }

    /// Start a tree rooted at an unclassified document node.
    pub fn document(options: CodeGenerationOptions) -> Self {
        Self::new(IntermediateNode::new(NodeKind::Document(DocumentNode {
            document_kind: None,
            options,
        })))
    }

    /// The innermost open node.
    pub fn current(&self) -> Option<&IntermediateNode> {
        self.stack.last()
    }

    /// Open `node` as a container. Subsequent adds go into it.
    pub fn push(&mut self, node: IntermediateNode) -> &mut Self {
        if self.error.is_none() {
            self.stack.push(node);
        }
        self
    }

    /// Close the innermost container and append it to its parent. Closing
    /// the root is a no-op.
    pub fn pop(&mut self) -> &mut Self {
        if self.error.is_some() || self.stack.len() < 2 {
            return self;
        }
        if let Some(node) = self.stack.pop() {
            self.add(node);
        }
        self
    }

    /// Append `node` to the innermost open container.
    pub fn add(&mut self, node: IntermediateNode) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if let Some(parent) = self.stack.last_mut() {
            if let Err(err) = parent.try_add_child(node) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Close every open container and return the root.
    pub fn build(mut self) -> Result<IntermediateNode, ReferenceError> {
        while self.stack.len() > 1 {
            self.pop();
            if let Some(err) = self.error.take() {
                return Err(err);
            }
        }
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.stack.pop().ok_or(ReferenceError::RootHasNoParent)
    }
}

fn with_token(
    kind: NodeKind,
    token_kind: TokenKind,
    content: &str,
    span: Option<SourceSpan>,
) -> IntermediateNode {
    let token = IntermediateNode::token(token_kind, content).with_optional_source(span.clone());
    let mut node = IntermediateNode::new(kind).with_optional_source(span);
    node.push_child(token);
    node
}

impl IntermediateNode {
    pub fn token(kind: TokenKind, content: impl Into<String>) -> Self {
        Self::new(NodeKind::Token(IntermediateToken::new(kind, content)))
    }

    /// Literal markup holding a single HTML token.
    pub fn html_content(content: &str, span: Option<SourceSpan>) -> Self {
        with_token(NodeKind::HtmlContent, TokenKind::Html, content, span)
    }

    /// `@expr` holding a single C# token.
    pub fn csharp_expression(content: &str, span: Option<SourceSpan>) -> Self {
        with_token(NodeKind::CSharpExpression, TokenKind::CSharp, content, span)
    }

    /// `@{ ... }` holding a single C# token.
    pub fn csharp_code(content: &str, span: Option<SourceSpan>) -> Self {
        with_token(NodeKind::CSharpCode, TokenKind::CSharp, content, span)
    }

    pub fn using_directive(content: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self::new(NodeKind::UsingDirective(UsingDirectiveNode {
            content: content.into(),
        }))
        .with_optional_source(span)
    }

    /// Empty directive node for `descriptor`.
    pub fn directive(descriptor: &Arc<DirectiveDescriptor>) -> Self {
        Self::new(NodeKind::Directive(DirectiveNode {
            directive_name: descriptor.directive.clone(),
            descriptor: Arc::clone(descriptor),
        }))
    }

    /// Empty malformed-directive node for `descriptor`.
    pub fn malformed_directive(descriptor: &Arc<DirectiveDescriptor>) -> Self {
        Self::new(NodeKind::MalformedDirective(DirectiveNode {
            directive_name: descriptor.directive.clone(),
            descriptor: Arc::clone(descriptor),
        }))
    }

    pub fn directive_token(
        descriptor: DirectiveTokenDescriptor,
        content: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self::new(NodeKind::DirectiveToken(DirectiveTokenNode {
            content: content.into(),
            descriptor,
        }))
        .with_optional_source(span)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
