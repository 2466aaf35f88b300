//! Node writers: how the basic content kinds turn into C#.
//!
//! Literal markup, expressions, code blocks and attribute pieces are written
//! differently at runtime (calls into the page base class) and at design
//! time (assignments the editor can type-check). A [`NodeWriter`] owns that
//! choice. The code target provides the base writer; constructs that
//! redirect output (tag helper bodies, templates, attribute buffers) push
//! their own onto the rendering context for the duration of their
//! children.

mod design_time;
mod runtime;

use std::fmt;

use razor_ir::{
    AttributeValueNode, HtmlAttributeNode, IntermediateNode, TokenKind, UsingDirectiveNode,
};

use crate::context::CodeRenderingContext;
use crate::padding::build_offset_padding;

pub use design_time::{DesignTimeNodeWriter, DESIGN_TIME_VARIABLE};
pub use runtime::RuntimeNodeWriter;

/// Writer for the basic content kinds.
///
/// Writers are shared through `Rc` and hold no mutable state; everything a
/// write produces goes through `context`.
pub trait NodeWriter: fmt::Debug {
    fn write_using_directive(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        using: &UsingDirectiveNode,
    ) {
        write_using(context, node, using);
    }

    fn write_csharp_expression(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode);

    fn write_csharp_code(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode);

    fn write_html_content(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode);

    fn write_html_attribute(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        attribute: &HtmlAttributeNode,
    );

    fn write_html_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    );

    fn write_csharp_expression_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    );

    fn write_csharp_code_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    );

    /// Write an already-formed C# expression to the output, e.g. a tag
    /// helper's rendered result.
    fn write_expression_value(&self, context: &mut CodeRenderingContext<'_>, expression: &str);
}

/// `using Namespace;`, mapped to the directive when it has a span.
fn write_using(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    using: &UsingDirectiveNode,
) {
    match node.source() {
        Some(span) => {
            let mut pragma = context.build_line_pragma(span);
            pragma.writer_mut().write("using ");
            pragma.write_mapped(&using.content, Some(span));
            pragma.writer_mut().write(";");
        }
        None => {
            context.writer_mut().write_using(&using.content);
        }
    }
}

/// Check if every child is a token holding only whitespace.
pub(crate) fn is_whitespace_only(node: &IntermediateNode) -> bool {
    node.children().iter().all(|child| {
        child
            .as_token()
            .is_some_and(|token| token.content.trim().is_empty())
    })
}

/// Concatenated content of the HTML token children.
pub(crate) fn html_text(node: &IntermediateNode) -> String {
    node.children()
        .iter()
        .filter_map(IntermediateNode::as_token)
        .filter(|token| token.kind == TokenKind::Html)
        .map(|token| token.content.as_str())
        .collect()
}

/// Write the padding that puts mapped code back at its template column.
pub(crate) fn write_padding(
    context: &mut CodeRenderingContext<'_>,
    generated_offset: usize,
    node: &IntermediateNode,
) {
    if let Some(span) = node.source() {
        let padding = build_offset_padding(context, generated_offset, span);
        context.writer_mut().write(&padding);
    }
}

/// Statement children of a code attribute value: C# tokens each get their
/// own `#line` region, anything else is rendered normally.
pub(crate) fn write_code_statements(context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
    for child in node.children() {
        match child.as_token() {
            Some(token) if token.kind == TokenKind::CSharp => {
                context.with_line_pragma(child.source(), |context| {
                    write_padding(context, 0, child);
                    context.write_mapped(&token.content, child.source());
                    context.writer_mut().ensure_new_line();
                });
            }
            _ => context.render_node(child),
        }
    }
}

/// `(prefix location, value location, value length)` of an attribute
/// value, all zero without a span.
pub(crate) fn attribute_value_locations(
    node: &IntermediateNode,
    prefix: &str,
) -> (usize, usize, usize) {
    match node.source() {
        Some(span) => {
            let prefix_length = prefix.chars().count();
            (
                span.absolute_index,
                span.absolute_index + prefix_length,
                span.length.saturating_sub(prefix_length),
            )
        }
        None => (0, 0, 0),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
