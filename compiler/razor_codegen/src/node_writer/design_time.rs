use razor_ir::{AttributeValueNode, HtmlAttributeNode, IntermediateNode};

use super::{write_code_statements, write_padding, NodeWriter};
use crate::context::CodeRenderingContext;

/// Variable design-time expressions are assigned to so the editor
/// type-checks them.
pub const DESIGN_TIME_VARIABLE: &str = "__o";

/// Design-time writer: markup is dropped and every piece of user C# lands
/// in a mapped position the editor can analyze.
#[derive(Copy, Clone, Debug, Default)]
pub struct DesignTimeNodeWriter;

impl DesignTimeNodeWriter {
    /// `__o = expression;` inside the expression's `#line` region.
    fn write_assignment(context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        if node.children().is_empty() {
            return;
        }
        context.with_line_pragma(node.source(), |context| {
            write_padding(context, DESIGN_TIME_VARIABLE.len() + " = ".len(), node);
            context.writer_mut().write_start_assignment(DESIGN_TIME_VARIABLE);
            context.render_children(node);
            context.writer_mut().write_line(";");
        });
    }
}

impl NodeWriter for DesignTimeNodeWriter {
    fn write_csharp_expression(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        Self::write_assignment(context, node);
    }

    /// Whitespace-only blocks are kept so the editor has a mapped position
    /// inside empty `@{ }`.
    fn write_csharp_code(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        context.with_line_pragma(node.source(), |context| {
            write_padding(context, 0, node);
            context.render_children(node);
            context.writer_mut().ensure_new_line();
        });
    }

    fn write_html_content(&self, _context: &mut CodeRenderingContext<'_>, _node: &IntermediateNode) {}

    fn write_html_attribute(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _attribute: &HtmlAttributeNode,
    ) {
        context.render_children(node);
    }

    fn write_html_attribute_value(
        &self,
        _context: &mut CodeRenderingContext<'_>,
        _node: &IntermediateNode,
        _value: &AttributeValueNode,
    ) {
    }

    fn write_csharp_expression_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _value: &AttributeValueNode,
    ) {
        Self::write_assignment(context, node);
    }

    fn write_csharp_code_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _value: &AttributeValueNode,
    ) {
        write_code_statements(context, node);
    }

    fn write_expression_value(&self, _context: &mut CodeRenderingContext<'_>, _expression: &str) {}
}
