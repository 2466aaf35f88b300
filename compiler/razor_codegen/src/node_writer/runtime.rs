use std::rc::Rc;

use razor_ir::{AttributeValueNode, HtmlAttributeNode, IntermediateNode};

use super::{
    attribute_value_locations, html_text, is_whitespace_only, write_code_statements,
    write_padding, NodeWriter,
};
use crate::context::CodeRenderingContext;
use crate::scope::ScopeBuilder;
use crate::TEMPLATE_TYPE;

/// Longest literal passed to one `WriteLiteral` call.
const MAX_LITERAL_LENGTH: usize = 1024;

/// Writer parameter of the lambda a code attribute value renders into.
const ATTRIBUTE_VALUE_WRITER: &str = "__razor_attribute_value_writer";

/// Runtime writer: content becomes calls on the page base class.
///
/// The default writer writes to the page's own output (`Write`,
/// `WriteLiteral`, ...). A redirected writer targets a `TextWriter` lambda
/// parameter instead and uses the `...To` overloads with that writer as the
/// first argument.
#[derive(Clone, Debug)]
pub struct RuntimeNodeWriter {
    write_method: &'static str,
    write_literal_method: &'static str,
    begin_write_attribute_method: &'static str,
    write_attribute_value_method: &'static str,
    end_write_attribute_method: &'static str,
    writer_name: Option<String>,
}

impl Default for RuntimeNodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeNodeWriter {
    /// Writer targeting the page's own output.
    pub fn new() -> Self {
        RuntimeNodeWriter {
            write_method: "Write",
            write_literal_method: "WriteLiteral",
            begin_write_attribute_method: "BeginWriteAttribute",
            write_attribute_value_method: "WriteAttributeValue",
            end_write_attribute_method: "EndWriteAttribute",
            writer_name: None,
        }
    }

    /// Writer targeting the `TextWriter` named `writer_name`.
    pub fn redirected(writer_name: impl Into<String>) -> Self {
        RuntimeNodeWriter {
            write_method: "WriteTo",
            write_literal_method: "WriteLiteralTo",
            begin_write_attribute_method: "BeginWriteAttributeTo",
            write_attribute_value_method: "WriteAttributeValueTo",
            end_write_attribute_method: "EndWriteAttributeTo",
            writer_name: Some(writer_name.into()),
        }
    }

    /// Writer for the value pieces of an unbound tag helper attribute with
    /// dynamic content. Each piece is added to the execution context
    /// instead of being written.
    pub fn tag_helper_html_attribute() -> Self {
        RuntimeNodeWriter {
            write_attribute_value_method: "AddHtmlAttributeValue",
            ..Self::new()
        }
    }

    pub fn writer_name(&self) -> Option<&str> {
        self.writer_name.as_deref()
    }

    /// `Method(` or `MethodTo(writer, `.
    fn write_start(&self, context: &mut CodeRenderingContext<'_>, method: &str) {
        let writer = context.writer_mut();
        writer.write_start_method_invocation(method);
        if let Some(writer_name) = &self.writer_name {
            writer.write(writer_name).write_parameter_separator();
        }
    }

    /// Length of what [`Self::write_start`] writes for `method`.
    fn start_length(&self, method: &str) -> usize {
        method.len() + 1 + self.writer_name.as_ref().map_or(0, |name| name.len() + 2)
    }

    /// `, location, length, literal);` closing an attribute value call.
    fn write_value_tail(
        context: &mut CodeRenderingContext<'_>,
        value_location: usize,
        value_length: usize,
        literal: bool,
    ) {
        context
            .writer_mut()
            .write_parameter_separator()
            .write(&value_location.to_string())
            .write_parameter_separator()
            .write(&value_length.to_string())
            .write_parameter_separator()
            .write_boolean_literal(literal)
            .write_end_method_invocation(true);
    }

    /// `"prefix", location, ` opening the arguments of an attribute value
    /// call.
    fn write_value_head(
        &self,
        context: &mut CodeRenderingContext<'_>,
        prefix: &str,
        prefix_location: usize,
    ) {
        self.write_start(context, self.write_attribute_value_method);
        context
            .writer_mut()
            .write_string_literal(prefix)
            .write_parameter_separator()
            .write(&prefix_location.to_string())
            .write_parameter_separator();
    }
}

impl NodeWriter for RuntimeNodeWriter {
    fn write_csharp_expression(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        if node.children().is_empty() {
            return;
        }
        context.with_line_pragma(node.source(), |context| {
            write_padding(context, self.start_length(self.write_method), node);
            self.write_start(context, self.write_method);
            context.render_children(node);
            context.writer_mut().write_end_method_invocation(true);
        });
    }

    fn write_csharp_code(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        if is_whitespace_only(node) {
            return;
        }
        context.with_line_pragma(node.source(), |context| {
            write_padding(context, 0, node);
            context.render_children(node);
            context.writer_mut().ensure_new_line();
        });
    }

    fn write_html_content(&self, context: &mut CodeRenderingContext<'_>, node: &IntermediateNode) {
        let text = html_text(node);
        let chars: Vec<char> = text.chars().collect();
        for chunk in chars.chunks(MAX_LITERAL_LENGTH) {
            let literal: String = chunk.iter().collect();
            self.write_start(context, self.write_literal_method);
            context
                .writer_mut()
                .write_string_literal(&literal)
                .write_end_method_invocation(true);
        }
    }

    fn write_html_attribute(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        attribute: &HtmlAttributeNode,
    ) {
        let (prefix_location, suffix_location) = match node.source() {
            Some(span) => (
                span.absolute_index,
                span.end_index()
                    .saturating_sub(attribute.suffix.chars().count()),
            ),
            None => (0, 0),
        };

        self.write_start(context, self.begin_write_attribute_method);
        context
            .writer_mut()
            .write_string_literal(&attribute.attribute_name)
            .write_parameter_separator()
            .write_string_literal(&attribute.prefix)
            .write_parameter_separator()
            .write(&prefix_location.to_string())
            .write_parameter_separator()
            .write_string_literal(&attribute.suffix)
            .write_parameter_separator()
            .write(&suffix_location.to_string())
            .write_parameter_separator()
            .write(&node.children().len().to_string())
            .write_end_method_invocation(true);

        context.render_children(node);

        context
            .writer_mut()
            .write_start_method_invocation(self.end_write_attribute_method);
        if let Some(writer_name) = &self.writer_name {
            context.writer_mut().write(writer_name);
        }
        context.writer_mut().write_end_method_invocation(true);
    }

    fn write_html_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    ) {
        let (prefix_location, value_location, value_length) =
            attribute_value_locations(node, &value.prefix);
        self.write_value_head(context, &value.prefix, prefix_location);
        context.writer_mut().write_string_literal(&html_text(node));
        Self::write_value_tail(context, value_location, value_length, true);
    }

    fn write_csharp_expression_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    ) {
        let (prefix_location, value_location, value_length) =
            attribute_value_locations(node, &value.prefix);
        context.with_line_pragma(node.source(), |context| {
            self.write_value_head(context, &value.prefix, prefix_location);
            context.render_children(node);
            Self::write_value_tail(context, value_location, value_length, false);
        });
    }

    fn write_csharp_code_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        value: &AttributeValueNode,
    ) {
        let (prefix_location, value_location, value_length) =
            attribute_value_locations(node, &value.prefix);
        self.write_value_head(context, &value.prefix, prefix_location);
        context.writer_mut().write_start_new_object(TEMPLATE_TYPE);
        {
            let mut lambda = context.build_async_lambda(&[ATTRIBUTE_VALUE_WRITER]);
            lambda.with_node_writer(
                Rc::new(RuntimeNodeWriter::redirected(ATTRIBUTE_VALUE_WRITER)),
                |context| write_code_statements(context, node),
            );
        }
        context.writer_mut().write_end_method_invocation(false);
        Self::write_value_tail(context, value_location, value_length, false);
    }

    fn write_expression_value(&self, context: &mut CodeRenderingContext<'_>, expression: &str) {
        self.write_start(context, self.write_method);
        context
            .writer_mut()
            .write(expression)
            .write_end_method_invocation(true);
    }
}
