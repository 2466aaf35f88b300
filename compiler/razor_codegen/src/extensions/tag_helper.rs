//! The default tag helper execution protocol.
//!
//! At runtime an element with tag helpers becomes:
//!
//! ```text
//! __tagHelperExecutionContext = __tagHelperScopeManager.Begin("p", TagMode, "id", async() => {
//!     <body>
//! });
//! __InputTagHelper = CreateTagHelper<global::InputTagHelper>();
//! __tagHelperExecutionContext.Add(__InputTagHelper);
//! __InputTagHelper.Value = ...;
//! __tagHelperExecutionContext.AddTagHelperAttribute("value", __InputTagHelper.Value, ...);
//! await __tagHelperRunner.RunAsync(__tagHelperExecutionContext);
//! ...
//! __tagHelperExecutionContext = __tagHelperScopeManager.End();
//! ```
//!
//! Design-time output keeps only what the editor needs to type-check the
//! user's code: instance creation, property assignments and the body.

use std::rc::Rc;

use razor_diagnostic::{
    code_blocks_not_supported_in_attributes, inline_markup_not_supported_in_attributes,
};
use razor_ir::extensions::{
    DefaultTagHelperBody, DefaultTagHelperCreate, DefaultTagHelperExecute,
    DefaultTagHelperHtmlAttribute, DefaultTagHelperProperty, DefaultTagHelperRuntime,
    TemplateNode, DEFAULT_TAG_HELPER,
};
use razor_ir::{AttributeStructure, Capability, ExtensionNode, IntermediateNode, NodeKind};

use super::{
    property_accessor, value_style, write_execution_context_call, write_indexer_null_check,
    BACKED_SCOPE_MANAGER, EXECUTION_CONTEXT, EXECUTION_CONTEXT_TYPE, RUNNER, RUNNER_TYPE,
    SCOPE_MANAGER, SCOPE_MANAGER_TYPE, STRING_VALUE_BUFFER, TAG_HELPER_ATTRIBUTE_TYPE,
    TAG_MODE_TYPE,
};
use crate::context::CodeRenderingContext;
use crate::node_writer::{write_padding, RuntimeNodeWriter};
use crate::scope::ScopeBuilder;
use crate::TargetExtension;

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTagHelperTargetExtension;

impl TargetExtension for DefaultTagHelperTargetExtension {
    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        if node.is_extension::<DefaultTagHelperRuntime>() {
            write_runtime(context);
        } else if let Some(body) = node.extension::<DefaultTagHelperBody>() {
            write_body(context, node, body);
        } else if let Some(create) = node.extension::<DefaultTagHelperCreate>() {
            write_create(context, create);
        } else if let Some(attribute) = node.extension::<DefaultTagHelperHtmlAttribute>() {
            write_html_attribute(context, node, attribute);
        } else if let Some(property) = node.extension::<DefaultTagHelperProperty>() {
            write_property(context, node, property);
        } else if node.is_extension::<DefaultTagHelperExecute>() {
            write_execute(context);
        }
    }
}

/// Class members shared by every tag helper element of the class.
fn write_runtime(context: &mut CodeRenderingContext<'_>) {
    if context.is_design_time() {
        return;
    }
    let writer = context.writer_mut();
    writer
        .write_line_hidden_directive()
        .write_pragma("warning disable 0414")
        .write("private ")
        .write_variable_declaration("string", STRING_VALUE_BUFFER, None)
        .write_pragma("warning restore 0414")
        .write("private ")
        .write_variable_declaration(EXECUTION_CONTEXT_TYPE, EXECUTION_CONTEXT, None)
        .write("private ")
        .write_variable_declaration(RUNNER_TYPE, RUNNER, Some(&format!("new {RUNNER_TYPE}()")))
        .write("private ")
        .write_variable_declaration(SCOPE_MANAGER_TYPE, BACKED_SCOPE_MANAGER, None)
        .write("private ")
        .write(SCOPE_MANAGER_TYPE)
        .write(" ")
        .write_line(SCOPE_MANAGER);

    let mut property = writer.build_scope();
    property.write_line("get");
    let mut getter = property.build_scope();
    getter
        .write("if (")
        .write(BACKED_SCOPE_MANAGER)
        .write_line(" == null)");
    {
        let mut branch = getter.build_scope();
        branch
            .write_start_assignment(BACKED_SCOPE_MANAGER)
            .write_start_new_object(SCOPE_MANAGER_TYPE)
            .write("StartTagHelperWritingScope")
            .write_parameter_separator()
            .write("EndTagHelperWritingScope")
            .write_end_method_invocation(true);
    }
    getter.write_return(BACKED_SCOPE_MANAGER);
}

fn write_body(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    body: &DefaultTagHelperBody,
) {
    if context.is_design_time() {
        context.render_children(node);
        return;
    }

    let unique_id = context.generate_unique_id();
    context
        .writer_mut()
        .write_start_assignment(EXECUTION_CONTEXT)
        .write_start_instance_method_invocation(SCOPE_MANAGER, "Begin")
        .write_string_literal(&body.tag_name)
        .write_parameter_separator()
        .write(TAG_MODE_TYPE)
        .write(".")
        .write(body.tag_mode.as_str())
        .write_parameter_separator()
        .write_string_literal(&unique_id)
        .write_parameter_separator();
    {
        // The body writes into the scope the manager opened, not into any
        // redirected writer around the element.
        let mut lambda = context.build_async_lambda(&[]);
        lambda.with_node_writer(Rc::new(RuntimeNodeWriter::new()), |context| {
            context.render_children(node);
        });
    }
    context.writer_mut().write_end_method_invocation(true);
}

fn write_create(context: &mut CodeRenderingContext<'_>, create: &DefaultTagHelperCreate) {
    let design_time = context.is_design_time();
    let writer = context.writer_mut();
    writer
        .write_start_assignment(&create.field_name)
        .write("CreateTagHelper<global::")
        .write(&create.type_name)
        .write(">()")
        .write_line(";");
    if !design_time {
        writer.write_instance_method_invocation(EXECUTION_CONTEXT, "Add", &[&create.field_name]);
    }
}

/// Unbound attribute on a tag helper element.
fn write_html_attribute(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    attribute: &DefaultTagHelperHtmlAttribute,
) {
    if context.is_design_time() {
        context.render_children(node);
        return;
    }

    let style = value_style(attribute.attribute_structure);
    if node.children().is_empty() && attribute.attribute_structure == AttributeStructure::Minimized {
        let mut value = String::new();
        value.push_str("new ");
        value.push_str(TAG_HELPER_ATTRIBUTE_TYPE);
        value.push_str("(\"");
        value.push_str(&attribute.attribute_name);
        value.push_str("\")");
        write_execution_context_call(context, "AddHtmlAttribute", &[&value]);
        return;
    }

    let has_csharp = node.children().iter().any(|child| {
        matches!(
            child.kind(),
            NodeKind::CSharpExpressionAttributeValue(_) | NodeKind::CSharpCodeAttributeValue(_)
        )
    });

    if has_csharp {
        // Dynamic values go through conditional attribute handling piece by
        // piece.
        let pieces = node
            .children()
            .iter()
            .filter(|child| {
                matches!(
                    child.kind(),
                    NodeKind::HtmlAttributeValue(_)
                        | NodeKind::CSharpExpressionAttributeValue(_)
                        | NodeKind::CSharpCodeAttributeValue(_)
                )
            })
            .count();
        context
            .writer_mut()
            .write_start_method_invocation("BeginAddHtmlAttributeValues")
            .write(EXECUTION_CONTEXT)
            .write_parameter_separator()
            .write_string_literal(&attribute.attribute_name)
            .write_parameter_separator()
            .write(&pieces.to_string())
            .write_parameter_separator()
            .write(&style)
            .write_end_method_invocation(true);
        context.with_node_writer(Rc::new(RuntimeNodeWriter::tag_helper_html_attribute()), |context| {
            context.render_children(node);
        });
        context
            .writer_mut()
            .write_method_invocation("EndAddHtmlAttributeValues", &[EXECUTION_CONTEXT]);
    } else {
        // Buffered through the page so everything the value writes, directly
        // or not, is captured.
        context
            .writer_mut()
            .write_method_invocation("BeginWriteTagHelperAttribute", &[]);
        context.with_node_writer(Rc::new(RuntimeNodeWriter::new()), |context| {
            context.render_children(node);
        });
        context
            .writer_mut()
            .write_start_assignment(STRING_VALUE_BUFFER)
            .write_method_invocation("EndWriteTagHelperAttribute", &[])
            .write_start_instance_method_invocation(EXECUTION_CONTEXT, "AddHtmlAttribute")
            .write_string_literal(&attribute.attribute_name)
            .write_parameter_separator()
            .write_start_method_invocation("Html.Raw")
            .write(STRING_VALUE_BUFFER)
            .write_end_method_invocation(false)
            .write_parameter_separator()
            .write(&style)
            .write_end_method_invocation(true);
    }
}

/// Assignment of a bound attribute to its tag helper property.
fn write_property(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    property: &DefaultTagHelperProperty,
) {
    let design_time = context.is_design_time();
    if !design_time && property.is_indexer_name_match {
        write_indexer_null_check(
            context,
            &property.attribute_name,
            &property.tag_helper.type_name,
            &property.field_name,
            &property.property_name,
        );
    }

    let accessor = property_accessor(
        &property.field_name,
        &property.property_name,
        property.indexer_key(),
    );

    // An attribute bound by several tag helpers is evaluated once; later
    // assignments copy the first property.
    let tag_helper = context.tag_helper_context_mut();
    if let Some(previous) = tag_helper.rendered_accessor(&property.attribute_name) {
        let previous = previous.to_string();
        context
            .writer_mut()
            .write_start_assignment(&accessor)
            .write(&previous)
            .write_line(";");
        return;
    }
    tag_helper.record_bound_attribute(&property.attribute_name, &accessor);

    if design_time {
        if property.is_string_value() {
            context.render_children(node);
        } else {
            write_typed_assignment(context, node, property, &accessor, true);
        }
        return;
    }

    if property.is_string_value() {
        context
            .writer_mut()
            .write_method_invocation("BeginWriteTagHelperAttribute", &[]);
        context.with_node_writer(Rc::new(RuntimeNodeWriter::new()), |context| {
            context.render_children(node);
        });
        context
            .writer_mut()
            .write_start_assignment(STRING_VALUE_BUFFER)
            .write_method_invocation("EndWriteTagHelperAttribute", &[])
            .write_start_assignment(&accessor)
            .write(STRING_VALUE_BUFFER)
            .write_line(";");
    } else {
        write_typed_assignment(context, node, property, &accessor, false);
    }

    let style = value_style(property.attribute_structure);
    let attribute_name = {
        let mut literal = crate::CodeWriter::default();
        literal.write_string_literal(&property.attribute_name);
        literal.output()
    };
    write_execution_context_call(
        context,
        "AddTagHelperAttribute",
        &[&attribute_name, &accessor, &style],
    );
}

/// `accessor = value;` for a non-string property, with the value written
/// inline in the attribute's `#line` region.
fn write_typed_assignment(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    property: &DefaultTagHelperProperty,
    accessor: &str,
    padded: bool,
) {
    context.with_line_pragma(node.source(), |context| {
        if padded {
            write_padding(context, accessor.len() + " = ".len(), node);
        }
        context.writer_mut().write_start_assignment(accessor);
        if property.bound_attribute.is_enum && is_single_literal(node) {
            context
                .writer_mut()
                .write("global::")
                .write(property.value_type_name())
                .write(".");
        }
        write_inline_value(context, node, node, property.value_type_name());
        context.writer_mut().write_line(";");
    });
}

/// Check if the value is one piece of literal text, which an enum property
/// reads as a member name.
fn is_single_literal(node: &IntermediateNode) -> bool {
    match node.children() {
        [child] => match child.kind() {
            NodeKind::HtmlContent => true,
            NodeKind::Token(token) => token.is_csharp(),
            _ => false,
        },
        _ => false,
    }
}

/// Write the children of `node` as one C# expression. Code blocks and
/// inline markup cannot be part of an expression and are reported on the
/// property.
fn write_inline_value(
    context: &mut CodeRenderingContext<'_>,
    property_node: &IntermediateNode,
    node: &IntermediateNode,
    value_type: &str,
) {
    for child in node.children() {
        match child.kind() {
            NodeKind::Token(token) => context.write_mapped(&token.content, child.source()),
            NodeKind::HtmlContent | NodeKind::CSharpExpression => {
                write_inline_value(context, property_node, child, value_type);
            }
            NodeKind::CSharpCode => {
                context.add_diagnostic(code_blocks_not_supported_in_attributes(
                    property_node.source().cloned(),
                ));
            }
            NodeKind::Extension(_) if child.is_extension::<TemplateNode>() => {
                context.add_diagnostic(inline_markup_not_supported_in_attributes(
                    property_node.source().cloned(),
                    value_type,
                ));
            }
            _ => {}
        }
    }
}

fn write_execute(context: &mut CodeRenderingContext<'_>) {
    if context.is_design_time() {
        return;
    }
    let output = format!("{EXECUTION_CONTEXT}.Output");
    {
        let writer = context.writer_mut();
        writer
            .write("await ")
            .write_instance_method_invocation(RUNNER, "RunAsync", &[EXECUTION_CONTEXT])
            .write("if (!")
            .write(&output)
            .write_line(".IsContentModified)");
        let mut branch = writer.build_scope();
        branch
            .write("await ")
            .write_instance_method_invocation(EXECUTION_CONTEXT, "SetOutputContentAsync", &[]);
    }
    let node_writer = context.node_writer();
    node_writer.write_expression_value(context, &output);
    context
        .writer_mut()
        .write_start_assignment(EXECUTION_CONTEXT)
        .write_instance_method_invocation(SCOPE_MANAGER, "End", &[]);
}
