//! Hoisted literal tag helper attributes.
//!
//! Attributes whose value is plain text are created once as static fields
//! and shared by every execution of the page.

use razor_ir::extensions::{
    PreallocatedTagHelperHtmlAttribute, PreallocatedTagHelperHtmlAttributeValue,
    PreallocatedTagHelperProperty, PreallocatedTagHelperPropertyValue, PREALLOCATED_ATTRIBUTE,
};
use razor_ir::{AttributeStructure, Capability, ExtensionNode, IntermediateNode};

use super::{
    property_accessor, value_style, write_execution_context_call, write_indexer_null_check,
    HTML_STRING_TYPE, TAG_HELPER_ATTRIBUTE_TYPE,
};
use crate::context::CodeRenderingContext;
use crate::{CodeWriter, TargetExtension};

#[derive(Clone, Copy, Debug, Default)]
pub struct PreallocatedAttributeTargetExtension;

impl TargetExtension for PreallocatedAttributeTargetExtension {
    fn capability(&self) -> Capability {
        PREALLOCATED_ATTRIBUTE
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        if context.is_design_time() {
            return;
        }
        if let Some(value) = node.extension::<PreallocatedTagHelperHtmlAttributeValue>() {
            // Minimized attributes have a name and nothing else.
            let text = (value.attribute_structure != AttributeStructure::Minimized)
                .then_some(value.value.as_str());
            write_declaration(
                context.writer_mut(),
                &value.variable_name,
                &value.attribute_name,
                text,
                value.attribute_structure,
                true,
            );
        } else if let Some(value) = node.extension::<PreallocatedTagHelperPropertyValue>() {
            write_declaration(
                context.writer_mut(),
                &value.variable_name,
                &value.attribute_name,
                Some(value.value.as_str()),
                value.attribute_structure,
                false,
            );
        } else if let Some(attribute) = node.extension::<PreallocatedTagHelperHtmlAttribute>() {
            write_execution_context_call(context, "AddHtmlAttribute", &[&attribute.variable_name]);
        } else if let Some(property) = node.extension::<PreallocatedTagHelperProperty>() {
            write_property(context, property);
        }
    }
}

/// `private static readonly TagHelperAttribute name = new TagHelperAttribute(...);`
///
/// HTML values are wrapped in `HtmlString` so they are not encoded again;
/// property values stay plain strings.
fn write_declaration(
    writer: &mut CodeWriter,
    variable_name: &str,
    attribute_name: &str,
    value: Option<&str>,
    structure: AttributeStructure,
    html_value: bool,
) {
    writer
        .write("private static readonly ")
        .write(TAG_HELPER_ATTRIBUTE_TYPE)
        .write(" ")
        .write_start_assignment(variable_name)
        .write_start_new_object(TAG_HELPER_ATTRIBUTE_TYPE)
        .write_string_literal(attribute_name);
    if let Some(value) = value {
        writer.write_parameter_separator();
        if html_value {
            writer
                .write_start_new_object(HTML_STRING_TYPE)
                .write_string_literal(value)
                .write_end_method_invocation(false);
        } else {
            writer.write_string_literal(value);
        }
        writer
            .write_parameter_separator()
            .write(&value_style(structure));
    }
    writer.write_end_method_invocation(true);
}

fn write_property(context: &mut CodeRenderingContext<'_>, property: &PreallocatedTagHelperProperty) {
    if property.is_indexer_name_match {
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

    // Same single evaluation as the non-hoisted path: a later helper
    // binding this attribute copies the first property.
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

    let value_type = if property.is_indexer_name_match {
        property
            .bound_attribute
            .indexer_type_name
            .as_deref()
            .unwrap_or(property.bound_attribute.type_name.as_str())
    } else {
        property.bound_attribute.type_name.as_str()
    };

    context
        .writer_mut()
        .write_start_assignment(&accessor)
        .write("(")
        .write(value_type)
        .write(")")
        .write(&property.variable_name)
        .write_line(".Value;");
    write_execution_context_call(context, "AddTagHelperAttribute", &[&property.variable_name]);
}
