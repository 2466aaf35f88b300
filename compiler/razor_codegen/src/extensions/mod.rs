//! Built-in target extensions.
//!
//! One renderer per capability declared in `razor_ir::extensions`. Each
//! downcasts the node payload to the kinds it knows and ignores the rest.

mod design_time;
mod metadata;
mod preallocated;
mod section;
mod tag_helper;
mod template;

use razor_ir::AttributeStructure;

use crate::context::CodeRenderingContext;
use crate::scope::ScopeBuilder;

pub use design_time::DesignTimeDirectiveTargetExtension;
pub use metadata::MetadataAttributeTargetExtension;
pub use preallocated::PreallocatedAttributeTargetExtension;
pub use section::{SectionTargetExtension, SECTION_WRITER};
pub use tag_helper::DefaultTagHelperTargetExtension;
pub use template::{TemplateTargetExtension, TEMPLATE_WRITER};

/// Type a template or buffered attribute value evaluates to.
pub const TEMPLATE_TYPE: &str = "global::Microsoft.AspNetCore.Mvc.Razor.HelperResult";

// Runtime names of the tag helper execution protocol.

const EXECUTION_CONTEXT: &str = "__tagHelperExecutionContext";
const EXECUTION_CONTEXT_TYPE: &str =
    "global::Microsoft.AspNetCore.Razor.Runtime.TagHelpers.TagHelperExecutionContext";
const RUNNER: &str = "__tagHelperRunner";
const RUNNER_TYPE: &str = "global::Microsoft.AspNetCore.Razor.Runtime.TagHelpers.TagHelperRunner";
const SCOPE_MANAGER: &str = "__tagHelperScopeManager";
const BACKED_SCOPE_MANAGER: &str = "__backed__tagHelperScopeManager";
const SCOPE_MANAGER_TYPE: &str =
    "global::Microsoft.AspNetCore.Razor.Runtime.TagHelpers.TagHelperScopeManager";
const STRING_VALUE_BUFFER: &str = "__tagHelperStringValueBuffer";
const TAG_HELPER_ATTRIBUTE_TYPE: &str =
    "global::Microsoft.AspNetCore.Razor.TagHelpers.TagHelperAttribute";
const VALUE_STYLE_TYPE: &str =
    "global::Microsoft.AspNetCore.Razor.TagHelpers.HtmlAttributeValueStyle";
const TAG_MODE_TYPE: &str = "global::Microsoft.AspNetCore.Razor.TagHelpers.TagMode";
const HTML_STRING_TYPE: &str = "global::Microsoft.AspNetCore.Html.HtmlString";

/// `global::...HtmlAttributeValueStyle.DoubleQuotes` and friends.
fn value_style(structure: AttributeStructure) -> String {
    format!("{VALUE_STYLE_TYPE}.{}", structure.as_str())
}

/// `__field.Property`, or `__field.Property["key"]` for an indexer
/// assignment.
fn property_accessor(field_name: &str, property_name: &str, indexer_key: Option<&str>) -> String {
    match indexer_key {
        Some(key) => format!("{field_name}.{property_name}[\"{key}\"]"),
        None => format!("{field_name}.{property_name}"),
    }
}

/// Throw a readable error at runtime when a dictionary property a tag
/// helper exposes for indexer attributes was left null. Written once per
/// `(tag helper type, property)` on each element.
fn write_indexer_null_check(
    context: &mut CodeRenderingContext<'_>,
    attribute_name: &str,
    tag_helper_type: &str,
    field_name: &str,
    property_name: &str,
) {
    if !context
        .tag_helper_context_mut()
        .verify_property_dictionary(tag_helper_type, property_name)
    {
        return;
    }
    let writer = context.writer_mut();
    writer
        .write("if (")
        .write(field_name)
        .write(".")
        .write(property_name)
        .write_line(" == null)");
    let mut scope = writer.build_scope();
    scope
        .write("throw ")
        .write_start_new_object("InvalidOperationException")
        .write_start_method_invocation("InvalidTagHelperIndexerAssignment")
        .write_string_literal(attribute_name)
        .write_parameter_separator()
        .write_string_literal(tag_helper_type)
        .write_parameter_separator()
        .write_string_literal(property_name)
        .write_end_method_invocation(false)
        .write_end_method_invocation(true);
}

/// `__tagHelperExecutionContext.AddTagHelperAttribute(...)` and friends.
fn write_execution_context_call(
    context: &mut CodeRenderingContext<'_>,
    method: &str,
    arguments: &[&str],
) {
    context
        .writer_mut()
        .write_instance_method_invocation(EXECUTION_CONTEXT, method, arguments);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
